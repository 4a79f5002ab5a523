//! Generated stylesheet of the backend design

use crate::error::Result;
use crate::pipeline::ConfigPass;
use crate::types::{BackendConfig, ColorScheme, DesignConfig};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("literal pattern"));

/// Locales written right to left
const RTL_LOCALES: [&str; 3] = ["ar", "fa", "he"];

pub fn is_rtl_locale(locale: &str) -> bool {
    let language = locale
        .split(['_', '-'])
        .next()
        .unwrap_or(locale)
        .to_lowercase();
    RTL_LOCALES.contains(&language.as_str())
}

/// Render the custom stylesheet of a design, minified
pub fn render_custom_css(design: &DesignConfig) -> String {
    let (body_background, sidebar_background, text_color) = match design.color_scheme {
        ColorScheme::Dark => ("#ecf0f5", "#222d32", "#b8c7ce"),
        ColorScheme::Light => ("#f9fafc", "#ffffff", "#444444"),
    };
    let direction = if design.rtl { "rtl" } else { "ltr" };
    let brand = design.brand_color.as_str();

    let css = format!(
        r#"
        :root {{
            --color-primary: {brand};
            --body-bg: {body_background};
            --sidebar-bg: {sidebar_background};
            --sidebar-color: {text_color};
        }}
        body {{
            direction: {direction};
        }}
        .main-header .logo, .sidebar-menu > li.active > a {{
            background-color: {brand};
        }}
        a, .btn-link {{
            color: {brand};
        }}
        "#
    );

    let single_line = css.replace('\n', " ");
    WHITESPACE_RE.replace_all(&single_line, " ").trim().to_string()
}

/// Registered only when the resolver is built with rendering settings
#[derive(Debug, Default)]
pub struct DesignPass;

impl ConfigPass for DesignPass {
    fn name(&self) -> &'static str {
        "design"
    }

    fn process(&self, mut config: BackendConfig) -> Result<BackendConfig> {
        let css = render_custom_css(&config.design);
        debug!("Generated {} bytes of custom CSS", css.len());
        config.internal.custom_css = css;

        Ok(config)
    }
}
