use super::design_pass::is_rtl_locale;
use crate::error::Result;
use crate::pipeline::ConfigPass;
use crate::types::BackendConfig;

/// Picks the model the backend opens on and the text direction
///
/// The model is the first one declared. The direction is the declared
/// `design.rtl`, else derived from the rendering locale when one is given,
/// else from the configured locale.
#[derive(Debug, Default)]
pub struct DefaultPass {
    locale: Option<String>,
}

impl DefaultPass {
    pub fn new(locale: Option<String>) -> Self {
        Self { locale }
    }
}

impl ConfigPass for DefaultPass {
    fn name(&self) -> &'static str {
        "default"
    }

    fn process(&self, mut config: BackendConfig) -> Result<BackendConfig> {
        config.default_model_name = config.models.keys().next().cloned();

        let declared = config.design.declared_rtl.take();
        config.design.rtl = declared.unwrap_or_else(|| {
            self.locale
                .as_deref()
                .or(config.locale.as_deref())
                .is_some_and(is_rtl_locale)
        });

        Ok(config)
    }
}
