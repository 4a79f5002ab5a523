//! Template discovery
//!
//! Templates are identified by name (`backoffice/Product/list.html`,
//! `@Backoffice/default/field_text.html`). A [`TemplateSource`] lists the
//! names an application provides; bundled defaults are always available.

pub mod source;

pub use source::{FilesystemTemplates, StaticTemplates, TemplateSource};

use crate::error::Result;
use std::collections::HashSet;

/// Namespace of the templates shipped with the backend
pub const BUNDLED_NAMESPACE: &str = "@Backoffice/default";

/// Directory applications use to override templates by convention
pub const CONVENTION_ROOT: &str = "backoffice";

pub const TEMPLATE_EXTENSION: &str = ".html";

/// Every template slot with a bundled default
pub const TEMPLATE_SLOTS: &[&str] = &[
    "layout",
    "menu",
    "edit",
    "list",
    "new",
    "show",
    "exception",
    "flash_messages",
    "paginator",
    "field_array",
    "field_association",
    "field_bigint",
    "field_boolean",
    "field_date",
    "field_dateinterval",
    "field_datetime",
    "field_datetimetz",
    "field_decimal",
    "field_email",
    "field_float",
    "field_id",
    "field_image",
    "field_integer",
    "field_json",
    "field_json_array",
    "field_object",
    "field_raw",
    "field_simple_array",
    "field_smallint",
    "field_string",
    "field_tel",
    "field_text",
    "field_time",
    "field_toggle",
    "field_url",
    "label_empty",
    "label_inaccessible",
    "label_null",
    "label_undefined",
];

pub fn bundled_template(slot: &str) -> String {
    format!("{BUNDLED_NAMESPACE}/{slot}{TEMPLATE_EXTENSION}")
}

pub fn model_convention_template(model: &str, slot: &str) -> String {
    format!("{CONVENTION_ROOT}/{model}/{slot}{TEMPLATE_EXTENSION}")
}

pub fn convention_template(slot: &str) -> String {
    format!("{CONVENTION_ROOT}/{slot}{TEMPLATE_EXTENSION}")
}

/// Snapshot of the templates that exist, taken once per pipeline run
#[derive(Debug, Clone, Default)]
pub struct TemplateIndex {
    known: HashSet<String>,
}

impl TemplateIndex {
    /// List `source` and add the bundled defaults
    pub fn load(source: &dyn TemplateSource) -> Result<Self> {
        let mut known: HashSet<String> = source.list_templates()?.into_iter().collect();
        known.extend(TEMPLATE_SLOTS.iter().map(|slot| bundled_template(slot)));
        tracing::debug!("Indexed {} templates", known.len());
        Ok(Self { known })
    }

    pub fn exists(&self, name: &str) -> bool {
        self.known.contains(name)
    }

    /// The first candidate that exists, in priority order
    pub fn first_existing<'a, I>(&self, candidates: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .find(|candidate| self.exists(candidate))
            .map(str::to_string)
    }
}
