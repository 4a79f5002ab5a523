use crate::metadata::PropertyMetadata;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Form layout markers that carry no data
pub const DESIGN_ELEMENT_TYPES: [&str; 4] = ["divider", "group", "section", "tab"];

/// Key prefix of design elements in a view's field map
pub const DESIGN_ELEMENT_PREFIX: &str = "_form_design_element_";

/// Display and edit configuration of a single field of a view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Source property; absent for design elements
    pub property: Option<String>,
    /// Type declared by the user, if any
    #[serde(rename = "type")]
    pub declared_type: Option<String>,
    /// Resolved editor widget (form views only)
    #[serde(rename = "fieldType")]
    pub field_type: Option<String>,
    /// Resolved display/storage kind
    #[serde(rename = "dataType")]
    pub data_type: Option<String>,
    pub format: Option<String>,
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
    pub sortable: bool,
    pub template: Option<String>,
    pub css_class: String,
    pub help: Option<String>,
    pub label: Option<String>,
    pub type_options: Map<String, Value>,
    pub form_group: Option<String>,
    pub form_tab: Option<String>,
    /// Copy of the backing property's metadata
    pub metadata: Option<PropertyMetadata>,
    /// Keys the pipeline does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            property: None,
            declared_type: None,
            field_type: None,
            data_type: None,
            format: None,
            is_virtual: false,
            sortable: true,
            template: None,
            css_class: String::new(),
            help: None,
            label: None,
            type_options: Map::new(),
            form_group: None,
            form_tab: None,
            metadata: None,
            extra: Map::new(),
        }
    }
}

impl FieldConfig {
    pub fn for_property(property: impl Into<String>) -> Self {
        Self {
            property: Some(property.into()),
            ..Self::default()
        }
    }

    pub fn design_element(kind: &str) -> Self {
        Self {
            declared_type: Some(kind.to_string()),
            ..Self::default()
        }
    }

    /// Whether this entry is a form layout marker rather than a data field
    pub fn is_design_element(&self) -> bool {
        self.property.is_none()
            && self
                .declared_type
                .as_deref()
                .is_some_and(|t| DESIGN_ELEMENT_TYPES.contains(&t))
    }

    pub fn is_design_element_of(&self, kind: &str) -> bool {
        self.is_design_element() && self.declared_type.as_deref() == Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_keeps_unknown_keys() {
        let field: FieldConfig = serde_json::from_value(json!({
            "property": "price",
            "type": "money",
            "type_options": { "currency": "EUR" },
            "icon": "euro"
        }))
        .unwrap();

        assert_eq!(field.property.as_deref(), Some("price"));
        assert_eq!(field.declared_type.as_deref(), Some("money"));
        assert!(field.sortable);
        assert_eq!(field.type_options["currency"], "EUR");
        assert_eq!(field.extra["icon"], "euro");
    }

    #[test]
    fn test_design_element_detection() {
        assert!(FieldConfig::design_element("tab").is_design_element_of("tab"));
        assert!(!FieldConfig::design_element("image").is_design_element());
        assert!(!FieldConfig::for_property("name").is_design_element());
    }
}
