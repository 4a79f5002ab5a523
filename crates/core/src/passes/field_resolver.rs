//! Per-field resolution shared by the property and view passes

use crate::guess::TypeGuesser;
use crate::metadata::PropertyMetadata;
use crate::types::{FieldConfig, FormatConfig, ModelConfig, View};
use serde_json::{Map, Value};
use std::sync::Arc;

const TEXT: &str = "text";
const BOOLEAN: &str = "boolean";
const TOGGLE: &str = "toggle";
const FALLBACK_WIDGET: &str = "textarea";
const REQUIRED: &str = "required";

/// Storage kind with the `_immutable` suffix removed
pub fn normalized_type(kind: &str) -> &str {
    kind.strip_suffix("_immutable").unwrap_or(kind)
}

/// Display format configured for a storage kind
pub fn format_for(kind: &str, formats: &FormatConfig) -> Option<String> {
    match normalized_type(kind) {
        "date" => Some(formats.date.clone()),
        "time" => Some(formats.time.clone()),
        "datetime" | "datetimetz" => Some(formats.datetime.clone()),
        "dateinterval" => Some(formats.dateinterval.clone()),
        "bigint" | "integer" | "smallint" | "decimal" | "float" => formats.number.clone(),
        _ => None,
    }
}

/// Where a field is being resolved
pub struct FieldContext<'a> {
    pub model: &'a ModelConfig,
    pub view: View,
    pub formats: &'a FormatConfig,
}

impl FieldContext<'_> {
    fn edit_enabled(&self) -> bool {
        !self.model.is_action_disabled("edit")
    }
}

/// Fills in the derived options of a field from metadata and guesses
pub struct FieldResolver {
    guesser: Arc<dyn TypeGuesser>,
}

impl FieldResolver {
    pub fn new(guesser: Arc<dyn TypeGuesser>) -> Self {
        Self { guesser }
    }

    pub fn resolve(&self, context: &FieldContext<'_>, mut field: FieldConfig) -> FieldConfig {
        if field.is_design_element() {
            return field;
        }

        let metadata = field
            .property
            .as_deref()
            .and_then(|property| context.model.properties.get(property))
            .cloned();

        match &metadata {
            Some(metadata) => {
                field.is_virtual = false;
                if !metadata.sortable {
                    field.sortable = false;
                }
            }
            None => {
                field.is_virtual = true;
                field.sortable = false;
            }
        }

        if context.view.is_form() {
            self.resolve_form_field(context, &mut field, metadata.as_ref());
        } else {
            Self::resolve_display_field(context, &mut field, metadata.as_ref());
        }

        field.metadata = metadata;
        field
    }

    fn resolve_display_field(
        context: &FieldContext<'_>,
        field: &mut FieldConfig,
        metadata: Option<&PropertyMetadata>,
    ) {
        let kind = field
            .declared_type
            .clone()
            .or_else(|| metadata.map(|m| m.storage_type.clone()))
            .unwrap_or_else(|| TEXT.to_string());

        if field.format.is_none() {
            field.format = format_for(&kind, context.formats);
        }

        let toggles = matches!(context.view, View::List | View::Show);
        field.data_type = if kind == BOOLEAN && toggles && context.edit_enabled() {
            Some(TOGGLE.to_string())
        } else {
            Some(kind)
        };
    }

    fn resolve_form_field(
        &self,
        context: &FieldContext<'_>,
        field: &mut FieldConfig,
        metadata: Option<&PropertyMetadata>,
    ) {
        let kind = metadata
            .map(|m| m.storage_type.clone())
            .or_else(|| field.declared_type.clone())
            .unwrap_or_else(|| TEXT.to_string());

        let class = context.model.class.as_str();
        let guess = match (&field.property, metadata) {
            (Some(property), Some(_)) => self.guesser.guess_editor_type(class, property),
            _ => None,
        };

        let user_options = std::mem::take(&mut field.type_options);
        let (widget, mut options) = match (field.declared_type.clone(), guess) {
            (Some(declared), Some(guess)) if declared != guess.widget => {
                let mut options = Map::new();
                if let Some(required) = guess.options.get(REQUIRED) {
                    options.insert(REQUIRED.to_string(), required.clone());
                }
                (declared, options)
            }
            (Some(declared), Some(guess)) => (declared, guess.options),
            (None, Some(guess)) => (guess.widget, guess.options),
            (Some(declared), None) => (declared, Map::new()),
            (None, None) => (FALLBACK_WIDGET.to_string(), Map::new()),
        };
        options.extend(user_options);

        let widget = if field.declared_type.is_none() && kind == BOOLEAN && context.edit_enabled() {
            TOGGLE.to_string()
        } else {
            widget
        };

        if !options.contains_key(REQUIRED) {
            let required = field
                .property
                .as_deref()
                .filter(|_| metadata.is_some())
                .and_then(|property| self.guesser.guess_required(class, property));
            if let Some(required) = required {
                options.insert(REQUIRED.to_string(), Value::Bool(required));
            }
        }

        if field.format.is_none() {
            field.format = format_for(&kind, context.formats);
        }

        field.field_type = Some(widget);
        field.data_type = Some(kind);
        field.type_options = options;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guess::{Confidence, NullTypeGuesser, TypeGuess};
    use crate::metadata::{AssociationKind, AssociationMapping, FieldMapping};
    use serde_json::json;

    struct FixedGuesser;

    impl TypeGuesser for FixedGuesser {
        fn guess_editor_type(&self, _class: &str, property: &str) -> Option<TypeGuess> {
            match property {
                "price" => Some(
                    TypeGuess::new("number", Confidence::High)
                        .with_option("scale", 2)
                        .with_option("required", true),
                ),
                "published" => Some(TypeGuess::new("checkbox", Confidence::High)),
                _ => None,
            }
        }

        fn guess_required(&self, _class: &str, property: &str) -> Option<bool> {
            Some(property != "published")
        }
    }

    fn model() -> ModelConfig {
        let mut model = ModelConfig::new("Product", "App\\Product");
        for (name, kind) in [
            ("id", "integer"),
            ("price", "decimal"),
            ("published", "boolean"),
            ("createdAt", "datetime_immutable"),
        ] {
            let mapping = FieldMapping {
                name: name.to_string(),
                storage_type: kind.to_string(),
                nullable: false,
                column: None,
            };
            model
                .properties
                .insert(name.into(), PropertyMetadata::from_field(&mapping, name == "id"));
        }
        model.properties.insert(
            "tags".into(),
            PropertyMetadata::from_association(&AssociationMapping {
                name: "tags".into(),
                target_class: "App\\Tag".into(),
                kind: AssociationKind::ManyToMany,
                owning_side: true,
                nullable: true,
            }),
        );
        model
    }

    fn resolve(model: &ModelConfig, view: View, field: FieldConfig) -> FieldConfig {
        let formats = FormatConfig::default();
        let context = FieldContext {
            model,
            view,
            formats: &formats,
        };
        FieldResolver::new(Arc::new(FixedGuesser)).resolve(&context, field)
    }

    #[test]
    fn test_display_field_from_metadata() {
        let model = model();
        let field = resolve(&model, View::List, FieldConfig::for_property("createdAt"));

        assert_eq!(field.data_type.as_deref(), Some("datetime_immutable"));
        assert_eq!(field.format.as_deref(), Some("F j, Y H:i"));
        assert!(!field.is_virtual);
        assert!(field.sortable);
        assert!(field.metadata.is_some());
    }

    #[test]
    fn test_virtual_field() {
        let model = model();
        let field = resolve(&model, View::Show, FieldConfig::for_property("fullName"));

        assert!(field.is_virtual);
        assert!(!field.sortable);
        assert_eq!(field.data_type.as_deref(), Some("text"));
        assert!(field.metadata.is_none());
    }

    #[test]
    fn test_boolean_toggle_depends_on_edit() {
        let mut model = model();
        let field = resolve(&model, View::List, FieldConfig::for_property("published"));
        assert_eq!(field.data_type.as_deref(), Some("toggle"));

        let field = resolve(&model, View::Search, FieldConfig::for_property("published"));
        assert_eq!(field.data_type.as_deref(), Some("boolean"));

        model.disabled_actions.push("edit".into());
        let field = resolve(&model, View::List, FieldConfig::for_property("published"));
        assert_eq!(field.data_type.as_deref(), Some("boolean"));
    }

    #[test]
    fn test_to_many_associations_are_not_sortable() {
        let model = model();
        let field = resolve(&model, View::List, FieldConfig::for_property("tags"));
        assert!(!field.sortable);
        assert_eq!(field.data_type.as_deref(), Some("association"));
    }

    #[test]
    fn test_form_widget_from_guess() {
        let model = model();
        let mut declared = FieldConfig::for_property("price");
        declared.type_options.insert("scale".into(), json!(4));
        let field = resolve(&model, View::Edit, declared);

        assert_eq!(field.field_type.as_deref(), Some("number"));
        assert_eq!(field.data_type.as_deref(), Some("decimal"));
        assert_eq!(field.type_options["scale"], 4);
        assert_eq!(field.type_options["required"], true);
    }

    #[test]
    fn test_declared_widget_discards_guessed_options() {
        let model = model();
        let mut declared = FieldConfig::for_property("price");
        declared.declared_type = Some("money".into());
        declared.type_options.insert("currency".into(), json!("EUR"));
        let field = resolve(&model, View::New, declared);

        assert_eq!(field.field_type.as_deref(), Some("money"));
        assert_eq!(
            Value::Object(field.type_options),
            json!({"required": true, "currency": "EUR"})
        );
    }

    #[test]
    fn test_form_boolean_and_fallback() {
        let model = model();
        let field = resolve(&model, View::Edit, FieldConfig::for_property("published"));
        assert_eq!(field.field_type.as_deref(), Some("toggle"));
        assert_eq!(field.type_options["required"], false);

        let formats = FormatConfig::default();
        let context = FieldContext {
            model: &model,
            view: View::Edit,
            formats: &formats,
        };
        let field = FieldResolver::new(Arc::new(NullTypeGuesser))
            .resolve(&context, FieldConfig::for_property("id"));
        assert_eq!(field.field_type.as_deref(), Some("textarea"));
        assert!(!field.type_options.contains_key("required"));
    }

    #[test]
    fn test_design_elements_are_left_alone() {
        let model = model();
        let field = resolve(&model, View::Edit, FieldConfig::design_element("group"));
        assert_eq!(field, FieldConfig::design_element("group"));
    }

    #[test]
    fn test_number_format() {
        let formats = FormatConfig {
            number: Some("%.2f".into()),
            ..FormatConfig::default()
        };
        assert_eq!(format_for("decimal", &formats).as_deref(), Some("%.2f"));
        assert_eq!(format_for("string", &formats), None);
        assert_eq!(format_for("date_immutable", &formats).as_deref(), Some("Y-m-d"));
    }
}
