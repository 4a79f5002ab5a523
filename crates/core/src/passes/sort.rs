//! Validation of the `sort` option of list and search views

use crate::error::{Error, Result};
use crate::metadata::PropertyMetadata;
use crate::types::{ModelConfig, SortConfig, SortDirection, View};
use serde_json::Value;

/// Resolve a declared sort against the model and the view's fields
///
/// A bare field name sorts descending; a `[field, direction]` pair takes
/// its direction case-insensitively. At most one association hop
/// (`author.name`) is supported.
pub fn resolve_sort(model: &ModelConfig, view: View, declared: &Value) -> Result<SortConfig> {
    let model_name = model.name.as_str();
    let invalid_sort = || Error::InvalidSort {
        model: model_name.to_string(),
        view: view.to_string(),
    };

    let (field, direction) = match declared {
        Value::String(field) => (field.clone(), "DESC".to_string()),
        Value::Array(pair) if pair.len() == 2 => {
            let field = pair[0].as_str().ok_or_else(invalid_sort)?;
            let direction = pair[1].as_str().ok_or_else(invalid_sort)?;
            (field.to_string(), direction.to_uppercase())
        }
        Value::Object(sort) => {
            let field = sort
                .get("field")
                .and_then(Value::as_str)
                .ok_or_else(invalid_sort)?;
            let direction = sort
                .get("direction")
                .and_then(Value::as_str)
                .unwrap_or("DESC");
            (field.to_string(), direction.to_uppercase())
        }
        _ => return Err(invalid_sort()),
    };

    let direction = match direction.as_str() {
        "ASC" => SortDirection::Asc,
        "DESC" => SortDirection::Desc,
        _ => {
            return Err(Error::InvalidSortDirection {
                model: model_name.to_string(),
                view: view.to_string(),
                direction,
            });
        }
    };

    let segments: Vec<&str> = field.split('.').collect();
    if segments.len() > 2 {
        return Err(Error::UnsupportedSortDepth {
            model: model_name.to_string(),
            view: view.to_string(),
            field,
        });
    }

    let head = segments[0];
    let fields = &model.view(view).fields;
    if !model.properties.contains_key(head) && !fields.contains_key(head) {
        return Err(Error::UnknownSortField {
            model: model_name.to_string(),
            view: view.to_string(),
            field,
        });
    }

    if fields.get(head).is_some_and(|f| f.is_virtual) && !model.properties.contains_key(head) {
        return Err(Error::VirtualFieldSort {
            model: model_name.to_string(),
            view: view.to_string(),
            field,
        });
    }

    let through_association = model
        .properties
        .get(head)
        .is_some_and(PropertyMetadata::is_association);
    if segments.len() == 2 && !through_association {
        return Err(Error::SortPathNotAssociation {
            model: model_name.to_string(),
            view: view.to_string(),
            field,
        });
    }

    Ok(SortConfig { field, direction })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{AssociationKind, AssociationMapping, FieldMapping};
    use crate::types::FieldConfig;
    use serde_json::json;

    fn model() -> ModelConfig {
        let mut model = ModelConfig::new("Post", "App\\Post");
        let mapping = FieldMapping {
            name: "title".into(),
            storage_type: "string".into(),
            nullable: false,
            column: None,
        };
        model
            .properties
            .insert("title".into(), PropertyMetadata::from_field(&mapping, false));
        model.properties.insert(
            "author".into(),
            PropertyMetadata::from_association(&AssociationMapping {
                name: "author".into(),
                target_class: "App\\User".into(),
                kind: AssociationKind::ManyToOne,
                owning_side: true,
                nullable: true,
            }),
        );

        let mut virtual_field = FieldConfig::for_property("excerpt");
        virtual_field.is_virtual = true;
        model.list.fields.insert("excerpt".into(), virtual_field);
        model
    }

    fn sort(field: &str, direction: SortDirection) -> SortConfig {
        SortConfig {
            field: field.into(),
            direction,
        }
    }

    #[test]
    fn test_field_name_sorts_descending() {
        let resolved = resolve_sort(&model(), View::List, &json!("title")).unwrap();
        assert_eq!(resolved, sort("title", SortDirection::Desc));
    }

    #[test]
    fn test_pair_direction_is_case_insensitive() {
        let resolved = resolve_sort(&model(), View::List, &json!(["title", "asc"])).unwrap();
        assert_eq!(resolved, sort("title", SortDirection::Asc));
    }

    #[test]
    fn test_one_association_hop() {
        let resolved = resolve_sort(&model(), View::List, &json!("author.name")).unwrap();
        assert_eq!(resolved, sort("author.name", SortDirection::Desc));
    }

    #[test]
    fn test_sort_errors() {
        let model = model();

        let err = resolve_sort(&model, View::List, &json!("a.b.c")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedSortDepth { .. }));

        let err = resolve_sort(&model, View::List, &json!(["title", "up"])).unwrap_err();
        assert!(matches!(err, Error::InvalidSortDirection { ref direction, .. } if direction == "UP"));

        let err = resolve_sort(&model, View::List, &json!("missing")).unwrap_err();
        assert!(matches!(err, Error::UnknownSortField { .. }));

        let err = resolve_sort(&model, View::List, &json!("excerpt")).unwrap_err();
        assert!(matches!(err, Error::VirtualFieldSort { .. }));

        let err = resolve_sort(&model, View::List, &json!("title.length")).unwrap_err();
        assert!(
            matches!(err, Error::SortPathNotAssociation { ref field, .. } if field == "title.length")
        );

        let err = resolve_sort(&model, View::List, &json!(42)).unwrap_err();
        assert!(matches!(err, Error::InvalidSort { .. }));

        let err = resolve_sort(&model, View::List, &json!(["title"])).unwrap_err();
        assert!(matches!(err, Error::InvalidSort { .. }));
    }
}
