//! Canonical shapes of field and action declarations

use crate::error::{Error, Result};
use crate::types::{DESIGN_ELEMENT_PREFIX, View};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Field declarations of one view keyed by property or design element name
pub type FieldMap = IndexMap<String, Map<String, Value>>;

/// Turn the declared field list of a view into a keyed map
///
/// A bare string names a property. A mapping must carry a `property`, or a
/// `type` in which case it becomes a design element keyed by its position
/// among the view's design elements.
pub fn canonical_fields(model: &str, view: View, declared: Vec<Value>) -> Result<FieldMap> {
    let invalid = |reason: String| Error::InvalidFieldDeclaration {
        model: model.to_string(),
        view: view.to_string(),
        reason,
    };

    let mut fields = FieldMap::new();
    let mut design_elements = 0;

    for entry in declared {
        let declaration = match entry {
            Value::String(property) => {
                let mut declaration = Map::new();
                declaration.insert("property".to_string(), Value::String(property));
                declaration
            }
            Value::Object(declaration) => declaration,
            other => {
                return Err(invalid(format!(
                    "fields must be property names or mappings, got {other}"
                )));
            }
        };

        let has_type = declaration.get("type").is_some_and(|t| !t.is_null());
        let property = declaration.get("property").cloned();
        let key = match property {
            Some(Value::String(property)) => property,
            Some(Value::Null) | None if has_type => {
                let key = format!("{DESIGN_ELEMENT_PREFIX}{design_elements}");
                design_elements += 1;
                key
            }
            Some(Value::Null) | None => {
                return Err(invalid(format!(
                    "fields must define a \"property\" or a \"type\", got {}",
                    Value::Object(declaration)
                )));
            }
            Some(other) => {
                return Err(invalid(format!("the \"property\" option must be a string, got {other}")));
            }
        };

        fields.insert(key, declaration);
    }

    Ok(fields)
}

/// Turn the declared action list of a view into `{name, ...}` mappings
///
/// An absent list becomes an empty one.
pub fn canonical_actions(
    scope: &str,
    view: View,
    declared: Option<Vec<Value>>,
) -> Result<Vec<Value>> {
    let invalid = |reason: String| Error::InvalidActionDeclaration {
        scope: scope.to_string(),
        view: view.to_string(),
        reason,
    };

    declared
        .unwrap_or_default()
        .into_iter()
        .map(|entry| match entry {
            Value::String(name) if !name.is_empty() => {
                let mut declaration = Map::new();
                declaration.insert("name".to_string(), Value::String(name));
                Ok(Value::Object(declaration))
            }
            Value::Object(declaration) => {
                let named = matches!(
                    declaration.get("name"),
                    Some(Value::String(name)) if !name.is_empty()
                );
                if named {
                    Ok(Value::Object(declaration))
                } else {
                    Err(invalid(format!(
                        "actions must define a \"name\", got {}",
                        Value::Object(declaration)
                    )))
                }
            }
            other => Err(invalid(format!(
                "actions must be names or mappings, got {other}"
            ))),
        })
        .collect()
}

/// Property named by a declaration, if it names one
pub fn declared_property(declaration: &Map<String, Value>) -> Option<&str> {
    declaration.get("property").and_then(Value::as_str)
}
