use super::{Confidence, TypeGuess, TypeGuesser};
use crate::metadata::{AssociationMapping, FieldMapping, MetadataProvider};
use std::sync::Arc;

/// Guesses widgets from object-mapper metadata
pub struct MetadataTypeGuesser {
    provider: Arc<dyn MetadataProvider>,
}

impl MetadataTypeGuesser {
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self { provider }
    }

    fn field(&self, class: &str, property: &str) -> Option<FieldMapping> {
        self.provider
            .fields(class)
            .ok()?
            .into_iter()
            .find(|f| f.name == property)
    }

    fn association(&self, class: &str, property: &str) -> Option<AssociationMapping> {
        self.provider
            .associations(class)
            .ok()?
            .into_iter()
            .find(|a| a.name == property)
    }
}

/// Widget for a scalar storage type
fn guess_for_storage_type(storage_type: &str) -> TypeGuess {
    match storage_type {
        "array" | "simple_array" | "json" | "json_array" => {
            TypeGuess::new("collection", Confidence::Medium)
        }
        "boolean" => TypeGuess::new("checkbox", Confidence::High),
        "datetime" | "datetimetz" => TypeGuess::new("datetime", Confidence::High),
        "datetime_immutable" | "datetimetz_immutable" => {
            TypeGuess::new("datetime", Confidence::High).with_option("input", "datetime_immutable")
        }
        "dateinterval" => TypeGuess::new("dateinterval", Confidence::High),
        "date" => TypeGuess::new("date", Confidence::High),
        "date_immutable" => {
            TypeGuess::new("date", Confidence::High).with_option("input", "datetime_immutable")
        }
        "time" => TypeGuess::new("time", Confidence::High),
        "time_immutable" => {
            TypeGuess::new("time", Confidence::High).with_option("input", "datetime_immutable")
        }
        "decimal" | "float" => TypeGuess::new("number", Confidence::Medium),
        "integer" | "bigint" | "smallint" => TypeGuess::new("integer", Confidence::Medium),
        "string" => TypeGuess::new("text", Confidence::Medium),
        "text" => TypeGuess::new("textarea", Confidence::Medium),
        _ => TypeGuess::new("text", Confidence::Low),
    }
}

impl TypeGuesser for MetadataTypeGuesser {
    fn guess_editor_type(&self, class: &str, property: &str) -> Option<TypeGuess> {
        if let Some(association) = self.association(class, property) {
            return Some(
                TypeGuess::new("entity", Confidence::High)
                    .with_option("class", association.target_class)
                    .with_option("multiple", association.kind.is_to_many()),
            );
        }

        self.field(class, property)
            .map(|field| guess_for_storage_type(&field.storage_type))
    }

    fn guess_required(&self, class: &str, property: &str) -> Option<bool> {
        if let Some(association) = self.association(class, property) {
            return Some(association.kind.is_to_one() && !association.nullable);
        }

        // an unchecked checkbox submits nothing, so booleans are never required
        self.field(class, property)
            .map(|field| !field.nullable && field.storage_type != "boolean")
    }
}
