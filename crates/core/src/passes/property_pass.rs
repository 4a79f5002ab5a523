use super::field_resolver::{FieldContext, FieldResolver};
use crate::error::Result;
use crate::pipeline::ConfigPass;
use crate::types::{BackendConfig, View};
use std::sync::Arc;

/// Resolves the declared fields of every view against the model's metadata
pub struct PropertyPass {
    resolver: Arc<FieldResolver>,
}

impl PropertyPass {
    pub fn new(resolver: Arc<FieldResolver>) -> Self {
        Self { resolver }
    }
}

impl ConfigPass for PropertyPass {
    fn name(&self) -> &'static str {
        "property"
    }

    fn process(&self, mut config: BackendConfig) -> Result<BackendConfig> {
        let formats = config.formats.clone();

        for model in config.models.values_mut() {
            for view in View::ALL {
                let declared = std::mem::take(&mut model.view_mut(view).fields);
                let context = FieldContext {
                    model: &*model,
                    view,
                    formats: &formats,
                };
                let resolved = declared
                    .into_iter()
                    .map(|(name, field)| (name, self.resolver.resolve(&context, field)))
                    .collect();
                model.view_mut(view).fields = resolved;
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guess::NullTypeGuesser;
    use crate::metadata::{FieldMapping, PropertyMetadata};
    use crate::types::{FieldConfig, ModelConfig};

    #[test]
    fn test_declared_fields_are_resolved_in_place() {
        let mut model = ModelConfig::new("Product", "App\\Product");
        let mapping = FieldMapping {
            name: "name".into(),
            storage_type: "string".into(),
            nullable: false,
            column: None,
        };
        model
            .properties
            .insert("name".into(), PropertyMetadata::from_field(&mapping, false));
        model
            .list
            .fields
            .insert("name".into(), FieldConfig::for_property("name"));
        model
            .list
            .fields
            .insert("total".into(), FieldConfig::for_property("total"));

        let mut config = BackendConfig::default();
        config.models.insert("Product".into(), model);

        let pass = PropertyPass::new(Arc::new(FieldResolver::new(Arc::new(NullTypeGuesser))));
        let config = pass.process(config).unwrap();
        let list = &config.models["Product"].list;

        assert_eq!(list.fields.keys().collect::<Vec<_>>(), vec!["name", "total"]);
        assert_eq!(list.fields["name"].data_type.as_deref(), Some("string"));
        assert!(list.fields["total"].is_virtual);
    }
}
