use crate::error::{Error, Result};
use crate::metadata::{MetadataError, MetadataProvider, PropertyMetadata};
use crate::pipeline::ConfigPass;
use crate::types::BackendConfig;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// Copies identifier and property metadata into every model
pub struct MetadataPass {
    provider: Arc<dyn MetadataProvider>,
}

impl MetadataPass {
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self { provider }
    }

    fn properties(
        &self,
        class: &str,
        identifier: &str,
    ) -> std::result::Result<IndexMap<String, PropertyMetadata>, MetadataError> {
        let mut properties = IndexMap::new();

        for field in self.provider.fields(class)? {
            let property = PropertyMetadata::from_field(&field, field.name == identifier);
            properties.insert(field.name.clone(), property);
        }

        for association in self.provider.associations(class)? {
            properties.insert(
                association.name.clone(),
                PropertyMetadata::from_association(&association),
            );
        }

        Ok(properties)
    }
}

impl ConfigPass for MetadataPass {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn process(&self, mut config: BackendConfig) -> Result<BackendConfig> {
        for (name, model) in config.models.iter_mut() {
            if model.class.is_empty() {
                return Err(Error::InvalidModel {
                    model: name.clone(),
                    reason: "it does not define a class".to_string(),
                });
            }

            let invalid = |e: MetadataError| Error::InvalidModel {
                model: name.clone(),
                reason: e.to_string(),
            };

            let identifier = self.provider.identifier_field(&model.class).map_err(invalid)?;
            let properties = self.properties(&model.class, &identifier).map_err(invalid)?;

            debug!(
                "Model {} ({}) has identifier {} and {} properties",
                name,
                model.class,
                identifier,
                properties.len()
            );

            model.primary_key_field_name = Some(identifier);
            model.properties = properties;
        }

        Ok(config)
    }
}
