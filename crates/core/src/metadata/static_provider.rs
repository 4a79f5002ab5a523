//! In-memory metadata provider
//!
//! Useful for tests, tooling and deployments that export their mapping
//! as a document instead of introspecting a live object manager.

use super::{AssociationMapping, FieldMapping, MetadataError, MetadataProvider};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Mapping of one class
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassMetadata {
    #[serde(default)]
    pub identifier: Vec<String>,
    #[serde(default = "default_managed")]
    pub managed: bool,
    #[serde(default)]
    pub fields: Vec<FieldMapping>,
    #[serde(default)]
    pub associations: Vec<AssociationMapping>,
}

fn default_managed() -> bool {
    true
}

impl ClassMetadata {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: vec![identifier.into()],
            managed: true,
            ..Self::default()
        }
    }

    pub fn with_field(mut self, name: &str, storage_type: &str, nullable: bool) -> Self {
        self.fields.push(FieldMapping {
            name: name.to_string(),
            storage_type: storage_type.to_string(),
            nullable,
            column: None,
        });
        self
    }

    pub fn with_association(mut self, mapping: AssociationMapping) -> Self {
        self.associations.push(mapping);
        self
    }
}

/// Metadata provider backed by a fixed set of class mappings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticMetadataProvider {
    classes: IndexMap<String, ClassMetadata>,
}

impl StaticMetadataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: impl Into<String>, metadata: ClassMetadata) -> Self {
        self.classes.insert(class.into(), metadata);
        self
    }

    /// Load class mappings from a JSON or YAML document
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let provider = if is_yaml {
            serde_yaml::from_str(&contents)
                .map_err(|e| Error::ConfigError(format!("Failed to parse metadata: {e}")))?
        } else {
            serde_json::from_str(&contents)
                .map_err(|e| Error::ConfigError(format!("Failed to parse metadata: {e}")))?
        };

        Ok(provider)
    }

    fn mapped(&self, class: &str) -> std::result::Result<&ClassMetadata, MetadataError> {
        let metadata = self
            .classes
            .get(class)
            .ok_or_else(|| MetadataError::NotMapped(class.to_string()))?;

        if !metadata.managed {
            return Err(MetadataError::NotManaged(class.to_string()));
        }

        Ok(metadata)
    }
}

impl MetadataProvider for StaticMetadataProvider {
    fn identifier_field(&self, class: &str) -> std::result::Result<String, MetadataError> {
        let metadata = self.mapped(class)?;
        match metadata.identifier.as_slice() {
            [single] => Ok(single.clone()),
            [] => Err(MetadataError::NotMapped(class.to_string())),
            fields => Err(MetadataError::CompositeIdentifier {
                class: class.to_string(),
                fields: fields.to_vec(),
            }),
        }
    }

    fn fields(&self, class: &str) -> std::result::Result<Vec<FieldMapping>, MetadataError> {
        Ok(self.mapped(class)?.fields.clone())
    }

    fn associations(
        &self,
        class: &str,
    ) -> std::result::Result<Vec<AssociationMapping>, MetadataError> {
        Ok(self.mapped(class)?.associations.clone())
    }
}
