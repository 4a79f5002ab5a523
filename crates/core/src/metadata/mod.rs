//! Entity metadata consumed by the pipeline
//!
//! The metadata provider is an external collaborator: it knows, for every
//! mapped class, its identifier, its scalar fields and its associations.
//! The pipeline only reads from it.

pub mod static_provider;

pub use static_provider::{ClassMetadata, StaticMetadataProvider};

use crate::impl_case_insensitive_deserialize;
use serde::{Deserialize, Serialize};

/// Failure modes of a metadata lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    #[error("class \"{0}\" is not mapped")]
    NotMapped(String),

    #[error("class \"{0}\" is not managed by any object manager")]
    NotManaged(String),

    #[error("class \"{class}\" has a composite identifier ({})", .fields.join(", "))]
    CompositeIdentifier { class: String, fields: Vec<String> },
}

/// Kind of an association between two mapped classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationKind {
    OneToOne,
    ManyToOne,
    OneToMany,
    ManyToMany,
}

impl_case_insensitive_deserialize!(
    AssociationKind,
    OneToOne => "one_to_one",
    ManyToOne => "many_to_one",
    OneToMany => "one_to_many",
    ManyToMany => "many_to_many"
);

impl AssociationKind {
    pub fn is_to_many(&self) -> bool {
        matches!(self, AssociationKind::OneToMany | AssociationKind::ManyToMany)
    }

    pub fn is_to_one(&self) -> bool {
        !self.is_to_many()
    }
}

/// A scalar field mapping as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub name: String,
    #[serde(rename = "type")]
    pub storage_type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

/// An association mapping as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationMapping {
    pub name: String,
    pub target_class: String,
    pub kind: AssociationKind,
    #[serde(default = "default_true")]
    pub owning_side: bool,
    #[serde(default = "default_true")]
    pub nullable: bool,
}

fn default_true() -> bool {
    true
}

/// Association details carried by a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationMetadata {
    pub target_class: String,
    pub kind: AssociationKind,
    pub owning_side: bool,
}

/// Per-property facts copied out of the provider during resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyMetadata {
    pub name: String,
    pub column_name: String,
    /// Storage type, or `association` for associations
    #[serde(rename = "type")]
    pub storage_type: String,
    pub nullable: bool,
    #[serde(default)]
    pub identifier: bool,
    #[serde(default = "default_true")]
    pub sortable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub association: Option<AssociationMetadata>,
}

impl PropertyMetadata {
    pub fn from_field(mapping: &FieldMapping, identifier: bool) -> Self {
        Self {
            name: mapping.name.clone(),
            column_name: mapping
                .column
                .clone()
                .unwrap_or_else(|| mapping.name.clone()),
            storage_type: mapping.storage_type.clone(),
            nullable: mapping.nullable,
            identifier,
            sortable: true,
            association: None,
        }
    }

    pub fn from_association(mapping: &AssociationMapping) -> Self {
        Self {
            name: mapping.name.clone(),
            column_name: mapping.name.clone(),
            storage_type: ASSOCIATION_TYPE.to_string(),
            nullable: mapping.nullable,
            identifier: false,
            // to-many associations cannot be sorted
            sortable: mapping.kind.is_to_one(),
            association: Some(AssociationMetadata {
                target_class: mapping.target_class.clone(),
                kind: mapping.kind,
                owning_side: mapping.owning_side,
            }),
        }
    }

    pub fn is_association(&self) -> bool {
        self.association.is_some()
    }
}

/// Storage type given to association properties
pub const ASSOCIATION_TYPE: &str = "association";

/// Source of entity metadata
pub trait MetadataProvider: Send + Sync {
    /// The single identifier field of `class`
    fn identifier_field(&self, class: &str) -> Result<String, MetadataError>;

    /// Scalar fields of `class`, in declaration order
    fn fields(&self, class: &str) -> Result<Vec<FieldMapping>, MetadataError>;

    /// Associations of `class`, in declaration order
    fn associations(&self, class: &str) -> Result<Vec<AssociationMapping>, MetadataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_many_associations_are_not_sortable() {
        let tags = PropertyMetadata::from_association(&AssociationMapping {
            name: "tags".into(),
            target_class: "App\\Tag".into(),
            kind: AssociationKind::ManyToMany,
            owning_side: true,
            nullable: true,
        });
        assert!(!tags.sortable);
        assert_eq!(tags.storage_type, "association");

        let author = PropertyMetadata::from_association(&AssociationMapping {
            name: "author".into(),
            target_class: "App\\User".into(),
            kind: AssociationKind::ManyToOne,
            owning_side: true,
            nullable: false,
        });
        assert!(author.sortable);
    }

    #[test]
    fn test_column_name_defaults_to_field_name() {
        let mapping = FieldMapping {
            name: "createdAt".into(),
            storage_type: "datetime".into(),
            nullable: false,
            column: None,
        };
        let property = PropertyMetadata::from_field(&mapping, false);
        assert_eq!(property.column_name, "createdAt");
        assert!(!property.identifier);
    }
}
