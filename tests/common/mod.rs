#![allow(dead_code)]

use backoffice::config::ConfigFormat;
use backoffice::controller::StaticControllerRegistry;
use backoffice::metadata::{AssociationKind, AssociationMapping, ClassMetadata};
use backoffice::template::StaticTemplates;
use backoffice::{
    BackendConfig, ConfigResolver, RawConfig, ResolverBuilder, Result, StaticMetadataProvider,
};
use std::sync::Arc;

pub fn metadata() -> StaticMetadataProvider {
    StaticMetadataProvider::new()
        .with_class(
            "App\\Product",
            ClassMetadata::new("id")
                .with_field("id", "integer", false)
                .with_field("name", "string", false)
                .with_field("description", "text", true)
                .with_field("price", "decimal", false)
                .with_field("enabled", "boolean", false)
                .with_field("createdAt", "datetime_immutable", false)
                .with_field("updatedAt", "datetime", true)
                .with_field("attributes", "json", true)
                .with_field("slug", "string", false)
                .with_field("stock", "integer", false)
                .with_field("reference", "string", false)
                .with_association(AssociationMapping {
                    name: "category".into(),
                    target_class: "App\\Category".into(),
                    kind: AssociationKind::ManyToOne,
                    owning_side: true,
                    nullable: false,
                })
                .with_association(AssociationMapping {
                    name: "tags".into(),
                    target_class: "App\\Tag".into(),
                    kind: AssociationKind::ManyToMany,
                    owning_side: true,
                    nullable: true,
                }),
        )
        .with_class(
            "App\\Category",
            ClassMetadata::new("id")
                .with_field("id", "integer", false)
                .with_field("name", "string", false),
        )
        .with_class(
            "App\\Document",
            ClassMetadata::new("id")
                .with_field("id", "integer", false)
                .with_field("title", "string", false)
                .with_field("token", "guid", false)
                .with_field("payload", "blob", true)
                .with_field("checksum", "binary", true)
                .with_field("retention", "dateinterval", true),
        )
        .with_class(
            "App\\User",
            ClassMetadata::new("uuid")
                .with_field("uuid", "guid", false)
                .with_field("email", "string", false)
                .with_field("password", "string", false)
                .with_field("salt", "string", true)
                .with_field("active", "boolean", false)
                .with_field("lastLogin", "datetime", true),
        )
}

pub fn resolver() -> ConfigResolver {
    ResolverBuilder::new(Arc::new(metadata()))
        .controllers(Arc::new(StaticControllerRegistry::new(["App\\Controller\\ProductController"])))
        .templates(Arc::new(StaticTemplates::default()))
        .build()
}

pub fn raw(yaml: &str) -> BackendConfig {
    RawConfig::parse(yaml, ConfigFormat::Yaml)
        .expect("valid YAML document")
        .into_tree()
}

pub fn resolve(yaml: &str) -> Result<BackendConfig> {
    resolver().resolve(raw(yaml))
}
