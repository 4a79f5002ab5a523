//! backoffice-core - Configuration resolution for an admin backend
//!
//! This crate provides functionality to:
//! - Load the declarative backend configuration (JSON, YAML or TOML)
//! - Resolve it through an ordered pipeline of passes against model metadata
//! - Cache the resolved tree and read it back through [`ConfigAccessor`]
pub mod accessor;
pub mod cache;
pub mod config;
pub mod controller;
pub mod error;
pub mod guess;
pub mod manager;
pub mod metadata;
pub mod passes;
pub mod pipeline;
pub mod template;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use accessor::ConfigAccessor;
pub use cache::{CacheStore, FileCacheStore, MemoryCacheStore};
pub use config::RawConfig;
pub use manager::{ConfigManager, RESOLVED_CONFIG_CACHE_KEY};
pub use metadata::{MetadataProvider, StaticMetadataProvider};
pub use pipeline::{ConfigPass, ConfigResolver, ResolverBuilder};
