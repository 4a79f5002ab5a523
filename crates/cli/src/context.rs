//! Builds a configuration manager from command-line options

use anyhow::{Context, Result};
use backoffice_core::cache::{CacheStore, FileCacheStore, MemoryCacheStore};
use backoffice_core::controller::StaticControllerRegistry;
use backoffice_core::template::FilesystemTemplates;
use backoffice_core::{ConfigManager, RawConfig, ResolverBuilder, StaticMetadataProvider};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use crate::cli::ConfigOptions;

pub fn build_manager(options: &ConfigOptions) -> Result<ConfigManager> {
    debug!("Loading configuration from {:?}", options.config);
    let raw = RawConfig::load_from_file(&options.config).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            options.config.display()
        )
    })?;

    debug!("Loading metadata from {:?}", options.metadata);
    let metadata = StaticMetadataProvider::load_from_file(&options.metadata).with_context(|| {
        format!(
            "Failed to load metadata from {}",
            options.metadata.display()
        )
    })?;

    let mut builder = ResolverBuilder::new(Arc::new(metadata))
        .controllers(Arc::new(StaticControllerRegistry::new(
            options.controllers.iter().cloned(),
        )))
        .templates(Arc::new(FilesystemTemplates::new(
            options.templates.iter().cloned(),
        )));
    if options.design {
        builder = builder.design(options.locale.clone());
    }

    Ok(ConfigManager::new(
        raw.into_tree(),
        builder.build(),
        cache_store(options),
        options.debug,
    ))
}

pub fn cache_store(options: &ConfigOptions) -> Arc<dyn CacheStore> {
    match &options.cache_dir {
        Some(dir) => Arc::new(FileCacheStore::new(dir)),
        None => Arc::new(MemoryCacheStore::new()),
    }
}

/// Files whose changes invalidate the resolved configuration
pub fn watched_paths(options: &ConfigOptions) -> Vec<PathBuf> {
    let mut paths = vec![options.config.clone(), options.metadata.clone()];
    paths.extend(options.templates.iter().filter(|dir| dir.is_dir()).cloned());
    paths
}
