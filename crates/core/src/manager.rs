//! Resolution on demand, backed by a cache

use crate::accessor::ConfigAccessor;
use crate::cache::CacheStore;
use crate::error::{Error, Result};
use crate::pipeline::ConfigResolver;
use crate::types::BackendConfig;
use std::sync::Arc;
use tracing::{debug, info};

/// Cache key of the resolved configuration
pub const RESOLVED_CONFIG_CACHE_KEY: &str = "backoffice.resolved_config";

/// Hands out the resolved configuration
///
/// In debug mode every call resolves from scratch and the cache is never
/// touched. Otherwise the first call fills the cache and later calls read
/// it back. Concurrent misses may resolve twice; resolution is
/// deterministic so the duplicate writes are identical.
pub struct ConfigManager {
    raw: BackendConfig,
    resolver: ConfigResolver,
    cache: Arc<dyn CacheStore>,
    debug: bool,
}

impl ConfigManager {
    pub fn new(
        raw: BackendConfig,
        resolver: ConfigResolver,
        cache: Arc<dyn CacheStore>,
        debug: bool,
    ) -> Self {
        Self {
            raw,
            resolver,
            cache,
            debug,
        }
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Run the resolver over a copy of the raw tree, bypassing the cache
    pub fn resolve(&self) -> Result<BackendConfig> {
        self.resolver.resolve(self.raw.clone())
    }

    pub fn backend_config(&self) -> Result<BackendConfig> {
        if self.debug {
            debug!("Debug mode, resolving configuration without cache");
            return self.resolve();
        }

        if let Some(cached) = self.cache.get(RESOLVED_CONFIG_CACHE_KEY)? {
            debug!("Resolved configuration read from cache");
            return serde_json::from_str(&cached).map_err(|e| {
                Error::CacheError(format!("Failed to deserialize cached configuration: {e}"))
            });
        }

        let config = self.resolve()?;
        let serialized = serde_json::to_string(&config)?;
        self.cache.put(RESOLVED_CONFIG_CACHE_KEY, &serialized)?;
        info!(
            "Resolved configuration of {} models and stored it in cache",
            config.models.len()
        );

        Ok(config)
    }

    pub fn accessor(&self) -> Result<ConfigAccessor> {
        ConfigAccessor::new(Arc::new(self.backend_config()?))
    }

    pub fn clear_cache(&self) -> Result<()> {
        self.cache.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCacheStore;
    use crate::pipeline::ConfigPass;
    use crate::types::ModelConfig;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting(Arc<AtomicUsize>);

    impl ConfigPass for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn process(&self, mut config: BackendConfig) -> Result<BackendConfig> {
            let runs = self.0.fetch_add(1, Ordering::SeqCst) + 1;
            config.site_name = format!("run {runs}");
            Ok(config)
        }
    }

    fn manager(debug: bool) -> (ConfigManager, Arc<AtomicUsize>, Arc<MemoryCacheStore>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let cache = Arc::new(MemoryCacheStore::new());
        let mut raw = BackendConfig::default();
        raw.models
            .insert("Product".into(), ModelConfig::new("Product", "App\\Product"));

        let manager = ConfigManager::new(
            raw,
            ConfigResolver::new(vec![Box::new(Counting(runs.clone()))]),
            cache.clone(),
            debug,
        );
        (manager, runs, cache)
    }

    #[test]
    fn test_cached_resolution() {
        let (manager, runs, cache) = manager(false);

        let first = manager.backend_config().unwrap();
        let second = manager.backend_config().unwrap();
        assert_eq!(first, second);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(cache.get(RESOLVED_CONFIG_CACHE_KEY).unwrap().is_some());

        manager.clear_cache().unwrap();
        assert_eq!(manager.backend_config().unwrap().site_name, "run 2");
    }

    #[test]
    fn test_debug_mode_bypasses_cache() {
        let (manager, runs, cache) = manager(true);

        assert_eq!(manager.backend_config().unwrap().site_name, "run 1");
        assert_eq!(manager.backend_config().unwrap().site_name, "run 2");
        assert_eq!(runs.load(Ordering::SeqCst), 2);
        assert!(cache.get(RESOLVED_CONFIG_CACHE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_cache_entry() {
        let (manager, _, cache) = manager(false);
        cache.put(RESOLVED_CONFIG_CACHE_KEY, "not json").unwrap();

        let err = manager.backend_config().unwrap_err();
        assert!(matches!(err, Error::CacheError(_)));
    }

    #[test]
    fn test_accessor() {
        let (manager, _, _) = manager(false);
        let accessor = manager.accessor().unwrap();
        assert_eq!(accessor.model_config("Product").unwrap().class, "App\\Product");
    }
}
