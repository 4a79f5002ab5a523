//! Configuration resolution pipeline
//!
//! A [`ConfigResolver`] runs an ordered list of [`ConfigPass`]es over the raw
//! tree. Each pass assumes every pass before it has run, so the order is part
//! of the contract; [`ResolverBuilder`] writes it down in one place.

pub mod builder;

pub use builder::ResolverBuilder;

use crate::error::Result;
use crate::types::BackendConfig;
use tracing::debug;

/// One deterministic transformation stage
pub trait ConfigPass: Send + Sync {
    /// Name used in logs and diagnostics
    fn name(&self) -> &'static str;

    /// Transform the tree, or reject the configuration
    fn process(&self, config: BackendConfig) -> Result<BackendConfig>;
}

/// Runs passes in registration order
pub struct ConfigResolver {
    passes: Vec<Box<dyn ConfigPass>>,
}

impl std::fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("passes", &self.pass_names())
            .finish()
    }
}

impl ConfigResolver {
    pub fn new(passes: Vec<Box<dyn ConfigPass>>) -> Self {
        Self { passes }
    }

    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|pass| pass.name()).collect()
    }

    /// Run every pass over `raw`; the first failure aborts resolution
    pub fn resolve(&self, raw: BackendConfig) -> Result<BackendConfig> {
        debug!(
            "Resolving backend configuration with {} models through {} passes",
            raw.models.len(),
            self.passes.len()
        );

        self.passes.iter().try_fold(raw, |config, pass| {
            debug!("Running {} pass", pass.name());
            pass.process(config)
        })
    }
}
