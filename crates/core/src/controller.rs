//! Lookup of custom controllers declared by models

use std::collections::HashSet;

/// Knows which controller names resolve to a real target
pub trait ControllerRegistry: Send + Sync {
    fn contains(&self, controller: &str) -> bool;
}

/// Registry over a fixed set of controller names
#[derive(Debug, Clone, Default)]
pub struct StaticControllerRegistry {
    controllers: HashSet<String>,
}

impl StaticControllerRegistry {
    pub fn new<I, S>(controllers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            controllers: controllers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn register(&mut self, controller: impl Into<String>) {
        self.controllers.insert(controller.into());
    }
}

impl ControllerRegistry for StaticControllerRegistry {
    fn contains(&self, controller: &str) -> bool {
        self.controllers.contains(controller)
    }
}
