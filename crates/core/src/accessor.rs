//! Read API over a resolved configuration

use crate::error::{Error, Result};
use crate::types::{ActionConfig, BackendConfig, ModelConfig, View};
use serde_json::Value;
use std::sync::Arc;

/// Read-only view of a resolved configuration
///
/// "Must exist" lookups fail with a typed error; lookups that may
/// legitimately find nothing return `None`.
#[derive(Debug, Clone)]
pub struct ConfigAccessor {
    config: Arc<BackendConfig>,
    tree: Value,
}

impl ConfigAccessor {
    pub fn new(config: Arc<BackendConfig>) -> Result<Self> {
        let tree = serde_json::to_value(config.as_ref())?;
        Ok(Self { config, tree })
    }

    pub fn backend_config(&self) -> &BackendConfig {
        &self.config
    }

    /// The value at a dotted path such as `design.menu`, or the whole tree
    pub fn get(&self, path: Option<&str>) -> Result<&Value> {
        let Some(path) = path.filter(|p| !p.is_empty()) else {
            return Ok(&self.tree);
        };

        path.split('.').try_fold(&self.tree, |node, segment| {
            let next = match node {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            };
            next.ok_or_else(|| Error::PathNotFound(path.to_string()))
        })
    }

    pub fn model_config(&self, name: &str) -> Result<&ModelConfig> {
        self.config
            .models
            .get(name)
            .ok_or_else(|| Error::UndefinedModel(name.to_string()))
    }

    /// First model managing exactly `class`
    pub fn model_config_by_class(&self, class: &str) -> Option<&ModelConfig> {
        self.config.models.values().find(|model| model.class == class)
    }

    /// Best-effort: an unknown model, view or action yields `None`
    pub fn action_config(&self, model: &str, view: View, action: &str) -> Option<&ActionConfig> {
        self.model_config(model).ok()?.view(view).action(action)
    }

    /// Declared for the view and not disabled for the model; false for an
    /// unknown model
    pub fn is_action_enabled(&self, model: &str, view: View, action: &str) -> bool {
        self.model_config(model).is_ok_and(|config| {
            config.view(view).action(action).is_some() && !config.is_action_disabled(action)
        })
    }

    /// Actions of a view that are enabled, in display order
    pub fn enabled_actions(&self, model: &str, view: View) -> Result<Vec<&ActionConfig>> {
        let config = self.model_config(model)?;
        Ok(config
            .view(view)
            .actions
            .iter()
            .filter(|action| !config.is_action_disabled(&action.name))
            .collect())
    }
}
