use crate::impl_case_insensitive_deserialize;
use serde::{Deserialize, Serialize};

/// How an action is dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// A method of the model's controller
    #[default]
    Method,
    /// A named route of the host application
    Route,
}

impl_case_insensitive_deserialize!(
    ActionKind,
    Method => "method",
    Route => "route"
);

/// A resolved action button of a view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub label: Option<String>,
    pub css_class: String,
    pub icon: Option<String>,
    pub target: String,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: ActionKind::Method,
            label: None,
            css_class: String::new(),
            icon: None,
            target: "_self".to_string(),
        }
    }
}

impl ActionConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Prefix that turns an action or field declaration into a removal
pub const REMOVAL_MARKER: char = '-';
