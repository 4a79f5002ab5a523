use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What a menu item links to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuItemKind {
    Entity,
    Link,
    Route,
    Divider,
    Empty,
}

/// A resolved entry of the backend menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: Option<String>,
    pub icon: Option<String>,
    pub css_class: String,
    #[serde(rename = "type")]
    pub kind: MenuItemKind,
    pub model: Option<String>,
    pub url: Option<String>,
    pub route: Option<String>,
    pub params: Map<String, Value>,
    pub target: Option<String>,
    pub default: bool,
    pub menu_index: usize,
    /// Position inside the parent item; `None` for top-level items
    pub submenu_index: Option<usize>,
    pub children: Vec<MenuItem>,
}
