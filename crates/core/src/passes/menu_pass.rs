//! Resolution of the backend menu

use crate::error::{Error, Result};
use crate::pipeline::ConfigPass;
use crate::types::{BackendConfig, MenuItem, MenuItemKind, ModelConfig};
use indexmap::IndexMap;
use serde_json::{Map, Value, json};
use tracing::debug;

const ICON_PREFIX: &str = "fa-";
const DEFAULT_ICON: &str = "fa-chevron-circle-right";
const DEFAULT_CHILD_ICON: &str = "fa-chevron-right";

/// Builds `design.menu` and picks the default menu item
#[derive(Debug, Default)]
pub struct MenuPass;

impl MenuPass {
    fn resolve_items(
        declared: Vec<Value>,
        models: &IndexMap<String, ModelConfig>,
        parent_index: Option<usize>,
    ) -> Result<Vec<MenuItem>> {
        declared
            .into_iter()
            .enumerate()
            .map(|(index, entry)| Self::resolve_item(entry, index, parent_index, models))
            .collect()
    }

    fn resolve_item(
        entry: Value,
        index: usize,
        parent_index: Option<usize>,
        models: &IndexMap<String, ModelConfig>,
    ) -> Result<MenuItem> {
        let position = index + 1;
        let mut declaration = match entry {
            Value::String(model) => {
                let mut declaration = Map::new();
                declaration.insert("model".to_string(), Value::String(model));
                declaration
            }
            Value::Object(declaration) => declaration,
            _ => return Err(Error::InvalidMenuItem { position }),
        };

        let text = |declaration: &Map<String, Value>, key: &str| {
            declaration
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let children_declared = match declaration.remove("children") {
            Some(Value::Array(children)) => children,
            Some(_) => return Err(Error::InvalidMenuItem { position }),
            None => Vec::new(),
        };

        let model = text(&declaration, "model").or_else(|| text(&declaration, "entity"));
        let url = text(&declaration, "url");
        let route = text(&declaration, "route");
        let mut label = text(&declaration, "label");

        let mut params = match declaration.get("params") {
            Some(Value::Object(params)) => params.clone(),
            _ => Map::new(),
        };

        let kind = if let Some(model) = &model {
            let Some(config) = models.get(model) else {
                return Err(Error::UnknownMenuModel {
                    model: model.clone(),
                    available: models.keys().cloned().collect::<Vec<_>>().join(", "),
                });
            };
            params.insert("action".to_string(), json!("list"));
            params.insert("entity".to_string(), json!(model));
            if label.is_none() {
                label = Some(if config.label.is_empty() {
                    model.clone()
                } else {
                    config.label.clone()
                });
            }
            MenuItemKind::Entity
        } else if url.is_some() {
            MenuItemKind::Link
        } else if route.is_some() {
            MenuItemKind::Route
        } else if label.is_some() {
            if children_declared.is_empty() {
                MenuItemKind::Divider
            } else {
                MenuItemKind::Empty
            }
        } else {
            return Err(Error::InvalidMenuItem { position });
        };

        let default_icon = if parent_index.is_some() {
            DEFAULT_CHILD_ICON
        } else {
            DEFAULT_ICON
        };
        let icon = match declaration.get("icon") {
            None | Some(Value::Null) => Some(default_icon.to_string()),
            Some(Value::String(icon)) if icon.is_empty() => None,
            Some(Value::String(icon)) if icon.starts_with(ICON_PREFIX) => Some(icon.clone()),
            Some(Value::String(icon)) => Some(format!("{ICON_PREFIX}{icon}")),
            Some(_) => return Err(Error::InvalidMenuItem { position }),
        };

        let (menu_index, submenu_index) = match parent_index {
            Some(parent) => (parent, Some(index)),
            None => (index, None),
        };

        let children = if parent_index.is_none() {
            Self::resolve_items(children_declared, models, Some(index))?
        } else {
            Vec::new()
        };

        Ok(MenuItem {
            label,
            icon,
            css_class: text(&declaration, "css_class").unwrap_or_default(),
            kind,
            model,
            url,
            route,
            params,
            target: text(&declaration, "target"),
            default: declaration
                .get("default")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            menu_index,
            submenu_index,
            children,
        })
    }

    fn find_default(items: &[MenuItem]) -> Option<&MenuItem> {
        items.iter().find_map(|item| {
            if item.default {
                Some(item)
            } else {
                Self::find_default(&item.children)
            }
        })
    }
}

impl ConfigPass for MenuPass {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn process(&self, mut config: BackendConfig) -> Result<BackendConfig> {
        let mut declared = std::mem::take(&mut config.design.declared_menu);
        if declared.is_empty() {
            declared = config.models.keys().map(|name| json!(name)).collect();
        }

        let menu = Self::resolve_items(declared, &config.models, None)?;
        config.default_menu_item = Self::find_default(&menu)
            .or_else(|| menu.first())
            .cloned();

        debug!("Resolved a menu of {} top-level items", menu.len());
        config.design.menu = menu;
        Ok(config)
    }
}
