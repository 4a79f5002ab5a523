//! Resolution of the action buttons of every view
//!
//! Each view starts from its built-in actions, then backend-wide
//! declarations and model declarations are overlaid by name. A `-name`
//! declaration at either level removes the action. Disabled actions stay in
//! the lists; readers filter them through the accessor.

use crate::config::merge::deep_merge;
use crate::error::{Error, Result};
use crate::pipeline::ConfigPass;
use crate::types::{ActionConfig, ActionKind, BackendConfig, REMOVAL_MARKER, View};
use crate::utils::humanize;
use indexmap::IndexMap;
use regex::Regex;
use serde_json::{Map, Value, json};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

static METHOD_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("literal pattern"));

type ActionMap = IndexMap<String, Map<String, Value>>;

/// Built-in actions of a view, in display order
pub fn default_action_names(view: View) -> &'static [&'static str] {
    match view {
        View::List | View::Search => &["edit", "delete", "new", "search"],
        View::Show => &["edit", "delete", "list"],
        View::Edit => &["delete", "list"],
        View::New => &["list"],
        View::Form => &[],
    }
}

/// Built-in configuration of a named action as rendered in `view`
pub fn default_action(name: &str, view: View) -> Map<String, Value> {
    let (icon, css_class) = match (name, view) {
        ("delete", View::List | View::Search) => (None, "text-danger action-delete"),
        ("edit", View::List | View::Search) => (None, "text-primary action-edit"),
        ("delete", _) => (Some("trash-o"), "btn btn-default action-delete"),
        ("edit", _) => (Some("edit"), "btn btn-primary action-edit"),
        ("new", _) => (None, "btn btn-primary action-new"),
        ("list", _) => (None, "btn btn-secondary action-list"),
        _ => (None, ""),
    };

    let mut action = Map::new();
    action.insert("name".to_string(), json!(name));
    action.insert("type".to_string(), json!("method"));
    action.insert("label".to_string(), json!(format!("action.{name}")));
    action.insert("css_class".to_string(), json!(css_class));
    if let Some(icon) = icon {
        action.insert("icon".to_string(), json!(icon));
    }
    action
}

#[derive(Debug, Default)]
pub struct ActionPass;

impl ActionPass {
    pub fn new() -> Self {
        Self
    }

    fn resolve(view: View, global: &[Value], local: &[Value]) -> Result<Vec<ActionConfig>> {
        let removed: HashSet<&str> = global
            .iter()
            .chain(local)
            .filter_map(action_name)
            .filter_map(|name| name.strip_prefix(REMOVAL_MARKER))
            .collect();

        let mut actions: ActionMap = default_action_names(view)
            .iter()
            .filter(|name| !removed.contains(**name))
            .map(|name| (name.to_string(), default_action(name, view)))
            .collect();

        for declaration in global.iter().chain(local) {
            let Some((name, declaration)) = declared_action(declaration) else {
                continue;
            };
            if name.starts_with(REMOVAL_MARKER) || removed.contains(name) {
                continue;
            }
            match actions.get_mut(name) {
                Some(existing) => deep_merge(existing, declaration),
                None => {
                    actions.insert(name.to_string(), declaration.clone());
                }
            }
        }

        let mut order = declared_order(local);
        if order.is_empty() {
            order = declared_order(global);
        }
        let actions = reorder(actions, &order);

        actions.into_iter().map(|(name, action)| into_action(&name, action)).collect()
    }
}

fn action_name(declaration: &Value) -> Option<&str> {
    declaration.get("name").and_then(Value::as_str)
}

fn declared_action(declaration: &Value) -> Option<(&str, &Map<String, Value>)> {
    let map = declaration.as_object()?;
    let name = map.get("name")?.as_str()?;
    Some((name, map))
}

/// Names a level declares, removals excluded
fn declared_order(declarations: &[Value]) -> Vec<&str> {
    declarations
        .iter()
        .filter_map(action_name)
        .filter(|name| !name.starts_with(REMOVAL_MARKER))
        .collect()
}

/// Put the named actions first, in the given order, followed by the rest
fn reorder(mut actions: ActionMap, order: &[&str]) -> ActionMap {
    let mut result = ActionMap::new();
    for name in order {
        if let Some(action) = actions.shift_remove(*name) {
            result.insert(name.to_string(), action);
        }
    }
    result.extend(actions);
    result
}

fn into_action(name: &str, mut declaration: Map<String, Value>) -> Result<ActionConfig> {
    if !declaration.contains_key("label") {
        declaration.insert("label".to_string(), Value::String(humanize(name)));
    }

    let action: ActionConfig = serde_json::from_value(Value::Object(declaration)).map_err(|e| {
        Error::InvalidAction {
            action: name.to_string(),
            reason: e.to_string(),
        }
    })?;

    if action.kind == ActionKind::Method && !METHOD_NAME_RE.is_match(&action.name) {
        return Err(Error::InvalidAction {
            action: name.to_string(),
            reason: "the name of a method action must be a valid method name".to_string(),
        });
    }

    Ok(action)
}

impl ConfigPass for ActionPass {
    fn name(&self) -> &'static str {
        "action"
    }

    fn process(&self, mut config: BackendConfig) -> Result<BackendConfig> {
        let global_disabled = config.disabled_actions.clone();
        let global_declared: IndexMap<View, Vec<Value>> = View::ALL
            .into_iter()
            .map(|view| {
                let declared = config
                    .global_view_mut(view)
                    .and_then(|global| global.declared_actions.take())
                    .unwrap_or_default();
                (view, declared)
            })
            .collect();

        for view in View::GLOBAL {
            let declared = &global_declared[&view];
            let actions = Self::resolve(view, declared, &[])?;
            if let Some(global) = config.global_view_mut(view) {
                global.actions = actions;
            }
        }

        for (name, model) in config.models.iter_mut() {
            let mut disabled = global_disabled.clone();
            for action in std::mem::take(&mut model.disabled_actions) {
                if !disabled.contains(&action) {
                    disabled.push(action);
                }
            }
            model.disabled_actions = disabled;

            for view in View::ALL {
                let config = model.view_mut(view);
                let local = config.declared_actions.take().unwrap_or_default();
                config.actions = Self::resolve(view, &global_declared[&view], &local)?;
            }

            debug!(
                "Model {} exposes {} list actions ({} disabled)",
                name,
                model.list.actions.len(),
                model.disabled_actions.len()
            );
        }

        Ok(config)
    }
}
