//! Inheritance of the `form` view by `edit` and `new`

use super::declarations::{FieldMap, declared_property};
use crate::config::merge::{merge_named, merged};
use crate::types::{DESIGN_ELEMENT_PREFIX, REMOVAL_MARKER, ViewConfig};
use serde_json::Value;
use std::collections::HashSet;

/// Merge the fields of a child view onto its parent's
///
/// Parent fields come first, in parent order, merged with the child
/// declaration of the same property. A child `-name` entry removes the
/// parent's `name`. Child-only fields and design elements follow in child
/// order; a child design element whose key is already taken gets the next
/// free index.
pub fn merge_fields(parent: &FieldMap, child: &FieldMap) -> FieldMap {
    let removed: HashSet<&str> = child
        .values()
        .filter_map(declared_property)
        .filter_map(|property| property.strip_prefix(REMOVAL_MARKER))
        .collect();

    let mut fields = FieldMap::new();

    for (key, parent_field) in parent {
        let field = match declared_property(parent_field) {
            None => parent_field.clone(),
            Some(property) if removed.contains(property) => continue,
            Some(property) => child
                .values()
                .find(|candidate| declared_property(candidate) == Some(property))
                .map(|child_field| merged(parent_field, child_field))
                .unwrap_or_else(|| parent_field.clone()),
        };
        fields.insert(key.clone(), field);
    }

    for (key, child_field) in child {
        match declared_property(child_field) {
            None => {
                let key = if fields.contains_key(key) {
                    next_free_design_key(&fields)
                } else {
                    key.clone()
                };
                fields.insert(key, child_field.clone());
            }
            Some(property) if property.starts_with(REMOVAL_MARKER) => {}
            Some(property) => {
                let inherited = fields
                    .values()
                    .any(|field| declared_property(field) == Some(property));
                if !inherited {
                    fields.insert(key.clone(), child_field.clone());
                }
            }
        }
    }

    fields
}

fn next_free_design_key(fields: &FieldMap) -> String {
    (0..)
        .map(|index| format!("{DESIGN_ELEMENT_PREFIX}{index}"))
        .find(|key| !fields.contains_key(key))
        .unwrap_or_else(|| DESIGN_ELEMENT_PREFIX.to_string())
}

/// Inherit the view-level options `child` leaves unset
pub fn inherit_view_options(child: &mut ViewConfig, parent: &ViewConfig) {
    if child.dql_filter.is_none() {
        child.dql_filter = parent.dql_filter.clone();
    }
    if child.max_results.is_none() {
        child.max_results = parent.max_results;
    }
    if child.title.is_none() {
        child.title = parent.title.clone();
    }
    if child.help.is_none() {
        child.help = parent.help.clone();
    }
    if child.declared_sort.is_none() {
        child.declared_sort = parent.declared_sort.clone();
    }

    child.extra = merged(&parent.extra, &child.extra);

    let parent_actions: &[Value] = parent.declared_actions.as_deref().unwrap_or_default();
    let child_actions: &[Value] = child.declared_actions.as_deref().unwrap_or_default();
    child.declared_actions = Some(merge_named(parent_actions, child_actions));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::normalizer::declarations::canonical_fields;
    use crate::types::View;
    use serde_json::json;

    fn fields(declared: Vec<Value>) -> FieldMap {
        canonical_fields("Product", View::Form, declared).unwrap()
    }

    fn keys(fields: &FieldMap) -> Vec<&str> {
        fields.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_removal_marker_drops_parent_field() {
        let parent = fields(vec![json!("a"), json!("b"), json!("c")]);
        let child = fields(vec![json!("-b")]);

        assert_eq!(keys(&merge_fields(&parent, &child)), vec!["a", "c"]);
    }

    #[test]
    fn test_child_overrides_and_appends() {
        let parent = fields(vec![json!({"property": "name", "label": "Name", "help": "Shown"})]);
        let child = fields(vec![json!({"property": "name", "label": "Title"}), json!("price")]);

        let merged = merge_fields(&parent, &child);
        assert_eq!(keys(&merged), vec!["name", "price"]);
        assert_eq!(merged["name"]["label"], "Title");
        assert_eq!(merged["name"]["help"], "Shown");
    }

    #[test]
    fn test_colliding_design_element_is_rekeyed() {
        let parent = fields(vec![json!({"type": "group"}), json!("name")]);
        let child = fields(vec![json!({"type": "divider"}), json!("price")]);

        let merged = merge_fields(&parent, &child);
        assert_eq!(
            keys(&merged),
            vec!["_form_design_element_0", "name", "_form_design_element_1", "price"]
        );
        assert_eq!(merged["_form_design_element_1"]["type"], "divider");
    }

    #[test]
    fn test_view_options_are_inherited() {
        let parent = ViewConfig {
            title: Some("Form".into()),
            help: Some("Parent help".into()),
            declared_actions: Some(vec![json!({"name": "list", "label": "Back"})]),
            ..ViewConfig::default()
        };
        let mut child = ViewConfig {
            title: Some("Edit".into()),
            declared_actions: Some(vec![json!({"name": "list", "icon": "list"})]),
            ..ViewConfig::default()
        };

        inherit_view_options(&mut child, &parent);

        assert_eq!(child.title.as_deref(), Some("Edit"));
        assert_eq!(child.help.as_deref(), Some("Parent help"));
        assert_eq!(
            child.declared_actions,
            Some(vec![json!({"name": "list", "label": "Back", "icon": "list"})])
        );
    }
}
