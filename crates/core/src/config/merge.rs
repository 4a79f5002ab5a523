//! Merging helpers for loosely-typed configuration fragments
//!
//! Implements the override hierarchy used by view inheritance: the child
//! fragment is applied on top of the parent, nested maps are merged key by
//! key and any other value declared by the child replaces the parent's.

use serde_json::{Map, Value};

/// Recursively apply `child` on top of `base`
pub fn deep_merge(base: &mut Map<String, Value>, child: &Map<String, Value>) {
    for (key, child_value) in child {
        match (base.get_mut(key), child_value) {
            (Some(Value::Object(base_map)), Value::Object(child_map)) => {
                deep_merge(base_map, child_map);
            }
            _ => {
                base.insert(key.clone(), child_value.clone());
            }
        }
    }
}

/// Return `base` with `child` merged on top, leaving both inputs untouched
pub fn merged(base: &Map<String, Value>, child: &Map<String, Value>) -> Map<String, Value> {
    let mut result = base.clone();
    deep_merge(&mut result, child);
    result
}

/// Merge two lists of named entries
///
/// Entries of `child` whose `name` matches an entry of `base` are merged onto
/// it in place; the others are appended in their declared order.
pub fn merge_named(base: &[Value], child: &[Value]) -> Vec<Value> {
    let mut result: Vec<Value> = base.to_vec();

    for entry in child {
        let name = entry_name(entry);
        let existing = name.and_then(|name| {
            result
                .iter_mut()
                .find(|candidate| entry_name(candidate) == Some(name))
        });

        match (existing, entry) {
            (Some(Value::Object(base_map)), Value::Object(child_map)) => {
                deep_merge(base_map, child_map);
            }
            _ => result.push(entry.clone()),
        }
    }

    result
}

fn entry_name(entry: &Value) -> Option<&str> {
    entry.get("name").and_then(Value::as_str)
}
