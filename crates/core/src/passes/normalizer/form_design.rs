//! Tab and group structure of form views
//!
//! Forms are rendered as tabs containing groups containing fields. Users may
//! declare tabs and groups anywhere, so fields that precede the first tab,
//! or the first group of a tab, are wrapped in synthetic elements to keep
//! every field inside the structure.

use crate::types::{DESIGN_ELEMENT_PREFIX, FieldConfig};
use indexmap::IndexMap;

const TAB: &str = "tab";
const GROUP: &str = "group";

pub fn forced_first_tab_key() -> String {
    format!("{DESIGN_ELEMENT_PREFIX}forced_first_tab")
}

pub fn forced_first_group_key() -> String {
    format!("{DESIGN_ELEMENT_PREFIX}forced_first_group")
}

pub fn forced_group_key(tab_index: usize) -> String {
    format!("{DESIGN_ELEMENT_PREFIX}forced_group_{tab_index}")
}

/// Insert the synthetic tabs and groups a form needs
pub fn insert_forced_elements(fields: IndexMap<String, FieldConfig>) -> IndexMap<String, FieldConfig> {
    let mut entries: Vec<(String, FieldConfig)> = fields.into_iter().collect();
    let is_tab = |field: &FieldConfig| field.is_design_element_of(TAB);
    let is_group = |field: &FieldConfig| field.is_design_element_of(GROUP);

    let first_tab = entries.iter().position(|(_, field)| is_tab(field));
    let first_group = entries.iter().position(|(_, field)| is_group(field));

    let Some(first_tab) = first_tab else {
        if first_group.is_some_and(|index| index > 0) {
            entries.insert(
                0,
                (forced_first_group_key(), FieldConfig::design_element(GROUP)),
            );
        }
        return entries.into_iter().collect();
    };

    if first_tab > 0 {
        entries.insert(0, (forced_first_tab_key(), FieldConfig::design_element(TAB)));
    }

    let mut result: Vec<(String, FieldConfig)> = Vec::with_capacity(entries.len() + 2);
    let mut declared_tabs = 0;
    let mut index = 0;

    while index < entries.len() {
        let (key, field) = entries[index].clone();
        index += 1;

        if !is_tab(&field) {
            result.push((key, field));
            continue;
        }

        let forced_key = if key == forced_first_tab_key() {
            forced_first_group_key()
        } else {
            declared_tabs += 1;
            forced_group_key(declared_tabs - 1)
        };
        result.push((key, field));

        let segment_end = entries[index..]
            .iter()
            .position(|(_, field)| is_tab(field))
            .map_or(entries.len(), |offset| index + offset);
        let segment = &entries[index..segment_end];

        let has_group = segment.iter().any(|(_, field)| is_group(field));
        let starts_with_group = segment.first().is_some_and(|(_, field)| is_group(field));
        if has_group && !starts_with_group {
            result.push((forced_key, FieldConfig::design_element(GROUP)));
        }
    }

    result.into_iter().collect()
}

/// Record on every entry the tab and group it is rendered in
pub fn assign_placement(fields: &mut IndexMap<String, FieldConfig>) {
    let mut current_tab: Option<String> = None;
    let mut current_group: Option<String> = None;

    for (key, field) in fields.iter_mut() {
        if field.is_design_element_of(TAB) {
            current_tab = Some(key.clone());
            current_group = None;
            continue;
        }

        field.form_tab = current_tab.clone();

        if field.is_design_element_of(GROUP) {
            current_group = Some(key.clone());
            continue;
        }

        field.form_group = current_group.clone();
    }
}
