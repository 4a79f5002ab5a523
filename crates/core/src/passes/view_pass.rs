//! Per-view defaults: fields, backend-wide options and sorting

use super::field_resolver::{FieldContext, FieldResolver};
use super::sort::resolve_sort;
use crate::error::Result;
use crate::metadata::PropertyMetadata;
use crate::pipeline::ConfigPass;
use crate::types::{BackendConfig, FieldConfig, ModelConfig, View};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// Most fields a default list view shows
pub const MAX_DEFAULT_LIST_FIELDS: usize = 7;

/// Property names never shown by default in `view`
pub fn excluded_names(view: View) -> &'static [&'static str] {
    match view {
        View::List => &["password", "salt", "slug", "updatedAt", "uuid"],
        View::Search => &["password", "salt"],
        _ => &[],
    }
}

/// Storage types never shown by default in `view`
pub fn excluded_types(view: View) -> &'static [&'static str] {
    match view {
        View::List => &[
            "array",
            "binary",
            "blob",
            "guid",
            "json_array",
            "json",
            "object",
            "simple_array",
            "text",
        ],
        View::Edit | View::New => &["binary", "blob", "json_array", "json", "object"],
        View::Search => &[
            "association",
            "binary",
            "boolean",
            "blob",
            "date",
            "date_immutable",
            "datetime",
            "datetime_immutable",
            "datetimetz",
            "time",
            "time_immutable",
            "object",
        ],
        View::Show | View::Form => &[],
    }
}

/// Properties a view shows when it declares no fields
pub fn default_properties(model: &ModelConfig, view: View) -> Vec<&PropertyMetadata> {
    let excluded_pk = view.is_form() && view != View::Form;
    let limit = match view {
        View::List => MAX_DEFAULT_LIST_FIELDS,
        _ => usize::MAX,
    };

    model
        .properties
        .values()
        .filter(|property| !excluded_names(view).contains(&property.name.as_str()))
        .filter(|property| !excluded_types(view).contains(&property.storage_type.as_str()))
        .filter(|property| !(excluded_pk && model.primary_key() == Some(property.name.as_str())))
        .take(limit)
        .collect()
}

pub struct ViewPass {
    resolver: Arc<FieldResolver>,
}

impl ViewPass {
    pub fn new(resolver: Arc<FieldResolver>) -> Self {
        Self { resolver }
    }
}

impl ConfigPass for ViewPass {
    fn name(&self) -> &'static str {
        "view"
    }

    fn process(&self, mut config: BackendConfig) -> Result<BackendConfig> {
        let formats = config.formats.clone();
        let globals: IndexMap<View, _> = View::GLOBAL
            .into_iter()
            .filter_map(|view| config.global_view(view).map(|global| (view, global.clone())))
            .collect();

        for (name, model) in config.models.iter_mut() {
            for view in [View::List, View::Search, View::Show, View::Edit, View::New] {
                if !model.view(view).fields.is_empty() {
                    continue;
                }

                let context = FieldContext {
                    model: &*model,
                    view,
                    formats: &formats,
                };
                let fields: IndexMap<String, FieldConfig> = default_properties(model, view)
                    .into_iter()
                    .map(|property| {
                        let field = FieldConfig::for_property(property.name.as_str());
                        (property.name.clone(), self.resolver.resolve(&context, field))
                    })
                    .collect();

                debug!("Model {} gets {} default {} fields", name, fields.len(), view);
                model.view_mut(view).fields = fields;
            }

            for (view, global) in &globals {
                let config = model.view_mut(*view);
                if config.help.is_none() {
                    config.help = global.help.clone();
                }
                if config.title.is_none() {
                    config.title = global.title.clone();
                }
                if config.max_results.is_none() {
                    config.max_results = global.max_results;
                }
            }

            for view in View::ALL {
                let Some(declared) = model.view_mut(view).declared_sort.take() else {
                    continue;
                };
                let sort = resolve_sort(model, view, &declared)?;
                model.view_mut(view).sort = Some(sort);
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guess::NullTypeGuesser;
    use crate::metadata::FieldMapping;
    use crate::types::{GlobalViewConfig, SortDirection};
    use serde_json::json;

    fn model() -> ModelConfig {
        let mut model = ModelConfig::new("User", "App\\User");
        model.primary_key_field_name = Some("id".into());
        for (name, kind) in [
            ("id", "integer"),
            ("email", "string"),
            ("password", "string"),
            ("bio", "text"),
            ("active", "boolean"),
            ("createdAt", "datetime"),
            ("settings", "json"),
            ("nickname", "string"),
            ("city", "string"),
            ("country", "string"),
            ("zip", "string"),
        ] {
            let mapping = FieldMapping {
                name: name.into(),
                storage_type: kind.into(),
                nullable: true,
                column: None,
            };
            model
                .properties
                .insert(name.into(), PropertyMetadata::from_field(&mapping, name == "id"));
        }
        model
    }

    fn pass() -> ViewPass {
        ViewPass::new(Arc::new(FieldResolver::new(Arc::new(NullTypeGuesser))))
    }

    fn run(model: ModelConfig) -> BackendConfig {
        let mut config = BackendConfig::default();
        config.models.insert(model.name.clone(), model);
        pass().process(config).unwrap()
    }

    fn keys(model: &ModelConfig, view: View) -> Vec<&str> {
        model.view(view).fields.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_default_fields_honor_exclusions() {
        let config = run(model());
        let model = &config.models["User"];

        assert_eq!(
            keys(model, View::List),
            vec!["id", "email", "active", "createdAt", "nickname", "city", "country"]
        );
        assert_eq!(
            keys(model, View::Search),
            vec!["id", "email", "bio", "settings", "nickname", "city", "country", "zip"]
        );
        assert!(!keys(model, View::Edit).contains(&"id"));
        assert!(!keys(model, View::New).contains(&"settings"));
        assert_eq!(keys(model, View::Show).len(), 11);
        assert!(model.form.fields.is_empty());
        assert_eq!(model.list.fields["active"].data_type.as_deref(), Some("toggle"));
    }

    #[test]
    fn test_declared_fields_are_kept() {
        let mut model = model();
        model
            .list
            .fields
            .insert("password".into(), FieldConfig::for_property("password"));

        let config = run(model);
        assert_eq!(keys(&config.models["User"], View::List), vec!["password"]);
    }

    #[test]
    fn test_global_view_options() {
        let mut model = model();
        model.show.title = Some("Profile".into());

        let mut config = BackendConfig::default();
        config.models.insert("User".into(), model);
        config.show = GlobalViewConfig {
            title: Some("Details".into()),
            help: Some("Read only".into()),
            ..GlobalViewConfig::default()
        };

        let config = pass().process(config).unwrap();
        let model = &config.models["User"];
        assert_eq!(model.show.title.as_deref(), Some("Profile"));
        assert_eq!(model.show.help.as_deref(), Some("Read only"));
        assert_eq!(model.list.max_results, Some(15));
        assert_eq!(model.search.max_results, Some(15));
    }

    #[test]
    fn test_sort_is_resolved() {
        let mut model = model();
        model.list.declared_sort = Some(json!(["email", "asc"]));
        model.search.declared_sort = Some(json!("createdAt"));

        let config = run(model);
        let model = &config.models["User"];
        let list_sort = model.list.sort.as_ref().unwrap();
        assert_eq!(list_sort.field, "email");
        assert_eq!(list_sort.direction, SortDirection::Asc);
        assert_eq!(model.search.sort.as_ref().unwrap().direction, SortDirection::Desc);
    }
}
