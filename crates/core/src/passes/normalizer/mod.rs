//! Normalization of user declarations
//!
//! Turns the loosely-shaped declarations of every view into canonical
//! field and action mappings, applies `form` inheritance to `edit` and
//! `new`, and lays out the tab/group structure of form views.

pub mod declarations;
pub mod form_design;
pub mod form_merge;

use crate::controller::ControllerRegistry;
use crate::error::{Error, Result};
use crate::pipeline::ConfigPass;
use crate::types::{BackendConfig, FieldConfig, ModelConfig, View};
use declarations::{FieldMap, canonical_actions, canonical_fields};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Scope name used for errors in backend-wide view declarations
const BACKEND_SCOPE: &str = "backend";

pub struct NormalizerPass {
    controllers: Arc<dyn ControllerRegistry>,
}

impl NormalizerPass {
    pub fn new(controllers: Arc<dyn ControllerRegistry>) -> Self {
        Self { controllers }
    }

    fn normalize_model(
        &self,
        name: &str,
        model: &mut ModelConfig,
        default_domain: &str,
    ) -> Result<()> {
        if model.label.is_empty() {
            model.label = name.to_string();
        }

        let mut fields: BTreeMap<View, FieldMap> = BTreeMap::new();
        for view in View::ALL {
            let config = model.view_mut(view);
            let declared = std::mem::take(&mut config.declared_fields);
            fields.insert(view, canonical_fields(name, view, declared)?);

            let actions = config.declared_actions.take();
            config.declared_actions = Some(canonical_actions(name, view, actions)?);
        }

        let form_fields = fields.remove(&View::Form).unwrap_or_default();
        for view in [View::Edit, View::New] {
            let own = fields.remove(&view).unwrap_or_default();
            fields.insert(view, form_merge::merge_fields(&form_fields, &own));

            let parent = model.form.clone();
            form_merge::inherit_view_options(model.view_mut(view), &parent);
        }
        fields.insert(View::Form, form_fields);

        for (view, declarations) in fields {
            let mut resolved = into_field_configs(name, view, declarations)?;
            if view.is_form() {
                resolved = form_design::insert_forced_elements(resolved);
                form_design::assign_placement(&mut resolved);
            }
            model.view_mut(view).fields = resolved;
        }

        if let Some(controller) = &model.controller {
            if !self.controllers.contains(controller) {
                return Err(Error::InvalidControllerReference {
                    model: name.to_string(),
                    controller: controller.clone(),
                });
            }
        }

        if model.translation_domain.is_none() {
            model.translation_domain = Some(default_domain.to_string());
        }

        Ok(())
    }
}

fn into_field_configs(
    model: &str,
    view: View,
    declarations: FieldMap,
) -> Result<IndexMap<String, FieldConfig>> {
    declarations
        .into_iter()
        .map(|(key, declaration)| {
            let field: FieldConfig = serde_json::from_value(Value::Object(declaration))
                .map_err(|e| Error::InvalidFieldDeclaration {
                    model: model.to_string(),
                    view: view.to_string(),
                    reason: format!("\"{key}\": {e}"),
                })?;
            Ok((key, field))
        })
        .collect()
}

impl ConfigPass for NormalizerPass {
    fn name(&self) -> &'static str {
        "normalizer"
    }

    fn process(&self, mut config: BackendConfig) -> Result<BackendConfig> {
        for view in View::GLOBAL {
            if let Some(global) = config.global_view_mut(view) {
                let actions = global.declared_actions.take();
                global.declared_actions = Some(canonical_actions(BACKEND_SCOPE, view, actions)?);
            }
        }

        let default_domain = config.translation_domain.clone();
        for (name, model) in config.models.iter_mut() {
            self.normalize_model(name, model, &default_domain)?;
            debug!("Normalized model {}", name);
        }

        Ok(config)
    }
}
