//! Resolution of template names
//!
//! Every template slot of the backend and of each model, and the template
//! of every displayed field, is resolved to the name of a template that
//! exists. The listing of available templates is taken once per run.

use crate::error::{Error, Result};
use crate::pipeline::ConfigPass;
use crate::template::{
    CONVENTION_ROOT, TEMPLATE_EXTENSION, TEMPLATE_SLOTS, TemplateIndex, TemplateSource,
    bundled_template, convention_template, model_convention_template,
};
use crate::types::{BackendConfig, FieldConfig, ModelConfig, View};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

use super::field_resolver::normalized_type;

const BACKEND_SCOPE: &str = "the backend";
const UNDEFINED_SLOT: &str = "label_undefined";

pub struct TemplatePass {
    source: Arc<dyn TemplateSource>,
}

impl TemplatePass {
    pub fn new(source: Arc<dyn TemplateSource>) -> Self {
        Self { source }
    }
}

fn first_existing(
    index: &TemplateIndex,
    slot: &str,
    scope: &str,
    candidates: Vec<String>,
) -> Result<String> {
    index
        .first_existing(candidates.iter().map(String::as_str))
        .ok_or_else(|| Error::TemplateResolution {
            slot: slot.to_string(),
            scope: scope.to_string(),
            candidates: candidates.join(", "),
        })
}

fn with_extension(name: &str) -> String {
    if name.ends_with(TEMPLATE_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{TEMPLATE_EXTENSION}")
    }
}

/// Template lookup chain of one model
struct ModelTemplates<'a> {
    index: &'a TemplateIndex,
    design_overrides: &'a IndexMap<String, String>,
    model: &'a ModelConfig,
    scope: String,
}

impl ModelTemplates<'_> {
    fn candidates(&self, slot: &str) -> Vec<String> {
        let mut candidates = Vec::new();
        if let Some(name) = self.model.templates.get(slot) {
            candidates.push(name.clone());
        }
        if let Some(name) = self.design_overrides.get(slot) {
            candidates.push(name.clone());
        }
        candidates.push(model_convention_template(&self.model.name, slot));
        candidates.push(convention_template(slot));
        candidates.push(bundled_template(slot));
        candidates
    }

    fn resolve_slot(&self, slot: &str) -> Result<String> {
        first_existing(self.index, slot, &self.scope, self.candidates(slot))
    }

    fn resolve_field(&self, name: &str, field: &FieldConfig) -> Result<String> {
        if let Some(template) = &field.template {
            let candidates = vec![
                format!("{CONVENTION_ROOT}/{}", with_extension(template)),
                with_extension(template),
            ];
            return first_existing(self.index, template, &self.scope, candidates);
        }

        let slot = if self.model.primary_key() == Some(name) {
            "field_id".to_string()
        } else {
            let kind = field.data_type.as_deref().unwrap_or("text");
            format!("field_{}", normalized_type(kind))
        };

        // kinds without a field template render as undefined values
        let candidates = self.candidates(&slot);
        match self.index.first_existing(candidates.iter().map(String::as_str)) {
            Some(template) => Ok(template),
            None => {
                debug!("No {} template in {}, using {}", slot, self.scope, UNDEFINED_SLOT);
                self.resolve_slot(UNDEFINED_SLOT)
            }
        }
    }
}

impl ConfigPass for TemplatePass {
    fn name(&self) -> &'static str {
        "template"
    }

    fn process(&self, mut config: BackendConfig) -> Result<BackendConfig> {
        let index = TemplateIndex::load(self.source.as_ref())?;
        let design_overrides = config.design.templates.clone();

        let mut backend_templates = IndexMap::new();
        for slot in TEMPLATE_SLOTS {
            let mut candidates = Vec::new();
            if let Some(name) = design_overrides.get(*slot) {
                candidates.push(name.clone());
            }
            candidates.push(convention_template(slot));
            candidates.push(bundled_template(slot));
            backend_templates.insert(
                slot.to_string(),
                first_existing(&index, slot, BACKEND_SCOPE, candidates)?,
            );
        }
        config.design.templates = backend_templates;

        for (name, model) in config.models.iter_mut() {
            let mut slots: Vec<String> = TEMPLATE_SLOTS.iter().map(|s| s.to_string()).collect();
            for custom in model.templates.keys().chain(design_overrides.keys()) {
                if !slots.contains(custom) {
                    slots.push(custom.clone());
                }
            }

            let (templates, fields) = {
                let resolver = ModelTemplates {
                    index: &index,
                    design_overrides: &design_overrides,
                    model: &*model,
                    scope: format!("\"{name}\""),
                };

                let mut templates = IndexMap::new();
                for slot in &slots {
                    templates.insert(slot.clone(), resolver.resolve_slot(slot)?);
                }

                let mut fields = Vec::new();
                for view in [View::List, View::Search, View::Show] {
                    for (field_name, field) in &model.view(view).fields {
                        if field.is_design_element() {
                            continue;
                        }
                        let template = resolver.resolve_field(field_name, field)?;
                        fields.push((view, field_name.clone(), template));
                    }
                }
                (templates, fields)
            };

            model.templates = templates;
            for (view, field_name, template) in fields {
                if let Some(field) = model.view_mut(view).fields.get_mut(&field_name) {
                    field.template = Some(template);
                }
            }
            debug!("Resolved {} templates of {}", model.templates.len(), name);
        }

        Ok(config)
    }
}
