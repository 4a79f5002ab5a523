use super::{ConfigPass, ConfigResolver};
use crate::controller::{ControllerRegistry, StaticControllerRegistry};
use crate::guess::{MetadataTypeGuesser, TypeGuesser};
use crate::metadata::MetadataProvider;
use crate::passes::{
    ActionPass, DefaultPass, DesignPass, FieldResolver, MenuPass, MetadataPass, NormalizerPass,
    PropertyPass, TemplatePass, ViewPass,
};
use crate::template::{StaticTemplates, TemplateSource};
use std::sync::Arc;

/// Wires collaborators into a [`ConfigResolver`] with the passes in order
pub struct ResolverBuilder {
    metadata: Arc<dyn MetadataProvider>,
    guesser: Option<Arc<dyn TypeGuesser>>,
    controllers: Arc<dyn ControllerRegistry>,
    templates: Arc<dyn TemplateSource>,
    design: Option<Option<String>>,
}

impl ResolverBuilder {
    pub fn new(metadata: Arc<dyn MetadataProvider>) -> Self {
        Self {
            metadata,
            guesser: None,
            controllers: Arc::new(StaticControllerRegistry::default()),
            templates: Arc::new(StaticTemplates::default()),
            design: None,
        }
    }

    /// Replace the metadata-backed type guesser
    pub fn type_guesser(mut self, guesser: Arc<dyn TypeGuesser>) -> Self {
        self.guesser = Some(guesser);
        self
    }

    pub fn controllers(mut self, controllers: Arc<dyn ControllerRegistry>) -> Self {
        self.controllers = controllers;
        self
    }

    pub fn templates(mut self, templates: Arc<dyn TemplateSource>) -> Self {
        self.templates = templates;
        self
    }

    /// Also run the design pass; `locale` is the rendering locale that
    /// decides the text direction when the configuration does not
    pub fn design(mut self, locale: Option<String>) -> Self {
        self.design = Some(locale);
        self
    }

    pub fn build(self) -> ConfigResolver {
        let guesser: Arc<dyn TypeGuesser> = match self.guesser {
            Some(guesser) => guesser,
            None => Arc::new(MetadataTypeGuesser::new(self.metadata.clone())),
        };
        let fields = Arc::new(FieldResolver::new(guesser));

        let mut passes: Vec<Box<dyn ConfigPass>> = vec![
            Box::new(DefaultPass::new(self.design.clone().flatten())),
            Box::new(MetadataPass::new(self.metadata)),
            Box::new(NormalizerPass::new(self.controllers)),
            Box::new(ActionPass::new()),
            Box::new(MenuPass),
            Box::new(PropertyPass::new(fields.clone())),
            Box::new(ViewPass::new(fields)),
            Box::new(TemplatePass::new(self.templates)),
        ];

        if self.design.is_some() {
            passes.push(Box::new(DesignPass));
        }

        ConfigResolver::new(passes)
    }
}
