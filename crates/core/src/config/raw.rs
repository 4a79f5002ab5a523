//! User-facing configuration document
//!
//! The raw document accepts every shorthand the configuration format allows
//! and is converted into an undigested [`BackendConfig`] that the resolver
//! pipeline normalizes.

use crate::error::{Error, Result};
use crate::types::{
    AssetsConfig, BackendConfig, ColorScheme, DesignConfig, FormatConfig, GlobalViewConfig,
    ModelConfig, ViewConfig,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension, defaulting to YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => ConfigFormat::Json,
            Some("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Top-level configuration document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub site_name: Option<String>,
    pub locale: Option<String>,
    pub translation_domain: Option<String>,
    pub disabled_actions: Vec<String>,
    #[serde(alias = "entities")]
    pub models: IndexMap<String, RawModel>,
    pub design: RawDesign,
    pub formats: RawFormats,
    pub list: RawGlobalView,
    pub search: RawGlobalView,
    pub show: RawGlobalView,
    pub edit: RawGlobalView,
    pub new: RawGlobalView,
}

/// A model is declared either by its class alone or by a full mapping
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawModel {
    Class(String),
    Config(Box<RawModelConfig>),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawModelConfig {
    pub class: Option<String>,
    pub label: Option<String>,
    pub disabled_actions: Vec<String>,
    pub translation_domain: Option<String>,
    pub controller: Option<String>,
    pub templates: IndexMap<String, String>,
    pub list: Option<RawView>,
    pub search: Option<RawView>,
    pub show: Option<RawView>,
    pub form: Option<RawView>,
    pub edit: Option<RawView>,
    pub new: Option<RawView>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawView {
    pub fields: Vec<Value>,
    pub actions: Option<Vec<Value>>,
    pub sort: Option<Value>,
    pub dql_filter: Option<String>,
    pub max_results: Option<usize>,
    pub title: Option<String>,
    pub help: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawGlobalView {
    pub actions: Option<Vec<Value>>,
    pub title: Option<String>,
    pub help: Option<String>,
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDesign {
    pub brand_color: Option<String>,
    pub color_scheme: Option<ColorScheme>,
    pub rtl: Option<bool>,
    pub templates: IndexMap<String, String>,
    pub assets: Option<AssetsConfig>,
    pub menu: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFormats {
    pub date: Option<String>,
    pub time: Option<String>,
    pub datetime: Option<String>,
    pub dateinterval: Option<String>,
    pub number: Option<String>,
}

impl RawConfig {
    /// Load a configuration document, choosing the format from the extension
    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!("Loading backend configuration from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents, ConfigFormat::from_path(path))
    }

    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Self> {
        let config = match format {
            ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        }
        .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;

        Ok(config)
    }

    /// Convert into the undigested tree the resolver consumes
    pub fn into_tree(self) -> BackendConfig {
        let defaults = BackendConfig::default();

        let models = self
            .models
            .into_iter()
            .map(|(name, model)| {
                let config = model.into_model_config(&name);
                (name, config)
            })
            .collect();

        BackendConfig {
            site_name: self.site_name.unwrap_or(defaults.site_name),
            locale: self.locale,
            translation_domain: self
                .translation_domain
                .unwrap_or(defaults.translation_domain),
            default_model_name: None,
            default_menu_item: None,
            disabled_actions: self.disabled_actions,
            models,
            design: self.design.into_design(),
            formats: self.formats.into_formats(),
            list: self.list.into_global_view(defaults.list),
            search: self.search.into_global_view(defaults.search),
            show: self.show.into_global_view(defaults.show),
            edit: self.edit.into_global_view(defaults.edit),
            new: self.new.into_global_view(defaults.new),
            internal: defaults.internal,
        }
    }
}

impl RawModel {
    fn into_model_config(self, name: &str) -> ModelConfig {
        let raw = match self {
            RawModel::Class(class) => RawModelConfig {
                class: Some(class),
                ..RawModelConfig::default()
            },
            RawModel::Config(config) => *config,
        };

        ModelConfig {
            name: name.to_string(),
            class: raw.class.unwrap_or_default(),
            label: raw.label.unwrap_or_default(),
            primary_key_field_name: None,
            properties: IndexMap::new(),
            disabled_actions: raw.disabled_actions,
            translation_domain: raw.translation_domain,
            controller: raw.controller,
            templates: raw.templates,
            list: raw.list.map(RawView::into_view).unwrap_or_default(),
            search: raw.search.map(RawView::into_view).unwrap_or_default(),
            show: raw.show.map(RawView::into_view).unwrap_or_default(),
            form: raw.form.map(RawView::into_view).unwrap_or_default(),
            edit: raw.edit.map(RawView::into_view).unwrap_or_default(),
            new: raw.new.map(RawView::into_view).unwrap_or_default(),
            extra: raw.extra,
        }
    }
}

impl RawView {
    fn into_view(self) -> ViewConfig {
        ViewConfig {
            declared_fields: self.fields,
            declared_actions: self.actions,
            declared_sort: self.sort,
            dql_filter: self.dql_filter,
            max_results: self.max_results,
            title: self.title,
            help: self.help,
            extra: self.extra,
            ..ViewConfig::default()
        }
    }
}

impl RawGlobalView {
    fn into_global_view(self, defaults: GlobalViewConfig) -> GlobalViewConfig {
        GlobalViewConfig {
            declared_actions: self.actions,
            actions: Vec::new(),
            title: self.title,
            help: self.help,
            max_results: self.max_results.or(defaults.max_results),
        }
    }
}

impl RawDesign {
    fn into_design(self) -> DesignConfig {
        let defaults = DesignConfig::default();
        DesignConfig {
            brand_color: self.brand_color.unwrap_or(defaults.brand_color),
            color_scheme: self.color_scheme.unwrap_or(defaults.color_scheme),
            declared_rtl: self.rtl,
            rtl: false,
            templates: self.templates,
            assets: self.assets.unwrap_or_default(),
            declared_menu: self.menu,
            menu: Vec::new(),
        }
    }
}

impl RawFormats {
    fn into_formats(self) -> FormatConfig {
        let defaults = FormatConfig::default();
        FormatConfig {
            date: self.date.unwrap_or(defaults.date),
            time: self.time.unwrap_or(defaults.time),
            datetime: self.datetime.unwrap_or(defaults.datetime),
            dateinterval: self.dateinterval.unwrap_or(defaults.dateinterval),
            number: self.number,
        }
    }
}
