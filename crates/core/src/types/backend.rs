use super::{ActionConfig, FieldConfig, MenuItem, View};
use crate::metadata::PropertyMetadata;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default page size of the list and search views
pub const DEFAULT_MAX_RESULTS: usize = 15;

/// The complete backend configuration tree
///
/// A raw tree is built from user configuration, handed to the resolver, and
/// comes back fully normalized. Slots named `declared_*` hold the raw
/// declarations that passes digest; they are never serialized, so a resolved
/// tree read back from the cache has them empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub site_name: String,
    pub locale: Option<String>,
    pub translation_domain: String,
    pub default_model_name: Option<String>,
    pub default_menu_item: Option<MenuItem>,
    pub disabled_actions: Vec<String>,
    pub models: IndexMap<String, ModelConfig>,
    pub design: DesignConfig,
    pub formats: FormatConfig,
    pub list: GlobalViewConfig,
    pub search: GlobalViewConfig,
    pub show: GlobalViewConfig,
    pub edit: GlobalViewConfig,
    pub new: GlobalViewConfig,
    #[serde(rename = "_internal")]
    pub internal: InternalConfig,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            site_name: "Backoffice".to_string(),
            locale: None,
            translation_domain: "messages".to_string(),
            default_model_name: None,
            default_menu_item: None,
            disabled_actions: Vec::new(),
            models: IndexMap::new(),
            design: DesignConfig::default(),
            formats: FormatConfig::default(),
            list: GlobalViewConfig::with_max_results(DEFAULT_MAX_RESULTS),
            search: GlobalViewConfig::with_max_results(DEFAULT_MAX_RESULTS),
            show: GlobalViewConfig::default(),
            edit: GlobalViewConfig::default(),
            new: GlobalViewConfig::default(),
            internal: InternalConfig::default(),
        }
    }
}

impl BackendConfig {
    /// Backend-wide defaults of a view; `form` has none of its own
    pub fn global_view(&self, view: View) -> Option<&GlobalViewConfig> {
        match view {
            View::List => Some(&self.list),
            View::Search => Some(&self.search),
            View::Show => Some(&self.show),
            View::Edit => Some(&self.edit),
            View::New => Some(&self.new),
            View::Form => None,
        }
    }

    pub fn global_view_mut(&mut self, view: View) -> Option<&mut GlobalViewConfig> {
        match view {
            View::List => Some(&mut self.list),
            View::Search => Some(&mut self.search),
            View::Show => Some(&mut self.show),
            View::Edit => Some(&mut self.edit),
            View::New => Some(&mut self.new),
            View::Form => None,
        }
    }
}

/// Configuration of one managed model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    pub class: String,
    pub label: String,
    pub primary_key_field_name: Option<String>,
    pub properties: IndexMap<String, PropertyMetadata>,
    pub disabled_actions: Vec<String>,
    pub translation_domain: Option<String>,
    pub controller: Option<String>,
    pub templates: IndexMap<String, String>,
    pub list: ViewConfig,
    pub search: ViewConfig,
    pub show: ViewConfig,
    pub form: ViewConfig,
    pub edit: ViewConfig,
    pub new: ViewConfig,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModelConfig {
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            ..Self::default()
        }
    }

    pub fn view(&self, view: View) -> &ViewConfig {
        match view {
            View::List => &self.list,
            View::Search => &self.search,
            View::Show => &self.show,
            View::Form => &self.form,
            View::Edit => &self.edit,
            View::New => &self.new,
        }
    }

    pub fn view_mut(&mut self, view: View) -> &mut ViewConfig {
        match view {
            View::List => &mut self.list,
            View::Search => &mut self.search,
            View::Show => &mut self.show,
            View::Form => &mut self.form,
            View::Edit => &mut self.edit,
            View::New => &mut self.new,
        }
    }

    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key_field_name.as_deref()
    }

    pub fn is_action_disabled(&self, action: &str) -> bool {
        self.disabled_actions.iter().any(|a| a == action)
    }
}

/// Configuration of one view of a model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    #[serde(skip)]
    pub declared_fields: Vec<Value>,
    #[serde(skip)]
    pub declared_actions: Option<Vec<Value>>,
    #[serde(skip)]
    pub declared_sort: Option<Value>,
    /// Display order is significant
    pub fields: IndexMap<String, FieldConfig>,
    pub actions: Vec<ActionConfig>,
    pub dql_filter: Option<String>,
    pub sort: Option<SortConfig>,
    pub max_results: Option<usize>,
    pub title: Option<String>,
    pub help: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ViewConfig {
    pub fn action(&self, name: &str) -> Option<&ActionConfig> {
        self.actions.iter().find(|a| a.name == name)
    }
}

/// Backend-wide defaults of a view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalViewConfig {
    #[serde(skip)]
    pub declared_actions: Option<Vec<Value>>,
    pub actions: Vec<ActionConfig>,
    pub title: Option<String>,
    pub help: Option<String>,
    pub max_results: Option<usize>,
}

impl GlobalViewConfig {
    pub fn with_max_results(max_results: usize) -> Self {
        Self {
            max_results: Some(max_results),
            ..Self::default()
        }
    }
}

/// Resolved sorting of a list or search view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

/// Look and feel of the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    pub brand_color: String,
    pub color_scheme: ColorScheme,
    #[serde(skip)]
    pub declared_rtl: Option<bool>,
    pub rtl: bool,
    pub templates: IndexMap<String, String>,
    pub assets: AssetsConfig,
    #[serde(skip)]
    pub declared_menu: Vec<Value>,
    pub menu: Vec<MenuItem>,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            brand_color: "#205081".to_string(),
            color_scheme: ColorScheme::Dark,
            declared_rtl: None,
            rtl: false,
            templates: IndexMap::new(),
            assets: AssetsConfig::default(),
            declared_menu: Vec::new(),
            menu: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub css: Vec<String>,
    pub js: Vec<String>,
    pub favicon: Option<String>,
}

/// Display formats of dates, times and numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub date: String,
    pub time: String,
    pub datetime: String,
    pub dateinterval: String,
    pub number: Option<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            date: "Y-m-d".to_string(),
            time: "H:i:s".to_string(),
            datetime: "F j, Y H:i".to_string(),
            dateinterval: "%y Year(s) %m Month(s) %d Day(s)".to_string(),
            number: None,
        }
    }
}

/// Derived artifacts that are not part of the user-facing structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternalConfig {
    /// Empty unless the design pass ran
    pub custom_css: String,
}
