//! Typed records of the backend configuration tree

pub mod action;
pub mod backend;
pub mod field;
pub mod menu;
pub mod view;

pub use action::{ActionConfig, ActionKind, REMOVAL_MARKER};
pub use backend::{
    AssetsConfig, BackendConfig, ColorScheme, DEFAULT_MAX_RESULTS, DesignConfig, FormatConfig,
    GlobalViewConfig, InternalConfig, ModelConfig, SortConfig, SortDirection, ViewConfig,
};
pub use field::{DESIGN_ELEMENT_PREFIX, DESIGN_ELEMENT_TYPES, FieldConfig};
pub use menu::{MenuItem, MenuItemKind};
pub use view::View;
