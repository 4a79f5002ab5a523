//! Configuration documents and merge helpers

pub mod merge;
pub mod raw;

pub use merge::{deep_merge, merge_named, merged};
pub use raw::{ConfigFormat, RawConfig, RawModel, RawModelConfig, RawView};
