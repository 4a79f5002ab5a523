//! Editor widget guessing
//!
//! The property pass asks a [`TypeGuesser`] which widget edits a property
//! and whether it is required. Each supported object mapper gets its own
//! implementation; the pipeline only depends on the trait.

pub mod metadata_guesser;

pub use metadata_guesser::MetadataTypeGuesser;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How sure a guesser is about its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// A suggested editor widget with its default options
#[derive(Debug, Clone, PartialEq)]
pub struct TypeGuess {
    pub widget: String,
    pub options: Map<String, Value>,
    pub confidence: Confidence,
}

impl TypeGuess {
    pub fn new(widget: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            widget: widget.into(),
            options: Map::new(),
            confidence,
        }
    }

    pub fn with_option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }
}

/// Suggests editor widgets for model properties
pub trait TypeGuesser: Send + Sync {
    /// Widget suggested for editing `property` of `class`
    fn guess_editor_type(&self, class: &str, property: &str) -> Option<TypeGuess>;

    /// Whether `property` of `class` must be filled in
    fn guess_required(&self, class: &str, property: &str) -> Option<bool>;
}

/// Guesser that never has an opinion
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTypeGuesser;

impl TypeGuesser for NullTypeGuesser {
    fn guess_editor_type(&self, _class: &str, _property: &str) -> Option<TypeGuess> {
        None
    }

    fn guess_required(&self, _class: &str, _property: &str) -> Option<bool> {
        None
    }
}
