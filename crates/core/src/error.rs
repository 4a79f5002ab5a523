use std::io;

/// Errors that can occur while resolving or reading the backend configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid model \"{model}\": {reason}")]
    InvalidModel { model: String, reason: String },

    #[error("Invalid field declaration in the \"{view}\" view of \"{model}\": {reason}")]
    InvalidFieldDeclaration {
        model: String,
        view: String,
        reason: String,
    },

    #[error("Invalid action declaration in the \"{view}\" view of \"{scope}\": {reason}")]
    InvalidActionDeclaration {
        scope: String,
        view: String,
        reason: String,
    },

    #[error("Invalid action \"{action}\": {reason}")]
    InvalidAction { action: String, reason: String },

    #[error(
        "The \"sort\" option of the \"{view}\" view of \"{model}\" must be a field name or a [field, direction] pair"
    )]
    InvalidSort { model: String, view: String },

    #[error(
        "The sort direction \"{direction}\" of the \"{view}\" view of \"{model}\" is invalid (allowed: ASC, DESC)"
    )]
    InvalidSortDirection {
        model: String,
        view: String,
        direction: String,
    },

    #[error(
        "The \"{field}\" sort field of the \"{view}\" view of \"{model}\" is too deep; only one level of association is supported"
    )]
    UnsupportedSortDepth {
        model: String,
        view: String,
        field: String,
    },

    #[error("The \"{view}\" view of \"{model}\" cannot be sorted by the virtual field \"{field}\"")]
    VirtualFieldSort {
        model: String,
        view: String,
        field: String,
    },

    #[error(
        "The \"{field}\" sort field of the \"{view}\" view of \"{model}\" does not go through an association"
    )]
    SortPathNotAssociation {
        model: String,
        view: String,
        field: String,
    },

    #[error(
        "The \"{view}\" view of \"{model}\" is sorted by \"{field}\", which is neither a property nor a field of that view"
    )]
    UnknownSortField {
        model: String,
        view: String,
        field: String,
    },

    #[error("The controller \"{controller}\" configured for \"{model}\" does not exist")]
    InvalidControllerReference { model: String, controller: String },

    #[error("The menu references \"{model}\", which is not a managed model (available: {available})")]
    UnknownMenuModel { model: String, available: String },

    #[error(
        "The menu item at position {position} must define at least one of: model, url, route, label"
    )]
    InvalidMenuItem { position: usize },

    #[error("No template exists for \"{slot}\" of {scope} (tried: {candidates})")]
    TemplateResolution {
        slot: String,
        scope: String,
        candidates: String,
    },

    #[error("Undefined model \"{0}\"")]
    UndefinedModel(String),

    #[error("Configuration path \"{0}\" does not exist")]
    PathNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error was raised while validating the configuration,
    /// as opposed to a read-time lookup or an infrastructure failure
    pub fn is_validation_error(&self) -> bool {
        !matches!(
            self,
            Error::UndefinedModel(_)
                | Error::PathNotFound(_)
                | Error::CacheError(_)
                | Error::IoError(_)
                | Error::SerializationError(_)
        )
    }
}

/// Result type alias for backoffice operations
pub type Result<T> = std::result::Result<T, Error>;
