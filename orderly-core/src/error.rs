use orderly_model::{ModelError, ValueKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortError {
    #[error("Invalid path: {path} (cannot index into a non-structured value)")]
    PathResolution { path: String },

    #[error("Cannot compare {left} and {right}")]
    TypeMismatch { left: ValueKind, right: ValueKind },

    #[error("Path {path} addresses a list or map, which cannot be compared")]
    UnsortableValue { path: String },

    #[error("Invalid sort spec: {0}")]
    InvalidSpec(#[from] ModelError),

    #[error("Invalid locale {locale:?}: {reason}")]
    InvalidLocale { locale: String, reason: String },

    #[error("Unrecognized sort argument: {0}")]
    UnrecognizedArgument(String),

    #[cfg(feature = "json")]
    #[error("Malformed sort arguments: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SortError>;
