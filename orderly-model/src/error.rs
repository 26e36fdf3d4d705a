use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A dotted path was empty or contained an empty segment.
    InvalidPath(String),
    /// An order value was not one of `asc`, `desc`, `1` or `-1`.
    InvalidOrder(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidPath(path) => write!(f, "invalid path: {path:?}"),
            ModelError::InvalidOrder(order) => {
                write!(f, "invalid order: {order} (expected asc, desc, 1 or -1)")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
