//! Convenience re-exports for callers building records and sort specs.

pub use crate::order::{Direction, Order};
pub use crate::path::{FieldPath, SortPath};
pub use crate::sort_value::{SortValue, ValueKind};
pub use crate::value::Value;
