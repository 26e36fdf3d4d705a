//! Core data model definitions shared across orderly crates.
#![allow(missing_docs)]

pub use ::chrono;
pub use ::num_bigint;

pub mod error;
pub mod order;
pub mod path;
pub mod prelude;
pub mod sort_value;
pub mod value;

pub use error::{ModelError, Result as ModelResult};
pub use order::{Direction, Order};
pub use path::{FieldPath, LENGTH_SEGMENT, SortPath};
pub use sort_value::{SortValue, ValueKind};
pub use value::Value;
