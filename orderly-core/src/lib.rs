//! # Orderly Core
//!
//! Builds reusable multi-key comparators from declarative sort arguments.
//!
//! ## Overview
//!
//! A [`Comparator`] is constructed once from an ordered list of arguments and
//! then compares or sorts any number of records:
//!
//! - **Paths**: dotted field paths such as `"author.name"`, with a leading `-`
//!   for descending order, `length` on lists and numeric list indices
//! - **Getters**: closures that compute the operand from a record
//! - **Per-key configs**: explicit direction, locale or collator, defaults and
//!   a transform for one key
//! - **Global options**: a trailing [`CompareOptions`] with the locale,
//!   collator and defaults shared by every key
//!
//! Missing values sort after present ones when ascending and before them when
//! descending. Strings use locale collation with numeric ordering of digit
//! runs. Comparing two present values of different kinds is an error rather
//! than a silent tie.
//!
//! ## Feature Flags
//!
//! - `json`: `serde_json::Value` records and the JSON argument classifier
//! - `parallel`: Rayon-backed [`Comparator::par_sort`]
//!
//! ## Examples
//!
//! ```
//! use orderly_core::{Comparator, CompareOptions, PathConfig, SortArg};
//! use orderly_core::model::Value;
//!
//! # fn main() -> orderly_core::Result<()> {
//! let mut books = vec![
//!     Value::map([("title", Value::from("Dune")), ("year", Value::from(1965))]),
//!     Value::map([("title", Value::from("Emma")), ("year", Value::from(1815))]),
//!     Value::map([("title", Value::from("Ulysses"))]),
//! ];
//!
//! let comparator = Comparator::<Value>::new([
//!     SortArg::from(PathConfig::new("year").default_value(1900)),
//!     SortArg::from("-title"),
//!     CompareOptions::new().with_locale("en").into(),
//! ])?;
//! comparator.sort(&mut books)?;
//!
//! assert_eq!(books[0].get("title"), Some(&Value::from("Emma")));
//! assert_eq!(books[1].get("title"), Some(&Value::from("Ulysses")));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub use orderly_model as model;

/// Pluggable string collation
pub mod collation;

/// Error types for construction and comparison
pub mod error;

/// Path traversal over record data
pub mod record;

/// Comparator construction, evaluation and sorting
pub mod sorting;

pub mod prelude;

pub use collation::{Collation, LocaleCollator, SharedCollator};
pub use error::{Result, SortError};
pub use record::{Record, resolve_path};
pub use sorting::{
    Comparator, ComparatorBuilder, CompareOptions, GetterConfig, PathConfig, SortArg, getter,
};

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub use sorting::ParallelSortConfig;
