//! Multi-key comparator construction and evaluation
//!
//! This module provides:
//! - Construction arguments (paths, getters, per-key configs, global options)
//! - Normalization of arguments into an ordered rule list
//! - Pairwise comparison with missing values last (first when descending) and defaults
//! - Stable sequential and parallel sorting that extracts keys once

pub mod args;
#[cfg(feature = "json")]
mod classify;
pub mod comparator;
mod evaluator;
#[cfg(feature = "parallel")]
pub mod parallel;
mod parser;
pub mod rule;
pub mod utils;


pub use args::{CompareOptions, Getter, GetterConfig, PathConfig, SortArg, Transform, getter};
pub use comparator::{Comparator, ComparatorBuilder};
#[cfg(feature = "parallel")]
pub use parallel::ParallelSortConfig;
pub use rule::{Rule, ValueSource};
pub use utils::apply_permutation;
