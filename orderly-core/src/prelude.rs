pub use crate::collation::{
    CaseFoldCollator, Collation, LocaleCollator, OrdinalCollator, SharedCollator,
};
pub use crate::error::{Result, SortError};
pub use crate::record::{Record, Step};
pub use crate::sorting::{
    Comparator, ComparatorBuilder, CompareOptions, GetterConfig, PathConfig, SortArg, getter,
};
pub use orderly_model::prelude::*;

#[cfg(feature = "parallel")]
pub use crate::sorting::ParallelSortConfig;
