//! Normalized comparison rules.

use super::args::{Getter, Transform};
use crate::collation::SharedCollator;
use crate::error::Result;
use crate::record::{Record, resolve_path};
use orderly_model::{Direction, FieldPath, SortValue};
use std::fmt;
use std::sync::Arc;

/// Where a rule reads its operand from.
pub enum ValueSource<T> {
    Path(FieldPath),
    Getter(Getter<T>),
}

impl<T> fmt::Debug for ValueSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSource::Path(path) => f.debug_tuple("Path").field(&path.as_str()).finish(),
            ValueSource::Getter(_) => f.write_str("Getter(..)"),
        }
    }
}

/// One criterion in the ordered rule list of a comparator.
pub struct Rule<T> {
    pub(crate) direction: Direction,
    pub(crate) source: ValueSource<T>,
    pub(crate) collator: SharedCollator,
    pub(crate) defaults: Arc<[SortValue]>,
    pub(crate) transform: Option<Transform>,
}

impl<T> Rule<T> {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn source(&self) -> &ValueSource<T> {
        &self.source
    }

    pub fn collator(&self) -> &SharedCollator {
        &self.collator
    }

    pub fn defaults(&self) -> &[SortValue] {
        &self.defaults
    }

    /// Default to substitute for a missing operand when the other operand is
    /// present with the same kind.
    pub(crate) fn default_for<'a>(&'a self, present: &SortValue) -> Option<&'a SortValue> {
        let kind = present.kind();
        self.defaults.iter().find(|candidate| candidate.kind() == kind)
    }
}

impl<T: Record> Rule<T> {
    /// Read this rule's operand from `record`. Evaluated fresh on every call.
    pub(crate) fn extract(&self, record: &T) -> Result<SortValue> {
        let value = match &self.source {
            ValueSource::Path(path) => resolve_path(record, path)?,
            ValueSource::Getter(get) => get(record),
        };

        Ok(match &self.transform {
            Some(transform) => transform(value),
            None => value,
        })
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("direction", &self.direction)
            .field("source", &self.source)
            .field("collator", &self.collator.name())
            .field("defaults", &self.defaults)
            .field("transform", &self.transform.is_some())
            .finish()
    }
}
