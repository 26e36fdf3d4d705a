//! Dotted property paths.
//!
//! A path such as `positions.0.years` addresses a value nested inside a record.
//! Segments are field names or decimal list indices; a final `length` segment on
//! a list addresses the list's length.

use crate::error::{ModelError, Result};
use crate::order::Direction;
use std::fmt;
use std::str::FromStr;

/// Segment that addresses the length of a list.
pub const LENGTH_SEGMENT: &str = "length";

/// Validated, non-empty sequence of path segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path. Rejects empty paths and empty segments.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(ModelError::InvalidPath(raw.to_string()));
        }

        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(ModelError::InvalidPath(raw.to_string()));
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for FieldPath {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        FieldPath::parse(s)
    }
}

/// A path string with its optional `-` prefix resolved into a direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortPath {
    pub path: FieldPath,
    pub direction: Direction,
}

impl SortPath {
    /// Parse `path` or `-path`. Exactly one leading dash is stripped.
    pub fn parse(raw: &str) -> Result<Self> {
        let (direction, rest) = match raw.strip_prefix('-') {
            Some(rest) => (Direction::Descending, rest),
            None => (Direction::Ascending, raw),
        };

        Ok(Self {
            path: FieldPath::parse(rest)?,
            direction,
        })
    }
}

impl FromStr for SortPath {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        SortPath::parse(s)
    }
}
