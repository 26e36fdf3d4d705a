//! Comparison operands.
//!
//! Every value extracted from a record is tagged with one kind from a closed
//! set before comparison, so that kind checks are a tag comparison instead of a
//! chain of runtime type checks.

use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use std::fmt;

/// A value extracted from a record, ready to be compared.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SortValue {
    /// Absent field or explicit null.
    #[default]
    Missing,
    Number(f64),
    BigInt(BigInt),
    Date(DateTime<Utc>),
    Text(String),
    Bool(bool),
}

/// Kind tag of a [`SortValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Missing,
    Number,
    BigInt,
    Date,
    Text,
    Bool,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Missing => "missing",
            ValueKind::Number => "number",
            ValueKind::BigInt => "bigint",
            ValueKind::Date => "date",
            ValueKind::Text => "string",
            ValueKind::Bool => "boolean",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl SortValue {
    pub fn missing() -> Self {
        SortValue::Missing
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, SortValue::Missing)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            SortValue::Missing => ValueKind::Missing,
            SortValue::Number(_) => ValueKind::Number,
            SortValue::BigInt(_) => ValueKind::BigInt,
            SortValue::Date(_) => ValueKind::Date,
            SortValue::Text(_) => ValueKind::Text,
            SortValue::Bool(_) => ValueKind::Bool,
        }
    }

    /// Strict identity of two operands.
    ///
    /// Two NaNs are identical, while `0.0` and `-0.0` are not.
    pub fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (SortValue::Missing, SortValue::Missing) => true,
            (SortValue::Number(a), SortValue::Number(b)) => {
                (a.is_nan() && b.is_nan())
                    || (a == b && a.is_sign_negative() == b.is_sign_negative())
            }
            (SortValue::BigInt(a), SortValue::BigInt(b)) => a == b,
            (SortValue::Date(a), SortValue::Date(b)) => a == b,
            (SortValue::Text(a), SortValue::Text(b)) => a == b,
            (SortValue::Bool(a), SortValue::Bool(b)) => a == b,
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SortValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            SortValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        SortValue::Bool(value)
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

impl From<f32> for SortValue {
    fn from(value: f32) -> Self {
        SortValue::Number(f64::from(value))
    }
}

macro_rules! number_from_lossless {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SortValue {
                fn from(value: $ty) -> Self {
                    SortValue::Number(f64::from(value))
                }
            }
        )*
    };
}

number_from_lossless!(i8, i16, i32, u8, u16, u32);

// Wide integers keep their exact value as a big integer rather than rounding
// through f64.
macro_rules! bigint_from_wide {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SortValue {
                fn from(value: $ty) -> Self {
                    SortValue::BigInt(BigInt::from(value))
                }
            }
        )*
    };
}

bigint_from_wide!(i128, u128);

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<u64> for SortValue {
    fn from(value: u64) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<usize> for SortValue {
    fn from(value: usize) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<BigInt> for SortValue {
    fn from(value: BigInt) -> Self {
        SortValue::BigInt(value)
    }
}

impl From<DateTime<Utc>> for SortValue {
    fn from(value: DateTime<Utc>) -> Self {
        SortValue::Date(value)
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

impl From<&String> for SortValue {
    fn from(value: &String) -> Self {
        SortValue::Text(value.clone())
    }
}

impl<V: Into<SortValue>> From<Option<V>> for SortValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(SortValue::Missing, Into::into)
    }
}
