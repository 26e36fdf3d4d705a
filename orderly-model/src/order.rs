//! Sort direction and the explicit `order` field of sort configs.

use crate::error::{ModelError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Direction a single rule sorts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Signed multiplier of this direction (`1` or `-1`).
    pub fn sign(self) -> i32 {
        match self {
            Direction::Ascending => 1,
            Direction::Descending => -1,
        }
    }

    /// Scale an ascending comparison result by this direction.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }

    /// Result returned when the left operand ranks after the right one.
    #[inline]
    pub fn after(self) -> Ordering {
        self.apply(Ordering::Greater)
    }

    /// Result returned when the left operand ranks before the right one.
    #[inline]
    pub fn before(self) -> Ordering {
        self.apply(Ordering::Less)
    }

    pub fn is_descending(self) -> bool {
        self == Direction::Descending
    }
}

impl From<Order> for Direction {
    fn from(order: Order) -> Self {
        match order {
            Order::Asc => Direction::Ascending,
            Order::Desc => Direction::Descending,
        }
    }
}

/// Explicit order requested by a path or getter config.
///
/// Accepts the textual forms `asc`/`desc` and the numeric forms `1`/`-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "repr::OrderRepr", into = "String")
)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" | "1" => Ok(Order::Asc),
            "desc" | "-1" => Ok(Order::Desc),
            other => Err(ModelError::InvalidOrder(other.to_string())),
        }
    }
}

impl TryFrom<i64> for Order {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            1 => Ok(Order::Asc),
            -1 => Ok(Order::Desc),
            other => Err(ModelError::InvalidOrder(other.to_string())),
        }
    }
}

impl From<Order> for String {
    fn from(order: Order) -> Self {
        order.as_str().to_string()
    }
}

#[cfg(feature = "serde")]
mod repr {
    use super::Order;
    use crate::error::ModelError;

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    pub enum OrderRepr {
        Int(i64),
        Text(String),
    }

    impl TryFrom<OrderRepr> for Order {
        type Error = ModelError;

        fn try_from(repr: OrderRepr) -> Result<Self, Self::Error> {
            match repr {
                OrderRepr::Int(value) => Order::try_from(value),
                OrderRepr::Text(text) => text.parse(),
            }
        }
    }
}
