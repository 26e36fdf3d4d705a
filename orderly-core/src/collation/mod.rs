//! String collation capability used for text operands.
//!
//! A collator is resolved once per comparator construction and shared by all
//! the rules that do not carry their own, so implementations must be
//! immutable after construction.

mod fold;
mod locale;

pub use fold::CaseFoldCollator;
pub use locale::{DEFAULT_LOCALE, LocaleCollator};

use std::borrow::Cow;
use std::cmp::Ordering;
use std::sync::Arc;

/// Orders two text values.
pub trait Collation: Send + Sync {
    fn compare(&self, left: &str, right: &str) -> Ordering;

    /// Identity used in log output.
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("custom")
    }
}

impl<F> Collation for F
where
    F: Fn(&str, &str) -> Ordering + Send + Sync,
{
    fn compare(&self, left: &str, right: &str) -> Ordering {
        self(left, right)
    }
}

/// Collator shared between rules and threads.
pub type SharedCollator = Arc<dyn Collation>;

/// Wrap a collator for sharing.
pub fn shared(collation: impl Collation + 'static) -> SharedCollator {
    Arc::new(collation)
}

/// Plain code point ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalCollator;

impl Collation for OrdinalCollator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        left.cmp(right)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("ordinal")
    }
}
