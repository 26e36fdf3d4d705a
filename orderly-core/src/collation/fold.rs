use super::Collation;
use std::borrow::Cow;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Case-insensitive ordering of lower-cased, NFD-decomposed text.
///
/// Decomposition puts combining marks after their base letter, so `o` sorts
/// before `ô` and `ô` before `p`. No locale tailoring is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseFoldCollator;

impl Collation for CaseFoldCollator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        let left = left.to_lowercase();
        let right = right.to_lowercase();
        left.nfd().cmp(right.nfd())
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("case-fold")
    }
}
