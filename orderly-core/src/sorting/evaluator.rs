//! Per-rule comparison of two extracted operands.

use super::rule::Rule;
use crate::error::{Result, SortError};
use orderly_model::{Direction, SortValue};
use std::cmp::Ordering;

/// Fail when both operands are present but of different kinds.
pub(crate) fn check_kinds(a: &SortValue, b: &SortValue) -> Result<()> {
    if a.is_missing() || b.is_missing() || a.kind() == b.kind() {
        return Ok(());
    }

    Err(SortError::TypeMismatch {
        left: a.kind(),
        right: b.kind(),
    })
}

/// Compare two operands whose kinds are known to be consistent.
///
/// `Equal` means the rule ties and the next rule decides.
pub(crate) fn order_values<T>(rule: &Rule<T>, a: &SortValue, b: &SortValue) -> Ordering {
    if a.is_identical(b) {
        return Ordering::Equal;
    }

    let (a, b) = substitute_defaults(rule, a, b);
    let dir = rule.direction;

    match (a, b) {
        (SortValue::Missing, _) => dir.after(),
        (_, SortValue::Missing) => dir.before(),
        (SortValue::Number(x), SortValue::Number(y)) => compare_numbers(*x, *y, dir),
        (SortValue::BigInt(x), SortValue::BigInt(y)) => dir.apply(x.cmp(y)),
        (SortValue::Date(x), SortValue::Date(y)) => dir.apply(x.cmp(y)),
        (SortValue::Text(x), SortValue::Text(y)) => dir.apply(rule.collator.compare(x, y)),
        (SortValue::Bool(x), SortValue::Bool(y)) => dir.apply(x.cmp(y)),
        // Mixed kinds are rejected by `check_kinds` before we get here.
        _ => Ordering::Equal,
    }
}

/// Full pairwise evaluation of one rule: kind check, then ordering.
pub(crate) fn compare_values<T>(rule: &Rule<T>, a: &SortValue, b: &SortValue) -> Result<Ordering> {
    check_kinds(a, b)?;
    Ok(order_values(rule, a, b))
}

fn substitute_defaults<'a, T>(
    rule: &'a Rule<T>,
    a: &'a SortValue,
    b: &'a SortValue,
) -> (&'a SortValue, &'a SortValue) {
    match (a.is_missing(), b.is_missing()) {
        (true, false) => (rule.default_for(b).unwrap_or(a), b),
        (false, true) => (a, rule.default_for(a).unwrap_or(b)),
        _ => (a, b),
    }
}

// NaN sorts like a missing value: after everything when ascending.
fn compare_numbers(a: f64, b: f64, dir: Direction) -> Ordering {
    if a.is_nan() {
        return dir.after();
    }
    if b.is_nan() {
        return dir.before();
    }

    match a.partial_cmp(&b) {
        Some(ordering) => dir.apply(ordering),
        None => Ordering::Equal,
    }
}
