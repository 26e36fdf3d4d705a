//! Parallel sorting for large datasets
//!
//! Uses Rayon to extract sort keys and sort the index permutation when the
//! dataset reaches a configurable threshold; smaller inputs take the
//! sequential path.

use super::comparator::Comparator;
use super::utils::apply_permutation;
use crate::error::Result;
use crate::record::Record;
use rayon::prelude::*;
use tracing::debug;

/// Configuration for parallel sorting
#[derive(Debug, Clone)]
pub struct ParallelSortConfig {
    /// Minimum number of items before work is spread across threads
    pub threshold: usize,
}

impl Default for ParallelSortConfig {
    fn default() -> Self {
        Self { threshold: 10_000 }
    }
}

impl ParallelSortConfig {
    pub fn with_threshold(threshold: usize) -> Self {
        Self { threshold }
    }
}

impl<T: Record + Send + Sync> Comparator<T> {
    /// Parallel stable sort with the default threshold.
    pub fn par_sort(&self, items: &mut [T]) -> Result<()> {
        self.par_sort_with(items, &ParallelSortConfig::default())
    }

    /// Parallel stable sort; same contract as [`Comparator::sort`].
    pub fn par_sort_with(&self, items: &mut [T], config: &ParallelSortConfig) -> Result<()> {
        if items.len() < config.threshold {
            return self.sort(items);
        }

        debug!(
            items = items.len(),
            rules = self.rules().len(),
            threshold = config.threshold,
            "sorting records in parallel"
        );

        let records = &*items;
        let keys = self.sort_keys(records.len(), |rule, rows| {
            rows.par_iter().map(|&row| rule.extract(&records[row])).collect()
        })?;

        let mut order: Vec<usize> = (0..items.len()).collect();
        order.par_sort_by(|&i, &j| self.order_keys(&keys[i], &keys[j]));
        apply_permutation(items, order);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderly_model::Value;

    fn numbered(count: usize) -> Vec<Value> {
        // Reverse order with a shared group so the secondary key matters.
        (0..count)
            .rev()
            .map(|n| {
                Value::map([
                    ("group", Value::from((n % 3) as i64)),
                    ("n", Value::from(n as i64)),
                ])
            })
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let comparator = Comparator::<Value>::new(["group", "-n"]).unwrap();
        let mut sequential = numbered(500);
        let mut parallel = sequential.clone();

        comparator.sort(&mut sequential).unwrap();
        comparator
            .par_sort_with(&mut parallel, &ParallelSortConfig::with_threshold(1))
            .unwrap();

        assert_eq!(sequential, parallel);
        assert!(comparator.is_sorted(&parallel).unwrap());
    }

    #[test]
    fn test_parallel_surfaces_type_mismatch() {
        let comparator = Comparator::<Value>::new(["n"]).unwrap();
        let mut items = numbered(10);
        items.push(Value::map([("n", Value::from("ten"))]));
        let before = items.clone();

        let result = comparator.par_sort_with(&mut items, &ParallelSortConfig::with_threshold(1));

        assert!(result.is_err());
        assert_eq!(items, before, "failed sorts leave the slice untouched");
    }

    #[test]
    fn test_parallel_only_checks_tied_records() {
        let comparator = Comparator::<Value>::new(["group", "n"]).unwrap();
        let mut items = numbered(30);
        // Alone in its group, so `n` is never compared against a number.
        items.push(Value::map([("group", Value::from(7)), ("n", Value::from("seven"))]));

        comparator
            .par_sort_with(&mut items, &ParallelSortConfig::with_threshold(1))
            .unwrap();

        assert!(comparator.is_sorted(&items).unwrap());
        assert_eq!(items.last().and_then(|item| item.get("n")), Some(&Value::from("seven")));
    }
}
