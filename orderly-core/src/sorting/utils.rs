//! Utility functions for sorting operations
//!
//! Helpers shared by the sequential and parallel sort paths.

/// Reorder items in-place based on the given permutation
///
/// `order[k]` is the index of the element that should end up at position
/// `k`. Elements are moved by swapping along each permutation cycle, so no
/// `Clone` bound is needed.
pub fn apply_permutation<T>(items: &mut [T], mut order: Vec<usize>) {
    debug_assert_eq!(
        items.len(),
        order.len(),
        "Permutation length must match items length"
    );

    for start in 0..items.len() {
        if order[start] == start {
            continue;
        }

        let mut current = start;
        loop {
            let source = order[current];
            debug_assert!(source < items.len(), "Index out of bounds");
            order[current] = current;
            if source == start {
                break;
            }
            items.swap(current, source);
            current = source;
        }
    }
}
