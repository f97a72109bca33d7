//! Comparator-driven in-place exchange sort.

use core::cmp::Ordering;

/// Reorders `items` in place under a three-way comparator using an
/// O(n²) adjacent-exchange pass (bubble sort): elements swap exactly
/// when `compare` says the left one is `Greater`. Afterward every
/// adjacent pair satisfies `compare(a[i], a[i + 1]) != Greater`.
///
/// Slices of length 0 or 1 perform no exchanges and no comparisons.
/// Stability is not part of the contract. No allocation; cannot fail.
pub fn sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let count = items.len();
    for pass in 0..count.saturating_sub(1) {
        for j in 0..count - pass - 1 {
            if compare(&items[j], &items[j + 1]) == Ordering::Greater {
                items.swap(j, j + 1);
            }
        }
    }
}

/// `sort_by` under the type's own ordering.
pub fn sort<T: Ord>(items: &mut [T]) {
    sort_by(items, T::cmp);
}
