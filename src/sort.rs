//! Top-down merge sort.
//!
//! The merge step only takes from the left half when its front element is *strictly* smaller,
//! so among equal elements the ones from the right half come out first. That makes this sort
//! unstable for equal keys, unlike [`slice::sort`].
//!
//! # Examples
//!
//! ```
//! use ordtree::{binary_search, merge_sort};
//!
//! let sorted = merge_sort(vec![5, 3, 8, 1]);
//! assert_eq!(sorted, [1, 3, 5, 8]);
//! assert_eq!(binary_search(&sorted, &8), Some(3));
//! ```

use std::cmp::Ordering;

/// Sorts the values in ascending order.
pub fn merge_sort<T>(values: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    merge_sort_by(values, &mut T::cmp)
}

/// Sorts the values with the given comparator. Splits at `len / 2` (so the left half is the
/// smaller one on odd lengths), sorts each half and [merges][merge_by] them.
///
/// # Examples
///
/// ```
/// use ordtree::merge_sort_by;
///
/// let words = vec!["pear", "fig", "apple", "kiwi"];
/// let sorted = merge_sort_by(words, &mut |a: &&str, b: &&str| a.len().cmp(&b.len()));
///
/// // "pear" and "kiwi" tie, and the one from the right half wins.
/// assert_eq!(sorted, ["fig", "kiwi", "pear", "apple"]);
/// ```
pub fn merge_sort_by<T, F>(mut values: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if values.len() < 2 {
        return values;
    }

    let right = values.split_off(values.len() / 2);
    let left = merge_sort_by(values, &mut *compare);
    let right = merge_sort_by(right, &mut *compare);
    merge_by(left, right, compare)
}

/// Merges two ascending sequences into one.
pub fn merge<T>(left: Vec<T>, right: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    merge_by(left, right, &mut T::cmp)
}

/// Merges two sequences that are sorted by `compare`. The front of `left` is taken only when it
/// compares `Less` than the front of `right`. Once either runs out the rest of the other is
/// appended as is.
pub fn merge_by<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    tracing::trace!(left = left.len(), right = right.len(), "merging");

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Less,
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::empty(vec![], vec![])]
    #[case::single(vec![7], vec![7])]
    #[case::small(vec![5, 3, 8, 1], vec![1, 3, 5, 8])]
    #[case::odd_length(vec![9, -2, 4, 4, 0], vec![-2, 0, 4, 4, 9])]
    #[case::already_sorted(vec![1, 2, 3, 4, 5, 6], vec![1, 2, 3, 4, 5, 6])]
    #[case::reversed(vec![6, 5, 4, 3, 2, 1], vec![1, 2, 3, 4, 5, 6])]
    fn sorts(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(merge_sort(input), expected);
    }

    #[test]
    fn merge_appends_leftovers() {
        assert_eq!(merge(vec![1, 4, 9], vec![2, 3]), [1, 2, 3, 4, 9]);
        assert_eq!(merge(vec![], vec![2, 3]), [2, 3]);
        assert_eq!(merge(vec![1], vec![]), [1]);
    }

    #[test]
    fn merge_prefers_right_on_ties() {
        let mut by_key = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);

        let merged = merge_by(vec![(1, 'l'), (2, 'l')], vec![(1, 'r'), (2, 'r')], &mut by_key);
        assert_eq!(merged, [(1, 'r'), (1, 'l'), (2, 'r'), (2, 'l')]);
    }

    #[test]
    fn sort_is_right_biased_for_equal_keys() {
        let mut by_key = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);

        // Split into [(1, 'a')] and [(1, 'b')]; the tie takes the right one first.
        let sorted = merge_sort_by(vec![(1, 'a'), (1, 'b')], &mut by_key);
        assert_eq!(sorted, [(1, 'b'), (1, 'a')]);

        // [(2, 'a')] | [(1, 'b'), (2, 'c')] -> [(1, 'b'), (2, 'c'), (2, 'a')]
        let sorted = merge_sort_by(vec![(2, 'a'), (1, 'b'), (2, 'c')], &mut by_key);
        assert_eq!(sorted, [(1, 'b'), (2, 'c'), (2, 'a')]);
    }

    #[test]
    fn comparator_can_reverse() {
        let sorted = merge_sort_by(vec![5, 3, 8, 1], &mut |a: &i32, b: &i32| b.cmp(a));
        assert_eq!(sorted, [8, 5, 3, 1]);
    }

    quickcheck::quickcheck! {
        fn matches_std_sort(xs: Vec<i16>) -> bool {
            let mut expected = xs.clone();
            expected.sort_unstable();

            merge_sort(xs) == expected
        }
    }
}
