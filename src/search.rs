//! Binary search over an ascending slice.

use std::cmp::Ordering;

/// Returns the index of `target` in the ascending slice `sorted`, or `None` if it isn't there.
///
/// The bounds are inclusive and each probe is at `(low + high) / 2`. When `target` appears more
/// than once, the index returned is whichever copy the probes hit first, not necessarily the
/// first occurrence.
///
/// # Examples
///
/// ```
/// use ordtree::binary_search;
///
/// let sorted = [1, 3, 5, 8];
///
/// assert_eq!(binary_search(&sorted, &8), Some(3));
/// assert_eq!(binary_search(&sorted, &4), None);
/// ```
pub fn binary_search<T>(sorted: &[T], target: &T) -> Option<usize>
where
    T: Ord,
{
    let mut low = 0;
    let mut high = sorted.len().checked_sub(1)?;

    while low <= high {
        let mid = (low + high) / 2;
        match sorted[mid].cmp(target) {
            Ordering::Less => low = mid + 1,
            Ordering::Equal => return Some(mid),
            // Stepping below index 0 means every element is larger than `target`.
            Ordering::Greater => high = mid.checked_sub(1)?,
        }
    }

    tracing::debug!(len = sorted.len(), "binary search missed");
    None
}
