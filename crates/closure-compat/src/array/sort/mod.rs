//! In-place sorting of a caller-owned sequence.
//!
//! The items are copied out, sorted with a stable merge sort and written back
//! through [`ArrayLikeMut::set_item`], so the caller's sequence keeps its
//! identity.

mod insertion;
mod merge;

use std::cmp::Ordering;

use super::infallible;
use crate::array_like::{present_mut, ArrayLikeMut};

/// Sorts `arr` in place by its natural ordering.
///
/// # Examples
///
/// ```
/// use closure_compat::array;
///
/// let mut v = vec![3, 1, 2];
/// array::sort(Some(&mut v));
/// assert_eq!(v, vec![1, 2, 3]);
/// ```
pub fn sort<S>(arr: Option<&mut S>)
where
    S: ArrayLikeMut + ?Sized,
    S::Item: Ord,
{
    sort_by(arr, Ord::cmp);
}

/// Sorts `arr` in place with `compare`. Stable.
///
/// A comparator that is not a total order does not panic; the items end up in
/// some order decided by the comparator's answers.
///
/// # Examples
///
/// ```
/// use closure_compat::array::{self, legacy_order};
///
/// let mut v = vec![2.5, -1.0, 10.0];
/// array::sort_by(Some(&mut v), |a, b| legacy_order(a - b));
/// assert_eq!(v, vec![-1.0, 2.5, 10.0]);
/// ```
pub fn sort_by<S, F>(arr: Option<&mut S>, mut compare: F)
where
    S: ArrayLikeMut + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    infallible(try_sort_by(arr, |a, b| Ok(compare(a, b))));
}

/// [`sort_by`] with a fallible comparator.
///
/// When the comparator fails, `arr` is left exactly as it was.
pub fn try_sort_by<S, F, E>(arr: Option<&mut S>, mut compare: F) -> Result<(), E>
where
    S: ArrayLikeMut + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Result<Ordering, E>,
{
    let Some(arr) = present_mut(arr) else {
        return Ok(());
    };
    let items: Vec<S::Item> = (0..arr.length()).filter_map(|index| arr.item(index)).collect();
    let sorted = merge::try_merge_sort_by(items, &mut compare)?;
    let len = sorted.len();
    for (index, item) in sorted.into_iter().enumerate() {
        arr.set_item(index, item);
    }
    arr.set_length(len);
    Ok(())
}

/// Reads a numeric comparator result: negative, zero or positive.
///
/// `NaN` counts as zero, as it does for legacy comparators.
pub fn legacy_order(indicator: f64) -> Ordering {
    if indicator < 0.0 {
        Ordering::Less
    } else if indicator > 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::SharedArray;

    #[test]
    fn test_sort_natural_order() {
        let mut v = vec!["banana", "apple", "cherry"];
        sort(Some(&mut v));
        assert_eq!(v, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sort_is_visible_through_alias() {
        let shared = SharedArray::from(vec![5, 4, 3, 2, 1]);
        let alias = shared.clone();
        sort(Some(&mut shared.clone()));
        assert_eq!(alias.to_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sort_absent_is_noop() {
        sort(None::<&mut Vec<i32>>);
    }

    #[test]
    fn test_sort_by_descending() {
        let mut v = vec![3, 1, 4, 1, 5];
        sort_by(Some(&mut v), |a, b| b.cmp(a));
        assert_eq!(v, vec![5, 4, 3, 1, 1]);
    }

    #[test]
    fn test_sort_by_broken_comparator_does_not_panic() {
        // `(a, b) => a > b` never reports "less".
        let mut v: Vec<i32> = (0..200).rev().collect();
        sort_by(Some(&mut v), |a, b| legacy_order(f64::from(u8::from(a > b))));
        assert_eq!(v.len(), 200);
        let mut check = v.clone();
        check.sort();
        assert_eq!(check, (0..200).collect::<Vec<_>>());
    }

    #[test]
    fn test_try_sort_by_error_leaves_input() {
        let mut v = vec![2, 1];
        let result = try_sort_by(Some(&mut v), |_, _| Err("cmp failed"));
        assert_eq!(result, Err("cmp failed"));
        assert_eq!(v, vec![2, 1]);
    }

    #[test]
    fn test_legacy_order() {
        assert_eq!(legacy_order(-3.0), Ordering::Less);
        assert_eq!(legacy_order(0.0), Ordering::Equal);
        assert_eq!(legacy_order(0.5), Ordering::Greater);
        assert_eq!(legacy_order(f64::NAN), Ordering::Equal);
    }
}
