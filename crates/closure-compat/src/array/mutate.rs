//! Helpers that write into the caller's sequence.
//!
//! The sequence is always mutated through the reference the caller passed;
//! nothing is replaced by a new object, so every alias of a
//! [`SharedArray`](crate::SharedArray) sees the result.

use std::collections::HashSet;
use std::hash::Hash;

use super::infallible;
use crate::array_like::{present_mut, read, ArrayLikeMut};
use crate::strict_eq::SameValueZero;

/// Compacts `arr` in place to the first occurrence of every item.
///
/// Items are compared the way a legacy `Set` compares them
/// ([`SameValueZero`]). A hole counts as the sequence's `undefined`. When
/// `opt_rv` is given it is also filled with the kept items, replacing its
/// contents.
///
/// # Examples
///
/// ```
/// use closure_compat::array;
///
/// let mut ids = vec![3, 1, 3, 2, 1];
/// array::remove_duplicates(Some(&mut ids), None);
/// assert_eq!(ids, vec![3, 1, 2]);
/// ```
pub fn remove_duplicates<S>(arr: Option<&mut S>, opt_rv: Option<&mut Vec<S::Item>>)
where
    S: ArrayLikeMut + ?Sized,
    S::Item: SameValueZero,
{
    remove_duplicates_by(arr, opt_rv, |item| item.same_value_zero_key());
}

/// [`remove_duplicates`] keyed by `hash_fn(item)` instead of the item.
pub fn remove_duplicates_by<S, K, H>(
    arr: Option<&mut S>,
    opt_rv: Option<&mut Vec<S::Item>>,
    mut hash_fn: H,
) where
    S: ArrayLikeMut + ?Sized,
    K: Hash + Eq,
    H: FnMut(&S::Item) -> K,
{
    infallible(try_remove_duplicates_by(arr, opt_rv, |item| Ok(hash_fn(item))));
}

/// [`remove_duplicates_by`] with a fallible key function.
///
/// On error `opt_rv` is untouched, but `arr` may already have a compacted
/// prefix.
pub fn try_remove_duplicates_by<S, K, H, E>(
    arr: Option<&mut S>,
    opt_rv: Option<&mut Vec<S::Item>>,
    mut hash_fn: H,
) -> Result<(), E>
where
    S: ArrayLikeMut + ?Sized,
    K: Hash + Eq,
    H: FnMut(&S::Item) -> Result<K, E>,
{
    let Some(arr) = present_mut(arr) else {
        return Ok(());
    };
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    let mut write = 0;
    let mut index = 0;
    while index < arr.length() {
        if let Some(item) = read(arr, index) {
            if seen.insert(hash_fn(&item)?) {
                if opt_rv.is_some() {
                    kept.push(item.clone());
                }
                arr.set_item(write, item);
                write += 1;
            }
        }
        index += 1;
    }
    arr.set_length(write);
    if let Some(rv) = opt_rv {
        rv.clear();
        rv.extend(kept);
    }
    Ok(())
}

/// Removes the item at `index`, shifting the rest left.
///
/// `index` follows splice rules: a negative index counts back from the end
/// and clamps at zero. Returns true iff an item was removed.
///
/// # Examples
///
/// ```
/// use closure_compat::array;
///
/// let mut v = vec!['a', 'b', 'c'];
/// assert!(array::remove_at(Some(&mut v), 1));
/// assert!(!array::remove_at(Some(&mut v), 5));
/// assert!(array::remove_at(Some(&mut v), -1));
/// assert_eq!(v, vec!['a']);
/// ```
pub fn remove_at<S: ArrayLikeMut + ?Sized>(arr: Option<&mut S>, index: isize) -> bool {
    let Some(arr) = present_mut(arr) else {
        return false;
    };
    let len = arr.length();
    let start = if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs()
    };
    start < len && arr.remove_item(start).is_some()
}
