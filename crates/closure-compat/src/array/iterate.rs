//! Callback-driven iteration: `filter`, `map`, `find`, `forEach`.
//!
//! All four read the length once and then fetch each element through the live
//! sequence. Elements appended by a callback are not visited. The callback is
//! never called for a hole; `map` still keeps the hole's slot in its output.

use std::any::Any;

use super::infallible;
use crate::array_like::{present, ArrayLike};
use crate::receiver::Receiver;

/// Items for which `f` returns true, in their original order.
///
/// Absent input yields an empty `Vec` without calling `f`.
///
/// # Examples
///
/// ```
/// use closure_compat::array;
///
/// let odd = array::filter(Some(&vec![1, 2, 3, 4, 5]), |_, n, _, _| n % 2 == 1, None);
/// assert_eq!(odd, vec![1, 3, 5]);
///
/// let none: Option<&Vec<i32>> = None;
/// assert!(array::filter(none, |_, _, _, _| true, None).is_empty());
/// ```
pub fn filter<'a, S, F>(arr: Option<&S>, mut f: F, opt_obj: Option<&'a dyn Any>) -> Vec<S::Item>
where
    S: ArrayLike + ?Sized,
    F: FnMut(Receiver<'a>, &S::Item, usize, &S) -> bool,
{
    infallible(try_filter(
        arr,
        |this, item, index, seq| Ok(f(this, item, index, seq)),
        opt_obj,
    ))
}

/// [`filter`] with a fallible predicate; the first error is returned as-is.
pub fn try_filter<'a, S, F, E>(
    arr: Option<&S>,
    mut f: F,
    opt_obj: Option<&'a dyn Any>,
) -> Result<Vec<S::Item>, E>
where
    S: ArrayLike + ?Sized,
    F: FnMut(Receiver<'a>, &S::Item, usize, &S) -> Result<bool, E>,
{
    let mut out = Vec::new();
    let Some(arr) = present(arr) else {
        return Ok(out);
    };
    let this = Receiver::new(opt_obj);
    let len = arr.length();
    for index in 0..len {
        let Some(item) = arr.item(index) else {
            continue;
        };
        if f(this, &item, index, arr)? {
            out.push(item);
        }
    }
    Ok(out)
}

/// `f` applied to every item, in order.
///
/// The output is exactly as long as the input. A hole is not passed to `f`;
/// its slot comes out as `R::default()`, which stands in for `undefined`
/// (`Value::Null`, `None`, `Nullable::Undefined`).
///
/// # Examples
///
/// ```
/// use closure_compat::array;
///
/// let names = vec!["ada", "bob"];
/// let lengths = array::map(Some(&names), |_, n, i, _| (i, n.len()), None);
/// assert_eq!(lengths, vec![(0, 3), (1, 3)]);
/// ```
pub fn map<'a, S, F, R>(arr: Option<&S>, mut f: F, opt_obj: Option<&'a dyn Any>) -> Vec<R>
where
    S: ArrayLike + ?Sized,
    F: FnMut(Receiver<'a>, &S::Item, usize, &S) -> R,
    R: Default,
{
    infallible(try_map(
        arr,
        |this, item, index, seq| Ok(f(this, item, index, seq)),
        opt_obj,
    ))
}

pub fn try_map<'a, S, F, R, E>(
    arr: Option<&S>,
    mut f: F,
    opt_obj: Option<&'a dyn Any>,
) -> Result<Vec<R>, E>
where
    S: ArrayLike + ?Sized,
    F: FnMut(Receiver<'a>, &S::Item, usize, &S) -> Result<R, E>,
    R: Default,
{
    let Some(arr) = present(arr) else {
        return Ok(Vec::new());
    };
    let this = Receiver::new(opt_obj);
    let len = arr.length();
    let mut out = Vec::with_capacity(len);
    for index in 0..len {
        let slot = match arr.item(index) {
            Some(item) => f(this, &item, index, arr)?,
            None => R::default(),
        };
        out.push(slot);
    }
    Ok(out)
}

/// The first item for which `f` returns true.
///
/// `None` is the not-found result; a found item is always `Some`, even when it
/// is `0`, `false` or an empty string.
///
/// # Examples
///
/// ```
/// use closure_compat::array;
///
/// let flags = vec![true, false];
/// assert_eq!(array::find(Some(&flags), |_, f, _, _| !*f, None), Some(false));
/// assert_eq!(array::find(Some(&flags), |_, _, i, _| i > 5, None), None);
/// ```
pub fn find<'a, S, F>(arr: Option<&S>, mut f: F, opt_obj: Option<&'a dyn Any>) -> Option<S::Item>
where
    S: ArrayLike + ?Sized,
    F: FnMut(Receiver<'a>, &S::Item, usize, &S) -> bool,
{
    infallible(try_find(
        arr,
        |this, item, index, seq| Ok(f(this, item, index, seq)),
        opt_obj,
    ))
}

pub fn try_find<'a, S, F, E>(
    arr: Option<&S>,
    mut f: F,
    opt_obj: Option<&'a dyn Any>,
) -> Result<Option<S::Item>, E>
where
    S: ArrayLike + ?Sized,
    F: FnMut(Receiver<'a>, &S::Item, usize, &S) -> Result<bool, E>,
{
    let Some(arr) = present(arr) else {
        return Ok(None);
    };
    let this = Receiver::new(opt_obj);
    let len = arr.length();
    for index in 0..len {
        let Some(item) = arr.item(index) else {
            continue;
        };
        if f(this, &item, index, arr)? {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

/// Calls `f` for every item.
///
/// The callback may mutate the sequence it is handed (a
/// [`SharedArray`](crate::SharedArray) allows it). Such mutation is observed
/// exactly as the legacy helper observed it: appended items are not visited,
/// removed trailing items are skipped, and items shifted into an already
/// visited index are missed.
///
/// # Examples
///
/// ```
/// use closure_compat::{array, SharedArray};
///
/// let items = SharedArray::from(vec![1, 2, 3]);
/// let mut sum = 0;
/// array::for_each(
///     Some(&items),
///     |_, n, _, seq| {
///         sum += n;
///         seq.push(n * 2);
///     },
///     None,
/// );
/// assert_eq!(sum, 6);
/// assert_eq!(items.to_vec(), vec![1, 2, 3, 2, 4, 6]);
/// ```
pub fn for_each<'a, S, F>(arr: Option<&S>, mut f: F, opt_obj: Option<&'a dyn Any>)
where
    S: ArrayLike + ?Sized,
    F: FnMut(Receiver<'a>, &S::Item, usize, &S),
{
    infallible(try_for_each(
        arr,
        |this, item, index, seq| {
            f(this, item, index, seq);
            Ok(())
        },
        opt_obj,
    ))
}

pub fn try_for_each<'a, S, F, E>(
    arr: Option<&S>,
    mut f: F,
    opt_obj: Option<&'a dyn Any>,
) -> Result<(), E>
where
    S: ArrayLike + ?Sized,
    F: FnMut(Receiver<'a>, &S::Item, usize, &S) -> Result<(), E>,
{
    let Some(arr) = present(arr) else {
        return Ok(());
    };
    let this = Receiver::new(opt_obj);
    let len = arr.length();
    for index in 0..len {
        if let Some(item) = arr.item(index) {
            f(this, &item, index, arr)?;
        }
    }
    Ok(())
}
