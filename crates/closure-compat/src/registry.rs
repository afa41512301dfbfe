//! Publication of the API under the well-known name `goog`.
//!
//! Legacy call sites never import the helpers; they reach for a global. Here
//! that global is published by one explicit [`register`] call at startup and
//! looked up with [`global`] or [`lookup`]. Registration is idempotent and the
//! surface lives for the rest of the process.

use std::any::Any;
use std::cmp::Ordering;
use std::hash::Hash;
use std::sync::OnceLock;

use crate::array::{self, Spread};
use crate::array_like::{ArrayLike, ArrayLikeMut};
use crate::error::RegistryError;
use crate::nullness::{self, Nullish};
use crate::receiver::Receiver;
use crate::strict_eq::{SameValueZero, StrictEq};

/// The name legacy call sites know the API by.
pub const GLOBAL_NAME: &str = "goog";

static GLOBAL: OnceLock<Goog> = OnceLock::new();

/// The published API surface: `goog.array.*` and the nullness checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Goog {
    pub array: GoogArray,
}

impl Goog {
    pub fn is_def<V: Nullish + ?Sized>(&self, val: &V) -> bool {
        nullness::is_def(val)
    }

    pub fn is_null<V: Nullish + ?Sized>(&self, val: &V) -> bool {
        nullness::is_null(val)
    }

    pub fn is_def_and_not_null<V: Nullish + ?Sized>(&self, val: &V) -> bool {
        nullness::is_def_and_not_null(val)
    }
}

/// `goog.array`. Each method forwards to the function of the same name in
/// [`crate::array`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoogArray;

impl GoogArray {
    pub fn filter<'a, S, F>(
        &self,
        arr: Option<&S>,
        f: F,
        opt_obj: Option<&'a dyn Any>,
    ) -> Vec<S::Item>
    where
        S: ArrayLike + ?Sized,
        F: FnMut(Receiver<'a>, &S::Item, usize, &S) -> bool,
    {
        array::filter(arr, f, opt_obj)
    }

    pub fn map<'a, S, F, R>(&self, arr: Option<&S>, f: F, opt_obj: Option<&'a dyn Any>) -> Vec<R>
    where
        S: ArrayLike + ?Sized,
        F: FnMut(Receiver<'a>, &S::Item, usize, &S) -> R,
        R: Default,
    {
        array::map(arr, f, opt_obj)
    }

    pub fn find<'a, S, F>(
        &self,
        arr: Option<&S>,
        f: F,
        opt_obj: Option<&'a dyn Any>,
    ) -> Option<S::Item>
    where
        S: ArrayLike + ?Sized,
        F: FnMut(Receiver<'a>, &S::Item, usize, &S) -> bool,
    {
        array::find(arr, f, opt_obj)
    }

    pub fn contains<S>(&self, arr: Option<&S>, obj: &S::Item) -> bool
    where
        S: ArrayLike + ?Sized,
        S::Item: StrictEq,
    {
        array::contains(arr, obj)
    }

    pub fn remove_duplicates<S>(&self, arr: Option<&mut S>, opt_rv: Option<&mut Vec<S::Item>>)
    where
        S: ArrayLikeMut + ?Sized,
        S::Item: SameValueZero,
    {
        array::remove_duplicates(arr, opt_rv)
    }

    pub fn remove_duplicates_by<S, K, H>(
        &self,
        arr: Option<&mut S>,
        opt_rv: Option<&mut Vec<S::Item>>,
        hash_fn: H,
    ) where
        S: ArrayLikeMut + ?Sized,
        K: Hash + Eq,
        H: FnMut(&S::Item) -> K,
    {
        array::remove_duplicates_by(arr, opt_rv, hash_fn)
    }

    pub fn clone<S: ArrayLike + ?Sized>(&self, arr: Option<&S>) -> Vec<S::Item> {
        array::clone(arr)
    }

    pub fn sort<S>(&self, arr: Option<&mut S>)
    where
        S: ArrayLikeMut + ?Sized,
        S::Item: Ord,
    {
        array::sort(arr)
    }

    pub fn sort_by<S, F>(&self, arr: Option<&mut S>, compare: F)
    where
        S: ArrayLikeMut + ?Sized,
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        array::sort_by(arr, compare)
    }

    pub fn flatten<S>(&self, arr: Option<&S>) -> Vec<S::Item>
    where
        S: ArrayLike + ?Sized,
        S::Item: Spread,
    {
        array::flatten(arr)
    }

    pub fn is_empty<S: ArrayLike + ?Sized>(&self, arr: Option<&S>) -> bool {
        array::is_empty(arr)
    }

    pub fn for_each<'a, S, F>(&self, arr: Option<&S>, f: F, opt_obj: Option<&'a dyn Any>)
    where
        S: ArrayLike + ?Sized,
        F: FnMut(Receiver<'a>, &S::Item, usize, &S),
    {
        array::for_each(arr, f, opt_obj)
    }

    pub fn remove_at<S: ArrayLikeMut + ?Sized>(&self, arr: Option<&mut S>, index: isize) -> bool {
        array::remove_at(arr, index)
    }
}

/// Publishes the API under [`GLOBAL_NAME`] and returns it.
///
/// Safe to call any number of times; every call returns the same surface.
///
/// # Examples
///
/// ```
/// use closure_compat::{registry, Nullable};
///
/// let goog = registry::register();
/// assert!(std::ptr::eq(goog, registry::register()));
/// assert!(goog.is_def(&Nullable::<i32>::Null));
/// ```
pub fn register() -> &'static Goog {
    let mut published = false;
    let goog = GLOBAL.get_or_init(|| {
        published = true;
        Goog::default()
    });
    if published {
        tracing::debug!(name = GLOBAL_NAME, "published legacy array API");
    }
    goog
}

/// The published surface.
pub fn global() -> Result<&'static Goog, RegistryError> {
    GLOBAL
        .get()
        .ok_or_else(|| RegistryError::NotRegistered(GLOBAL_NAME.to_string()))
}

/// The surface published under `name`.
pub fn lookup(name: &str) -> Result<&'static Goog, RegistryError> {
    if name != GLOBAL_NAME {
        return Err(RegistryError::UnknownName(name.to_string()));
    }
    global()
}
