//! The "indexable, has length" capability every operation is written against.
//!
//! Legacy callers hand the array helpers real arrays, node lists, `arguments`
//! objects and plain objects with a `length` property. All of them are reduced
//! to [`ArrayLike`]: a length that is read once, and an element accessor that
//! is consulted again on every step.

use std::collections::VecDeque;

/// Read access to an array-like sequence.
///
/// `item` returns an owned copy so no borrow of the sequence outlives a single
/// read. A callback is therefore free to mutate the sequence (through a
/// [`SharedArray`](crate::SharedArray) handle) between two reads.
///
/// # Examples
///
/// ```
/// use closure_compat::ArrayLike;
///
/// let v = vec!['a', 'b'];
/// assert_eq!(v.length(), 2);
/// assert_eq!(v.item(1), Some('b'));
/// assert_eq!(v.item(2), None);
/// ```
pub trait ArrayLike {
    type Item: Clone;

    /// Number of index slots, holes included.
    fn length(&self) -> usize;

    /// The element at `index`, or `None` for a hole or an index past the end.
    fn item(&self, index: usize) -> Option<Self::Item>;

    /// What a direct read of a hole yields: the item type's `undefined`, or
    /// `None` when the item type has no such value.
    ///
    /// Helpers that read every index (`map`, `clone`, `flatten`,
    /// `remove_duplicates`) see a hole as this value. Helpers that skip holes
    /// (`filter`, `find`, `for_each`, `contains`) never ask for it.
    fn undefined(&self) -> Option<Self::Item> {
        None
    }

    /// Whether this value is a `null`/`undefined` stand-in.
    ///
    /// Absent sequences behave exactly like a missing argument.
    fn is_absent(&self) -> bool {
        false
    }

    /// Whether `length === 0` holds for this value.
    ///
    /// Values without a numeric length (plain objects, numbers) override this
    /// to report `false`.
    fn has_zero_length(&self) -> bool {
        self.length() == 0
    }
}

/// Write access to an array-like sequence.
pub trait ArrayLikeMut: ArrayLike {
    /// Stores `item` at `index`.
    fn set_item(&mut self, index: usize, item: Self::Item);

    /// Assigns the length, truncating the tail.
    fn set_length(&mut self, len: usize);

    /// Removes the element at `index`, shifting the tail left by one.
    ///
    /// Returns `None` when `index` is out of range.
    fn remove_item(&mut self, index: usize) -> Option<Self::Item> {
        let len = self.length();
        if index >= len {
            return None;
        }
        let removed = self.item(index);
        for k in index + 1..len {
            if let Some(item) = self.item(k) {
                self.set_item(k - 1, item);
            }
        }
        self.set_length(len - 1);
        removed
    }
}

/// Narrows an optional sequence to a present one.
pub(crate) fn present<S: ArrayLike + ?Sized>(arr: Option<&S>) -> Option<&S> {
    arr.filter(|a| !a.is_absent())
}

/// `arr[index]`: the element, or the sequence's `undefined` for a hole.
pub(crate) fn read<S: ArrayLike + ?Sized>(arr: &S, index: usize) -> Option<S::Item> {
    arr.item(index).or_else(|| arr.undefined())
}

pub(crate) fn present_mut<S: ArrayLike + ?Sized>(arr: Option<&mut S>) -> Option<&mut S> {
    arr.filter(|a| !a.is_absent())
}

impl<T: Clone> ArrayLike for [T] {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone, const N: usize> ArrayLike for [T; N] {
    type Item = T;

    fn length(&self) -> usize {
        N
    }

    fn item(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> ArrayLike for Vec<T> {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> ArrayLikeMut for Vec<T> {
    fn set_item(&mut self, index: usize, item: T) {
        if let Some(slot) = self.get_mut(index) {
            *slot = item;
        } else if index == self.len() {
            self.push(item);
        }
    }

    fn set_length(&mut self, len: usize) {
        self.truncate(len);
    }

    fn remove_item(&mut self, index: usize) -> Option<T> {
        if index < self.len() {
            Some(self.remove(index))
        } else {
            None
        }
    }
}

impl<T: Clone> ArrayLike for VecDeque<T> {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> ArrayLikeMut for VecDeque<T> {
    fn set_item(&mut self, index: usize, item: T) {
        if let Some(slot) = self.get_mut(index) {
            *slot = item;
        } else if index == self.len() {
            self.push_back(item);
        }
    }

    fn set_length(&mut self, len: usize) {
        self.truncate(len);
    }

    fn remove_item(&mut self, index: usize) -> Option<T> {
        self.remove(index)
    }
}

/// A string iterates its characters, like indexing a legacy string.
///
/// Characters are found by walking from the start, so `item` costs O(index)
/// and a full pass over a string is quadratic in its length. Collect into a
/// `Vec<char>` first when that matters.
impl ArrayLike for str {
    type Item = char;

    fn length(&self) -> usize {
        self.chars().count()
    }

    fn item(&self, index: usize) -> Option<char> {
        self.chars().nth(index)
    }
}

impl ArrayLike for String {
    type Item = char;

    fn length(&self) -> usize {
        self.as_str().length()
    }

    fn item(&self, index: usize) -> Option<char> {
        self.as_str().item(index)
    }
}

/// `None` is the missing argument.
impl<S: ArrayLike> ArrayLike for Option<S> {
    type Item = S::Item;

    fn length(&self) -> usize {
        self.as_ref().map_or(0, ArrayLike::length)
    }

    fn item(&self, index: usize) -> Option<S::Item> {
        self.as_ref().and_then(|s| s.item(index))
    }

    fn undefined(&self) -> Option<S::Item> {
        self.as_ref().and_then(ArrayLike::undefined)
    }

    fn is_absent(&self) -> bool {
        self.as_ref().map_or(true, ArrayLike::is_absent)
    }

    fn has_zero_length(&self) -> bool {
        self.as_ref().map_or(true, ArrayLike::has_zero_length)
    }
}

impl<S: ArrayLikeMut> ArrayLikeMut for Option<S> {
    fn set_item(&mut self, index: usize, item: S::Item) {
        if let Some(s) = self {
            s.set_item(index, item);
        }
    }

    fn set_length(&mut self, len: usize) {
        if let Some(s) = self {
            s.set_length(len);
        }
    }

    fn remove_item(&mut self, index: usize) -> Option<S::Item> {
        self.as_mut().and_then(|s| s.remove_item(index))
    }
}
