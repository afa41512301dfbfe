use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::array_like::{ArrayLike, ArrayLikeMut};
use crate::strict_eq::{SameValueZero, StrictEq};

/// A caller-owned array with object identity.
///
/// Cloning a `SharedArray` clones the handle, not the elements: every clone
/// observes mutations made through any other, the way several legacy
/// references to one array do. Callbacks may mutate the array while an
/// operation iterates it.
///
/// # Examples
///
/// ```
/// use closure_compat::{array, SharedArray};
///
/// let items = SharedArray::from(vec![3, 1, 2]);
/// let alias = items.clone();
///
/// array::sort(Some(&mut items.clone()));
/// assert_eq!(alias.to_vec(), vec![1, 2, 3]);
/// assert!(items.same_object(&alias));
/// ```
pub struct SharedArray<T> {
    inner: Rc<RefCell<Vec<T>>>,
}

impl<T> SharedArray<T> {
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    pub fn push(&self, item: T) {
        self.inner.borrow_mut().push(item);
    }

    pub fn pop(&self) -> Option<T> {
        self.inner.borrow_mut().pop()
    }

    /// Runs `f` with mutable access to the backing storage.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    /// Whether both handles refer to the same array.
    pub fn same_object(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone> SharedArray<T> {
    /// Copies the current contents out.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.borrow().clone()
    }
}

impl<T> Clone for SharedArray<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for SharedArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(items)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.borrow().iter()).finish()
    }
}

impl<T: Clone> ArrayLike for SharedArray<T> {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<T> {
        self.inner.borrow().get(index).cloned()
    }
}

impl<T: Clone> ArrayLikeMut for SharedArray<T> {
    fn set_item(&mut self, index: usize, item: T) {
        let mut items = self.inner.borrow_mut();
        if let Some(slot) = items.get_mut(index) {
            *slot = item;
        } else if index == items.len() {
            items.push(item);
        }
    }

    fn set_length(&mut self, len: usize) {
        self.inner.borrow_mut().truncate(len);
    }

    fn remove_item(&mut self, index: usize) -> Option<T> {
        let mut items = self.inner.borrow_mut();
        if index < items.len() {
            Some(items.remove(index))
        } else {
            None
        }
    }
}

/// Arrays compare by identity.
impl<T> StrictEq for SharedArray<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        self.same_object(other)
    }
}

impl<T> SameValueZero for SharedArray<T> {
    type Key = usize;

    fn same_value_zero_key(&self) -> usize {
        Rc::as_ptr(&self.inner) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_storage() {
        let a = SharedArray::from(vec![1, 2]);
        let b = a.clone();
        b.push(3);
        assert_eq!(a.to_vec(), vec![1, 2, 3]);
        assert!(a.same_object(&b));
    }

    #[test]
    fn test_equal_contents_are_distinct_objects() {
        let a = SharedArray::from(vec![1]);
        let b = SharedArray::from(vec![1]);
        assert!(!a.strict_eq(&b));
        assert!(a.strict_eq(&a.clone()));
    }

    #[test]
    fn test_writes_through_any_handle() {
        let a = SharedArray::from(vec!['x', 'y', 'z']);
        let mut b = a.clone();
        assert_eq!(b.remove_item(1), Some('y'));
        b.set_item(0, 'w');
        assert_eq!(a.to_vec(), vec!['w', 'z']);
        b.set_length(1);
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_debug_lists_contents() {
        let a = SharedArray::from(vec![1, 2]);
        assert_eq!(format!("{:?}", a), "[1, 2]");
    }
}
