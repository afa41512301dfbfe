use crate::array_like::{present, read, ArrayLike};

/// Shallow copy of `arr`, in order.
///
/// Works on any array-like, which is how legacy code turned node lists and
/// `arguments` into real arrays. Holes keep their slot as the sequence's
/// `undefined`; they are dropped only when the item type has none.
pub fn clone<S: ArrayLike + ?Sized>(arr: Option<&S>) -> Vec<S::Item> {
    let Some(arr) = present(arr) else {
        return Vec::new();
    };
    (0..arr.length()).filter_map(|index| read(arr, index)).collect()
}

/// An item that may itself be a sequence to splice into a flattened result.
pub trait Spread: Sized {
    /// The items to splice in place of `self`, or `None` to keep `self` as is.
    fn spread(&self) -> Option<Vec<Self>>;
}

/// A typed value that is either a leaf or a nested sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Leaf(T),
    Seq(Vec<Nested<T>>),
}

impl<T: Clone> Spread for Nested<T> {
    fn spread(&self) -> Option<Vec<Self>> {
        match self {
            Nested::Leaf(_) => None,
            Nested::Seq(items) => Some(items.clone()),
        }
    }
}

/// Splices one level of nested sequences into a new `Vec`.
///
/// Only the top level is flattened; a sequence nested two deep comes out as a
/// sequence. A hole is read as the sequence's `undefined` and kept.
///
/// # Examples
///
/// ```
/// use closure_compat::array::{self, Nested};
///
/// let leaf = Nested::Leaf;
/// let input = vec![
///     Nested::Seq(vec![leaf(1), leaf(2)]),
///     leaf(3),
///     Nested::Seq(vec![leaf(4)]),
/// ];
/// assert_eq!(
///     array::flatten(Some(&input)),
///     vec![leaf(1), leaf(2), leaf(3), leaf(4)]
/// );
/// ```
pub fn flatten<S>(arr: Option<&S>) -> Vec<S::Item>
where
    S: ArrayLike + ?Sized,
    S::Item: Spread,
{
    let mut out = Vec::new();
    let Some(arr) = present(arr) else {
        return out;
    };
    for index in 0..arr.length() {
        let Some(item) = read(arr, index) else {
            continue;
        };
        match item.spread() {
            Some(items) => out.extend(items),
            None => out.push(item),
        }
    }
    out
}
