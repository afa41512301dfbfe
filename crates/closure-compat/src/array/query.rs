use crate::array_like::{present, ArrayLike};
use crate::strict_eq::StrictEq;

/// Whether `arr` holds an item strictly equal to `obj`.
///
/// # Examples
///
/// ```
/// use closure_compat::array;
///
/// let roles = vec!["admin", "editor"];
/// assert!(array::contains(Some(&roles), &"admin"));
/// assert!(!array::contains(None::<&Vec<&str>>, &"admin"));
/// ```
pub fn contains<S>(arr: Option<&S>, obj: &S::Item) -> bool
where
    S: ArrayLike + ?Sized,
    S::Item: StrictEq,
{
    let Some(arr) = present(arr) else {
        return false;
    };
    (0..arr.length()).any(|index| arr.item(index).is_some_and(|item| item.strict_eq(obj)))
}

/// True for an absent sequence or one whose length is zero.
///
/// # Examples
///
/// ```
/// use closure_compat::array;
///
/// assert!(array::is_empty(None::<&Vec<u8>>));
/// assert!(array::is_empty(Some(&Vec::<u8>::new())));
/// assert!(!array::is_empty(Some(&vec![0u8])));
/// ```
pub fn is_empty<S: ArrayLike + ?Sized>(arr: Option<&S>) -> bool {
    match present(arr) {
        None => true,
        Some(arr) => arr.has_zero_length(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nullness::Nullable;
    use crate::shared::SharedArray;

    #[test]
    fn test_contains_empty_and_absent() {
        assert!(!contains(Some(&Vec::<i32>::new()), &1));
        assert!(!contains(None::<&Vec<i32>>, &1));
        let null: Nullable<Vec<i32>> = Nullable::Null;
        assert!(!contains(Some(&null), &1));
    }

    #[test]
    fn test_contains_scalar() {
        let v = vec![1.5, 2.5];
        assert!(contains(Some(&v), &2.5));
        assert!(!contains(Some(&v), &3.0));
    }

    #[test]
    fn test_contains_nan_never_matches() {
        let v = vec![f64::NAN];
        assert!(!contains(Some(&v), &f64::NAN));
    }

    #[test]
    fn test_contains_objects_by_identity() {
        let a = SharedArray::from(vec![1]);
        let b = SharedArray::from(vec![1]);
        let list = vec![a.clone()];
        assert!(contains(Some(&list), &a));
        assert!(!contains(Some(&list), &b));
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(None::<&[i32]>));
        assert!(is_empty(Some(&Nullable::<Vec<i32>>::Undefined)));
        assert!(is_empty(Some("")));
        assert!(!is_empty(Some("x")));
        assert!(!is_empty(Some(&[0])));
    }
}
