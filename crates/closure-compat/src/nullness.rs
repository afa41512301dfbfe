//! `goog.isDef`, `goog.isNull` and `goog.isDefAndNotNull`.
//!
//! The three checks look alike and are not interchangeable:
//!
//! | value       | `is_def` | `is_null` | `is_def_and_not_null` |
//! |-------------|----------|-----------|-----------------------|
//! | undefined   | false    | false     | false                 |
//! | null        | **true** | true      | false                 |
//! | anything    | true     | false     | true                  |

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::array_like::{ArrayLike, ArrayLikeMut};
use crate::strict_eq::SameValueZero;

/// A value that may be `undefined` or `null`.
pub trait Nullish {
    fn is_undefined(&self) -> bool;
    fn is_null(&self) -> bool;
}

/// True iff `val` is not `undefined`. **`null` is defined.**
///
/// # Examples
///
/// ```
/// use closure_compat::{is_def, Nullable};
///
/// assert!(is_def(&Nullable::<i32>::Null));
/// assert!(!is_def(&Nullable::<i32>::Undefined));
/// assert!(is_def(&Nullable::Value(0)));
/// ```
pub fn is_def<V: Nullish + ?Sized>(val: &V) -> bool {
    !val.is_undefined()
}

/// True iff `val` is exactly `null`. **`undefined` is not null.**
///
/// # Examples
///
/// ```
/// use closure_compat::{is_null, Nullable};
///
/// assert!(is_null(&Nullable::<i32>::Null));
/// assert!(!is_null(&Nullable::<i32>::Undefined));
/// ```
pub fn is_null<V: Nullish + ?Sized>(val: &V) -> bool {
    val.is_null()
}

/// True iff `val` is neither `null` nor `undefined`.
pub fn is_def_and_not_null<V: Nullish + ?Sized>(val: &V) -> bool {
    !val.is_undefined() && !val.is_null()
}

/// A three-state value: `undefined`, `null`, or a value.
///
/// With serde, `null` deserialises to `Null` and a missing field (given
/// `#[serde(default)]`) stays `Undefined`. Both serialise as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    Undefined,
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Nullable::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Nullable::Undefined => Nullable::Undefined,
            Nullable::Null => Nullable::Null,
            Nullable::Value(v) => Nullable::Value(v),
        }
    }

    /// The value, folding `null` and `undefined` into `None`.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Nullable<U> {
        match self {
            Nullable::Undefined => Nullable::Undefined,
            Nullable::Null => Nullable::Null,
            Nullable::Value(v) => Nullable::Value(f(v)),
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Undefined
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::Value(value)
    }
}

impl<T> Nullish for Nullable<T> {
    fn is_undefined(&self) -> bool {
        Nullable::is_undefined(self)
    }

    fn is_null(&self) -> bool {
        Nullable::is_null(self)
    }
}

/// `None` is `undefined`; `Some` defers to the inner value.
impl<T: Nullish> Nullish for Option<T> {
    fn is_undefined(&self) -> bool {
        self.as_ref().map_or(true, Nullish::is_undefined)
    }

    fn is_null(&self) -> bool {
        self.as_ref().map_or(false, Nullish::is_null)
    }
}

impl<T: Nullish + ?Sized> Nullish for &T {
    fn is_undefined(&self) -> bool {
        (**self).is_undefined()
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

macro_rules! never_nullish {
    ($($t:ty),* $(,)?) => {
        $(
            impl Nullish for $t {
                #[inline]
                fn is_undefined(&self) -> bool {
                    false
                }

                #[inline]
                fn is_null(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nullish!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);

impl<T> Nullish for Vec<T> {
    fn is_undefined(&self) -> bool {
        false
    }

    fn is_null(&self) -> bool {
        false
    }
}

/// `null` and `undefined` sequences are absent.
impl<S: ArrayLike> ArrayLike for Nullable<S> {
    type Item = S::Item;

    fn length(&self) -> usize {
        self.as_option().map_or(0, ArrayLike::length)
    }

    fn item(&self, index: usize) -> Option<S::Item> {
        self.as_option().and_then(|s| s.item(index))
    }

    fn undefined(&self) -> Option<S::Item> {
        self.as_option().and_then(ArrayLike::undefined)
    }

    fn is_absent(&self) -> bool {
        self.as_option().map_or(true, ArrayLike::is_absent)
    }

    fn has_zero_length(&self) -> bool {
        self.as_option().map_or(true, ArrayLike::has_zero_length)
    }
}

impl<S: ArrayLikeMut> ArrayLikeMut for Nullable<S> {
    fn set_item(&mut self, index: usize, item: S::Item) {
        if let Nullable::Value(s) = self {
            s.set_item(index, item);
        }
    }

    fn set_length(&mut self, len: usize) {
        if let Nullable::Value(s) = self {
            s.set_length(len);
        }
    }

    fn remove_item(&mut self, index: usize) -> Option<S::Item> {
        match self {
            Nullable::Value(s) => s.remove_item(index),
            _ => None,
        }
    }
}

/// `undefined` and `null` are two distinct keys.
impl<T: SameValueZero> SameValueZero for Nullable<T> {
    type Key = Nullable<T::Key>;

    fn same_value_zero_key(&self) -> Nullable<T::Key> {
        self.as_ref().map(SameValueZero::same_value_zero_key)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Value(v) => serializer.serialize_some(v),
            _ => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Nullable::Value(v),
            None => Nullable::Null,
        })
    }
}
