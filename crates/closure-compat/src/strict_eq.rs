use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// Identity/value equivalence, the comparison behind `contains`.
///
/// Primitives compare by value (`NaN` never equals itself), shared objects by
/// identity. Two structurally equal but distinct objects are not equal; this
/// is not a deep comparison.
pub trait StrictEq {
    fn strict_eq(&self, other: &Self) -> bool;
}

macro_rules! strict_eq_by_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl StrictEq for $t {
                #[inline]
                fn strict_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

strict_eq_by_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String, (),
);

impl<T: StrictEq + ?Sized> StrictEq for &T {
    fn strict_eq(&self, other: &Self) -> bool {
        (**self).strict_eq(*other)
    }
}

impl<T: ?Sized> StrictEq for Rc<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> StrictEq for Arc<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

/// `None` plays `undefined`, which is strictly equal only to itself.
impl<T: StrictEq> StrictEq for Option<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.strict_eq(b),
            _ => false,
        }
    }
}

/// The equivalence a legacy `Set` uses (`SameValueZero`), as a hashable key.
///
/// This is [`StrictEq`] with two differences: `NaN` matches `NaN`, and `-0`
/// shares a key with `0`. Shared objects are keyed by identity.
pub trait SameValueZero {
    type Key: Hash + Eq;

    fn same_value_zero_key(&self) -> Self::Key;
}

macro_rules! same_value_zero_by_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl SameValueZero for $t {
                type Key = $t;

                #[inline]
                fn same_value_zero_key(&self) -> $t {
                    self.clone()
                }
            }
        )*
    };
}

same_value_zero_by_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String, (),
);

impl SameValueZero for str {
    type Key = String;

    fn same_value_zero_key(&self) -> String {
        self.to_owned()
    }
}

impl SameValueZero for f64 {
    type Key = u64;

    fn same_value_zero_key(&self) -> u64 {
        if self.is_nan() {
            f64::NAN.to_bits()
        } else if *self == 0.0 {
            0
        } else {
            self.to_bits()
        }
    }
}

impl SameValueZero for f32 {
    type Key = u64;

    fn same_value_zero_key(&self) -> u64 {
        f64::from(*self).same_value_zero_key()
    }
}

impl<T: SameValueZero + ?Sized> SameValueZero for &T {
    type Key = T::Key;

    fn same_value_zero_key(&self) -> T::Key {
        (**self).same_value_zero_key()
    }
}

impl<T: ?Sized> SameValueZero for Rc<T> {
    type Key = usize;

    fn same_value_zero_key(&self) -> usize {
        Rc::as_ptr(self).cast::<()>() as usize
    }
}

impl<T: ?Sized> SameValueZero for Arc<T> {
    type Key = usize;

    fn same_value_zero_key(&self) -> usize {
        Arc::as_ptr(self).cast::<()>() as usize
    }
}

impl<T: SameValueZero> SameValueZero for Option<T> {
    type Key = Option<T::Key>;

    fn same_value_zero_key(&self) -> Option<T::Key> {
        self.as_ref().map(SameValueZero::same_value_zero_key)
    }
}
