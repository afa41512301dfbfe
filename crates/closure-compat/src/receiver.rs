use std::any::Any;

/// The binding context a callback is invoked with.
///
/// Every iteration helper accepts an optional `opt_obj`; the callback receives
/// it back as its first argument, in place of the legacy `this` binding.
/// Callers recover the concrete type with [`Receiver::get`].
///
/// # Examples
///
/// ```
/// use closure_compat::array;
///
/// struct Limits {
///     max: i32,
/// }
///
/// let limits = Limits { max: 2 };
/// let small = array::filter(
///     Some(&vec![1, 2, 3]),
///     |this, n, _, _| this.get::<Limits>().map_or(true, |l| *n <= l.max),
///     Some(&limits),
/// );
/// assert_eq!(small, vec![1, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Receiver<'a> {
    obj: Option<&'a dyn Any>,
}

impl<'a> Receiver<'a> {
    pub fn new(obj: Option<&'a dyn Any>) -> Self {
        Self { obj }
    }

    /// A receiver with no binding context.
    pub fn unbound() -> Self {
        Self { obj: None }
    }

    pub fn is_bound(&self) -> bool {
        self.obj.is_some()
    }

    /// The binding context, if one was given and it is a `C`.
    pub fn get<C: Any>(&self) -> Option<&'a C> {
        self.obj.and_then(|obj| obj.downcast_ref::<C>())
    }
}

impl<'a> From<Option<&'a dyn Any>> for Receiver<'a> {
    fn from(obj: Option<&'a dyn Any>) -> Self {
        Self::new(obj)
    }
}
