//! `goog.array` helpers.
//!
//! Every helper takes its sequence as `Option<&S>` (or `Option<&mut S>` when
//! it writes). `None`, and any sequence that reports itself absent, is treated
//! as an empty sequence: no error, no callback invocation.
//!
//! Callbacks receive `(this, item, index, sequence)`. `this` is the
//! [`Receiver`](crate::Receiver) built from the `opt_obj` argument. Each
//! callback-taking helper has a `try_` form whose callback returns a `Result`;
//! the first error stops the helper and is handed back unchanged.

mod copy;
mod iterate;
mod mutate;
mod query;
mod sort;

use std::convert::Infallible;

pub use copy::{clone, flatten, Nested, Spread};
pub use iterate::{filter, find, for_each, map, try_filter, try_find, try_for_each, try_map};
pub use mutate::{remove_at, remove_duplicates, remove_duplicates_by, try_remove_duplicates_by};
pub use query::{contains, is_empty};
pub use sort::{legacy_order, sort, sort_by, try_sort_by};

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
