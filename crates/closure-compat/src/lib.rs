//! closure-compat - Closure's `goog.array` helpers, bug for bug.
//!
//! This crate reproduces the observable behaviour legacy callers depend on,
//! including where it differs from the obvious native equivalent:
//!
//! - a `null`/`undefined` sequence is an empty sequence, never an error;
//! - array-like values (anything implementing [`ArrayLike`]) are accepted;
//! - `remove_duplicates`, `sort` and `remove_at` mutate the caller's sequence
//!   in place;
//! - `for_each` re-reads the live sequence on every step;
//! - [`is_def`], [`is_null`] and [`is_def_and_not_null`] are three different
//!   checks.
//!
//! # Example
//!
//! ```
//! use closure_compat::{array, is_def, is_null, Nullable};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User {
//!     id: u32,
//!     is_active: bool,
//! }
//!
//! let users = vec![
//!     User { id: 1, is_active: true },
//!     User { id: 2, is_active: false },
//! ];
//! let active = array::filter(Some(&users), |_, u, _, _| u.is_active, None);
//! assert_eq!(active, vec![User { id: 1, is_active: true }]);
//! assert_eq!(users.len(), 2);
//!
//! let missing: Nullable<Vec<User>> = Nullable::Undefined;
//! assert!(array::filter(Some(&missing), |_, u, _, _| u.is_active, None).is_empty());
//!
//! assert!(is_def(&Nullable::<u32>::Null));
//! assert!(!is_null(&Nullable::<u32>::Undefined));
//! ```

pub mod array;
pub mod array_like;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod nullness;
pub mod receiver;
pub mod registry;
pub mod shared;
pub mod strict_eq;

// Re-exports for convenience
pub use array_like::{ArrayLike, ArrayLikeMut};
pub use error::RegistryError;
pub use nullness::{is_def, is_def_and_not_null, is_null, Nullable, Nullish};
pub use receiver::Receiver;
pub use registry::{register, Goog, GLOBAL_NAME};
pub use shared::SharedArray;
pub use strict_eq::{SameValueZero, StrictEq};
