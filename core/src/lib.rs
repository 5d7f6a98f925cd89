#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Fixed-size and growable lists with a rich query surface.
//!
//! [`ArrayAdapter`] owns an array and never changes length, [`FastList`] is
//! its growable counterpart, and [`ListAdapter`] is a borrowed view over a
//! range of either. All three share [`RichIterable`] for queries and
//! transformations, and [`MutableList`] for size changes (which the
//! fixed-size kinds reject with [`ListError::UnsupportedOperation`]).

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly so that macros can always refer to these.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, fmt, format, string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

mod array_adapter;
mod equality;
pub mod error;
mod fast_list;
mod iterable;
mod list;
mod list_adapter;
mod list_iter;

pub use array_adapter::ArrayAdapter;
pub use error::{ListError, ListErrorKind, Result};
pub use fast_list::FastList;
pub use iterable::RichIterable;
pub use list::{ListView, MutableList, list_equals};
pub use list_adapter::ListAdapter;
pub use list_iter::ListIter;
pub use listkit_iterate::{HashingStrategy, NaturalHashingStrategy, from_function};

/// Everything needed to call list methods: the types and the traits that
/// carry most of their operations.
pub mod prelude {
    pub use crate::{
        ArrayAdapter, FastList, ListAdapter, ListError, ListView, MutableList, RichIterable,
    };
}
