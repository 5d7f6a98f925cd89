//! listkit - Fixed-size and growable lists with a rich query surface
//!
//! # Overview
//!
//! listkit wraps plain arrays in list types that share one set of query and
//! transformation operations:
//!
//! - [`ArrayAdapter`]: owns an array and keeps its length for life
//! - [`FastList`]: the growable list, and the type derived results come back in
//! - [`ListAdapter`]: a borrowed view over a range of another list
//!
//! # Quick Start
//!
//! ```
//! use listkit::prelude::*;
//!
//! let mut letters = ArrayAdapter::from(["a", "b", "a", "c"]);
//!
//! assert_eq!(letters.distinct(), ["a", "b", "c"]);
//! assert_eq!(letters.index_of(&"a"), Some(0));
//! assert_eq!(letters.last_index_of(&"a"), Some(2));
//! assert_eq!(letters.take(2), ["a", "b"]);
//! assert_eq!(letters.to_string(), "[a, b, a, c]");
//!
//! // Cells can be replaced, but the length never changes.
//! letters.set(3, "d").unwrap();
//! assert!(letters.add("e").is_err());
//! assert_eq!(letters.size(), 4);
//! ```
//!
//! # Fixed size
//!
//! Every list kind implements [`MutableList`], so code can be written once
//! against it. On [`ArrayAdapter`] and [`ListAdapter`] each of its operations
//! fails with [`ListError::UnsupportedOperation`], naming the operation and
//! the list type, and leaves the list untouched. Convert with
//! [`RichIterable::to_list`] to get a list that can grow.
//!
//! ```
//! use listkit::{ArrayAdapter, ListErrorKind, MutableList, RichIterable};
//!
//! let mut numbers = ArrayAdapter::from([1, 2, 3]);
//! let error = numbers.remove_at(0).unwrap_err();
//! assert_eq!(error.kind(), ListErrorKind::UnsupportedOperation);
//! assert_eq!(error.to_string(), "Cannot call remove_at() on ArrayAdapter");
//!
//! let mut growable = numbers.to_list();
//! assert_eq!(growable.remove_at(0), Ok(1));
//! assert_eq!(growable, [2, 3]);
//! ```

// Error rendering utilities
#[cfg(feature = "diagnostics")]
pub mod error_renderer;
#[cfg(feature = "diagnostics")]
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from listkit_core
pub use listkit_core::{
    ArrayAdapter, FastList, ListAdapter, ListError, ListErrorKind, ListIter, ListView,
    MutableList, Result, RichIterable, list_equals, prelude,
};

// Equivalence strategies and the slice-level helpers behind every list
pub use listkit_core::{HashingStrategy, NaturalHashingStrategy, from_function};
pub use listkit_iterate as iterate;
