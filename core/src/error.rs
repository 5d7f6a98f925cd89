//! Errors raised by list operations.
//!
//! Every failure is immediate and leaves the list untouched. Callers that
//! only care about the broad category can match on [`ListError::kind`].

use thiserror::Error;

pub type Result<T, E = ListError> = core::result::Result<T, E>;

/// Error type shared by every list in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(miette::Diagnostic))]
pub enum ListError {
    /// A constructor was handed an absent backing sequence.
    #[error("{message}")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(listkit::invalid_argument)))]
    InvalidArgument { message: &'static str },

    /// A size-changing operation was called on a fixed-size list.
    #[error("Cannot call {operation}() on {type_name}")]
    #[cfg_attr(
        feature = "diagnostics",
        diagnostic(
            code(listkit::unsupported_operation),
            help("convert with `to_list()` to get a resizable list")
        )
    )]
    UnsupportedOperation {
        operation: &'static str,
        type_name: &'static str,
    },

    /// Positional access past the end of the list.
    #[error("Index: {index}, Size: {size}")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(listkit::index_out_of_range)))]
    IndexOutOfRange { index: usize, size: usize },

    /// A `from..to` range with `from > to`.
    #[error("fromIndex({from}) > toIndex({to})")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(listkit::index_out_of_range)))]
    InvertedRange { from: usize, to: usize },
}

/// Broad category of a [`ListError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListErrorKind {
    InvalidArgument,
    UnsupportedOperation,
    IndexOutOfRange,
}

impl ListError {
    pub fn kind(&self) -> ListErrorKind {
        match self {
            ListError::InvalidArgument { .. } => ListErrorKind::InvalidArgument,
            ListError::UnsupportedOperation { .. } => ListErrorKind::UnsupportedOperation,
            ListError::IndexOutOfRange { .. } | ListError::InvertedRange { .. } => {
                ListErrorKind::IndexOutOfRange
            }
        }
    }

    /// Name of the rejected operation, for [`ListError::UnsupportedOperation`].
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            ListError::UnsupportedOperation { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

/// `ArrayAdapter<&str>` → `ArrayAdapter`.
pub(crate) fn simple_type_name<L: ?Sized>() -> &'static str {
    let full = core::any::type_name::<L>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}

pub(crate) fn unsupported<L: ?Sized>(operation: &'static str) -> ListError {
    let type_name = simple_type_name::<L>();
    tracing::debug!(operation, list = type_name, "rejected size-changing operation");
    ListError::UnsupportedOperation {
        operation,
        type_name,
    }
}

pub(crate) fn check_index(index: usize, size: usize) -> Result<()> {
    if index < size {
        Ok(())
    } else {
        tracing::debug!(index, size, "index out of range");
        Err(ListError::IndexOutOfRange { index, size })
    }
}

/// Validates a half-open `from..to` range against `size`.
pub(crate) fn range_check(from: usize, to: usize, size: usize) -> Result<()> {
    if from > to {
        tracing::debug!(from, to, "inverted range");
        return Err(ListError::InvertedRange { from, to });
    }
    if to > size {
        tracing::debug!(index = to, size, "range end out of range");
        return Err(ListError::IndexOutOfRange { index: to, size });
    }
    Ok(())
}
