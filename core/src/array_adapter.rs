//! A fixed-size list over an owned array.
//!
//! `ArrayAdapter<T>` takes ownership of a boxed slice without copying its
//! elements and exposes the whole query/transform surface of
//! [`RichIterable`]. Its length is fixed for its lifetime: the type has no
//! method that grows or shrinks it, and the shared [`MutableList`] entry
//! points fail with [`ListError::UnsupportedOperation`].
//!
//! ```
//! use listkit_core::{ArrayAdapter, ListErrorKind, MutableList, RichIterable};
//!
//! let mut letters = ArrayAdapter::from(["a", "b", "a", "c"]);
//! assert_eq!(letters.distinct().as_slice(), &["a", "b", "c"]);
//! assert_eq!(letters.last_index_of(&"a"), Some(2));
//!
//! let error = letters.clear().unwrap_err();
//! assert_eq!(error.kind(), ListErrorKind::UnsupportedOperation);
//! assert_eq!(letters.size(), 4);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::{ListError, Result, check_index};
use crate::list::{list_equals, reject_size_changes};
use crate::{Box, FastList, ListView, MutableList, RichIterable, Vec};

pub struct ArrayAdapter<T> {
    items: Box<[T]>,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(ArrayAdapter<u64>, [usize; 2]);

impl<T> ArrayAdapter<T> {
    /// Wraps `items` without copying the elements.
    pub fn new(items: impl Into<Box<[T]>>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Wraps `items`, rejecting an absent sequence.
    ///
    /// For callers whose backing array may be missing; [`ArrayAdapter::new`]
    /// is the form for a sequence that is known to be present.
    pub fn adapt<S: Into<Box<[T]>>>(items: Option<S>) -> Result<Self> {
        match items {
            Some(items) => Ok(Self::new(items)),
            None => {
                tracing::debug!("rejected absent backing array");
                Err(ListError::InvalidArgument {
                    message: "items cannot be null",
                })
            }
        }
    }

    /// An adapter over zero elements. Does not allocate.
    pub fn empty() -> Self {
        Self {
            items: Box::default(),
        }
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.items.len())?;
        Ok(&self.items[index])
    }

    /// Replaces the element at `index` and returns the old one.
    ///
    /// Cell replacement only; the size is unchanged.
    pub fn set(&mut self, index: usize, element: T) -> Result<T> {
        check_index(index, self.items.len())?;
        Ok(core::mem::replace(&mut self.items[index], element))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_inner(self) -> Box<[T]> {
        self.items
    }

    pub fn sort_this(&mut self) -> &mut Self
    where
        T: Ord,
    {
        self.items.sort();
        self
    }

    pub fn sort_this_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) -> &mut Self {
        self.items.sort_by(compare);
        self
    }

    pub fn reverse_this(&mut self) -> &mut Self {
        self.items.reverse();
        self
    }

    /// A new adapter holding these elements followed by `element`.
    ///
    /// `self` is consumed; the returned adapter is one element longer.
    pub fn new_with(self, element: T) -> Self {
        let mut items = Vec::from(self.items);
        items.push(element);
        Self::new(items)
    }

    /// Adapter-to-adapter comparison: a straight slice compare.
    pub fn array_adapter_equals<U>(&self, other: &ArrayAdapter<U>) -> bool
    where
        T: PartialEq<U>,
    {
        listkit_iterate::array_equals(&self.items, &other.items)
    }

    /// Comparison against any list-shaped value.
    ///
    /// Contiguous lists are compared as slices; anything else is walked with
    /// positional `get`. Both give the same answer.
    pub fn equals_list<U>(&self, other: &(impl ListView<U> + ?Sized)) -> bool
    where
        T: PartialEq<U>,
    {
        list_equals(&self.items, other)
    }
}

impl<T> Default for ArrayAdapter<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> Clone for ArrayAdapter<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T> ListView<T> for ArrayAdapter<T> {
    fn size(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Result<&T> {
        ArrayAdapter::get(self, index)
    }

    fn as_contiguous(&self) -> Option<&[T]> {
        Some(&self.items)
    }
}

impl<T> RichIterable<T> for ArrayAdapter<T> {
    fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> MutableList<T> for ArrayAdapter<T> {
    reject_size_changes!();
}

// --- Construction ---

impl<T> From<Box<[T]>> for ArrayAdapter<T> {
    fn from(items: Box<[T]>) -> Self {
        Self { items }
    }
}

impl<T> From<Vec<T>> for ArrayAdapter<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayAdapter<T> {
    fn from(items: [T; N]) -> Self {
        Self::new(Vec::from(items))
    }
}

impl<T> From<FastList<T>> for ArrayAdapter<T> {
    fn from(list: FastList<T>) -> Self {
        Self::new(list.into_vec())
    }
}

impl<T> FromIterator<T> for ArrayAdapter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for ArrayAdapter<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Vec::from(self.items).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayAdapter<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// --- Equality, hashing, formatting ---

impl<T: Eq> Eq for ArrayAdapter<T> {}

impl<T: Hash> Hash for ArrayAdapter<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.append_string(f, "[", ", ", "]")
    }
}

#[cfg(test)]
#[path = "array_adapter_test.rs"]
mod array_adapter_test;
