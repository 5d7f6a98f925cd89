use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::{Result, check_index};
use crate::list::reject_size_changes;
use crate::{ListView, MutableList, RichIterable};

/// A borrowed, fixed-size view over part of another list.
///
/// Produced by [`RichIterable::sub_list`]. Nothing is copied: every query
/// reads straight from the parent's storage, and the view has every
/// [`RichIterable`] operation (including further `sub_list` calls, which are
/// relative to the view). A borrowed range cannot grow or shrink, so the
/// [`MutableList`] operations are rejected.
#[derive(Clone, Copy)]
pub struct ListAdapter<'a, T> {
    items: &'a [T],
}

impl<'a, T> ListAdapter<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&'a T> {
        check_index(index, self.items.len())?;
        Ok(&self.items[index])
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<T> ListView<T> for ListAdapter<'_, T> {
    fn size(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Result<&T> {
        ListAdapter::get(self, index)
    }

    fn as_contiguous(&self) -> Option<&[T]> {
        Some(self.items)
    }
}

impl<T> RichIterable<T> for ListAdapter<'_, T> {
    fn as_slice(&self) -> &[T] {
        self.items
    }
}

impl<T> MutableList<T> for ListAdapter<'_, T> {
    reject_size_changes!();
}

impl<'a, T> IntoIterator for ListAdapter<'a, T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Hash> Hash for ListAdapter<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ListAdapter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ListAdapter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.append_string(f, "[", ", ", "]")
    }
}
