//! Capability traits shared by fixed-size and growable lists.

use alloc::collections::VecDeque;

use crate::Vec;
use crate::error::{Result, check_index};

/// Read access by position.
///
/// This is the "list-shaped" capability: anything that can report a size and
/// hand out the element at an index can be compared against the lists in
/// this crate.
pub trait ListView<T> {
    fn size(&self) -> usize;

    fn get(&self, index: usize) -> Result<&T>;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The elements as one slice, when the list stores them contiguously.
    ///
    /// Equality uses this to compare two slices directly and falls back to
    /// positional `get` otherwise.
    fn as_contiguous(&self) -> Option<&[T]> {
        None
    }
}

impl<T> ListView<T> for [T] {
    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.len())?;
        Ok(&self[index])
    }

    fn as_contiguous(&self) -> Option<&[T]> {
        Some(self)
    }
}

// Ring buffer: not contiguous in general, so comparisons take the positional path.
impl<T> ListView<T> for VecDeque<T> {
    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.len())?;
        Ok(&self[index])
    }
}

/// Size-changing operations.
///
/// Growable lists implement these for real. Fixed-size lists implement them
/// by returning [`ListError::UnsupportedOperation`](crate::ListError), so code
/// written against `MutableList` works with both and a fixed-size list never
/// changes its element count.
pub trait MutableList<T>: ListView<T> {
    fn add(&mut self, element: T) -> Result<bool>;

    fn add_at(&mut self, index: usize, element: T) -> Result<()>;

    fn remove(&mut self, element: &T) -> Result<bool>
    where
        T: PartialEq;

    fn remove_at(&mut self, index: usize) -> Result<T>;

    fn clear(&mut self) -> Result<()>;

    fn add_all(&mut self, elements: Vec<T>) -> Result<bool>;

    fn add_all_at(&mut self, index: usize, elements: Vec<T>) -> Result<bool>;

    fn add_all_iterable(&mut self, elements: &mut dyn Iterator<Item = T>) -> Result<bool>;

    fn remove_all(&mut self, elements: &[T]) -> Result<bool>
    where
        T: PartialEq;

    fn remove_all_iterable(&mut self, elements: &mut dyn Iterator<Item = &T>) -> Result<bool>
    where
        T: PartialEq;

    fn retain_all(&mut self, elements: &[T]) -> Result<bool>
    where
        T: PartialEq;

    fn retain_all_iterable(&mut self, elements: &mut dyn Iterator<Item = &T>) -> Result<bool>
    where
        T: PartialEq;

    fn remove_if(&mut self, predicate: &mut dyn FnMut(&T) -> bool) -> Result<bool>;

    fn remove_if_with<P: ?Sized>(
        &mut self,
        predicate: impl FnMut(&T, &P) -> bool,
        parameter: &P,
    ) -> Result<bool>
    where
        Self: Sized;
}

/// Implements every [`MutableList`] method as a rejection naming the
/// operation and the implementing type.
///
/// Used inside `impl MutableList<T> for FixedList<T> { ... }`.
macro_rules! reject_size_changes {
    () => {
        fn add(&mut self, _element: T) -> $crate::error::Result<bool> {
            Err($crate::error::unsupported::<Self>("add"))
        }

        fn add_at(&mut self, _index: usize, _element: T) -> $crate::error::Result<()> {
            Err($crate::error::unsupported::<Self>("add_at"))
        }

        fn remove(&mut self, _element: &T) -> $crate::error::Result<bool>
        where
            T: PartialEq,
        {
            Err($crate::error::unsupported::<Self>("remove"))
        }

        fn remove_at(&mut self, _index: usize) -> $crate::error::Result<T> {
            Err($crate::error::unsupported::<Self>("remove_at"))
        }

        fn clear(&mut self) -> $crate::error::Result<()> {
            Err($crate::error::unsupported::<Self>("clear"))
        }

        fn add_all(&mut self, _elements: $crate::Vec<T>) -> $crate::error::Result<bool> {
            Err($crate::error::unsupported::<Self>("add_all"))
        }

        fn add_all_at(
            &mut self,
            _index: usize,
            _elements: $crate::Vec<T>,
        ) -> $crate::error::Result<bool> {
            Err($crate::error::unsupported::<Self>("add_all_at"))
        }

        fn add_all_iterable(
            &mut self,
            _elements: &mut dyn Iterator<Item = T>,
        ) -> $crate::error::Result<bool> {
            Err($crate::error::unsupported::<Self>("add_all_iterable"))
        }

        fn remove_all(&mut self, _elements: &[T]) -> $crate::error::Result<bool>
        where
            T: PartialEq,
        {
            Err($crate::error::unsupported::<Self>("remove_all"))
        }

        fn remove_all_iterable(
            &mut self,
            _elements: &mut dyn Iterator<Item = &T>,
        ) -> $crate::error::Result<bool>
        where
            T: PartialEq,
        {
            Err($crate::error::unsupported::<Self>("remove_all_iterable"))
        }

        fn retain_all(&mut self, _elements: &[T]) -> $crate::error::Result<bool>
        where
            T: PartialEq,
        {
            Err($crate::error::unsupported::<Self>("retain_all"))
        }

        fn retain_all_iterable(
            &mut self,
            _elements: &mut dyn Iterator<Item = &T>,
        ) -> $crate::error::Result<bool>
        where
            T: PartialEq,
        {
            Err($crate::error::unsupported::<Self>("retain_all_iterable"))
        }

        fn remove_if(&mut self, _predicate: &mut dyn FnMut(&T) -> bool) -> $crate::error::Result<bool> {
            Err($crate::error::unsupported::<Self>("remove_if"))
        }

        fn remove_if_with<P: ?Sized>(
            &mut self,
            _predicate: impl FnMut(&T, &P) -> bool,
            _parameter: &P,
        ) -> $crate::error::Result<bool> {
            Err($crate::error::unsupported::<Self>("remove_if_with"))
        }
    };
}

pub(crate) use reject_size_changes;

/// Positional comparison against any [`ListView`].
///
/// Takes the slice path when `right` is contiguous; both paths agree.
pub fn list_equals<T, U>(left: &[T], right: &(impl ListView<U> + ?Sized)) -> bool
where
    T: PartialEq<U>,
{
    match right.as_contiguous() {
        Some(items) => listkit_iterate::array_equals(left, items),
        None => {
            left.len() == right.size()
                && left
                    .iter()
                    .enumerate()
                    .all(|(index, item)| right.get(index).is_ok_and(|other| item == other))
        }
    }
}
