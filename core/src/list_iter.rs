use core::iter::FusedIterator;

/// A cursor over a borrowed list that can move in both directions.
///
/// The cursor sits *between* elements: `next` returns the element after it
/// and advances, `previous` returns the element before it and steps back.
/// Created by [`RichIterable::list_iterator`](crate::RichIterable::list_iterator).
#[derive(Debug, Clone)]
pub struct ListIter<'a, T> {
    items: &'a [T],
    cursor: usize,
}

impl<'a, T> ListIter<'a, T> {
    /// `cursor` must be in `0..=items.len()`.
    pub(crate) fn new(items: &'a [T], cursor: usize) -> Self {
        debug_assert!(cursor <= items.len());
        Self { items, cursor }
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.items.len()
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    /// Index of the element `next` would return (equals the size at the end).
    pub fn next_index(&self) -> usize {
        self.cursor
    }

    /// Index of the element `previous` would return, `None` at the start.
    pub fn previous_index(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    pub fn previous(&mut self) -> Option<&'a T> {
        let index = self.previous_index()?;
        self.cursor = index;
        Some(&self.items[index])
    }
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.cursor)?;
        self.cursor += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for ListIter<'_, T> {}

impl<T> FusedIterator for ListIter<'_, T> {}
