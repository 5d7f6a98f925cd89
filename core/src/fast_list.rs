use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::{Result, check_index};
use crate::{ListError, ListView, MutableList, RichIterable, Vec};

/// A growable list backed by a `Vec`.
///
/// This is the default container for results of `select`, `collect`,
/// `distinct`, and the other derived-list operations, and the type to convert
/// a fixed-size list into when it needs to grow.
#[derive(Clone)]
pub struct FastList<T> {
    items: Vec<T>,
}

impl<T> FastList<T> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Appends `element` and returns the list, for chained construction.
    pub fn with(mut self, element: T) -> Self {
        self.items.push(element);
        self
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

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for FastList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListView<T> for FastList<T> {
    fn size(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Result<&T> {
        FastList::get(self, index)
    }

    fn as_contiguous(&self) -> Option<&[T]> {
        Some(&self.items)
    }
}

impl<T> RichIterable<T> for FastList<T> {
    fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> MutableList<T> for FastList<T> {
    fn add(&mut self, element: T) -> Result<bool> {
        self.items.push(element);
        Ok(true)
    }

    fn add_at(&mut self, index: usize, element: T) -> Result<()> {
        if index > self.items.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                size: self.items.len(),
            });
        }
        self.items.insert(index, element);
        Ok(())
    }

    fn remove(&mut self, element: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        match self.items.iter().position(|item| item == element) {
            Some(index) => {
                self.items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        check_index(index, self.items.len())?;
        Ok(self.items.remove(index))
    }

    fn clear(&mut self) -> Result<()> {
        self.items.clear();
        Ok(())
    }

    fn add_all(&mut self, elements: Vec<T>) -> Result<bool> {
        let changed = !elements.is_empty();
        self.items.extend(elements);
        Ok(changed)
    }

    fn add_all_at(&mut self, index: usize, elements: Vec<T>) -> Result<bool> {
        if index > self.items.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                size: self.items.len(),
            });
        }
        let changed = !elements.is_empty();
        self.items.splice(index..index, elements);
        Ok(changed)
    }

    fn add_all_iterable(&mut self, elements: &mut dyn Iterator<Item = T>) -> Result<bool> {
        let before = self.items.len();
        self.items.extend(elements);
        Ok(self.items.len() != before)
    }

    fn remove_all(&mut self, elements: &[T]) -> Result<bool>
    where
        T: PartialEq,
    {
        Ok(self.retain_where(|item| !elements.contains(item)))
    }

    fn remove_all_iterable(&mut self, elements: &mut dyn Iterator<Item = &T>) -> Result<bool>
    where
        T: PartialEq,
    {
        let elements: Vec<&T> = elements.collect();
        Ok(self.retain_where(|item| !elements.contains(&item)))
    }

    fn retain_all(&mut self, elements: &[T]) -> Result<bool>
    where
        T: PartialEq,
    {
        Ok(self.retain_where(|item| elements.contains(item)))
    }

    fn retain_all_iterable(&mut self, elements: &mut dyn Iterator<Item = &T>) -> Result<bool>
    where
        T: PartialEq,
    {
        let elements: Vec<&T> = elements.collect();
        Ok(self.retain_where(|item| elements.contains(&item)))
    }

    fn remove_if(&mut self, predicate: &mut dyn FnMut(&T) -> bool) -> Result<bool> {
        Ok(self.retain_where(|item| !predicate(item)))
    }

    fn remove_if_with<P: ?Sized>(
        &mut self,
        mut predicate: impl FnMut(&T, &P) -> bool,
        parameter: &P,
    ) -> Result<bool> {
        Ok(self.retain_where(|item| !predicate(item, parameter)))
    }
}

impl<T> FastList<T> {
    /// Keeps the elements `keep` accepts; reports whether any were dropped.
    fn retain_where(&mut self, keep: impl FnMut(&T) -> bool) -> bool {
        let before = self.items.len();
        self.items.retain(keep);
        self.items.len() != before
    }
}

impl<T> From<Vec<T>> for FastList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for FastList<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: Vec::from(items),
        }
    }
}

impl<T> From<FastList<T>> for Vec<T> {
    fn from(list: FastList<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for FastList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for FastList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for FastList<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FastList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Hash> Hash for FastList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for FastList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T: fmt::Display> fmt::Display for FastList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.append_string(f, "[", ", ", "]")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ToString, vec};

    #[test]
    fn grows_and_shrinks() {
        let mut list = FastList::new();
        assert_eq!(list.add(1), Ok(true));
        assert_eq!(list.add_at(0, 0), Ok(()));
        assert_eq!(list.add_all(vec![2, 3]), Ok(true));
        assert_eq!(list.as_slice(), &[0, 1, 2, 3]);

        assert_eq!(list.remove_at(0), Ok(0));
        assert_eq!(list.remove(&2), Ok(true));
        assert_eq!(list.remove(&42), Ok(false));
        assert_eq!(list.as_slice(), &[1, 3]);

        assert_eq!(list.clear(), Ok(()));
        assert!(list.is_empty());
    }

    #[test]
    fn positional_bounds() {
        let mut list = FastList::from(vec!['a', 'b']);
        assert_eq!(
            list.add_at(3, 'z'),
            Err(ListError::IndexOutOfRange { index: 3, size: 2 })
        );
        assert_eq!(
            list.remove_at(2),
            Err(ListError::IndexOutOfRange { index: 2, size: 2 })
        );
        assert_eq!(list.add_all_at(1, vec!['x', 'y']), Ok(true));
        assert_eq!(list.as_slice(), &['a', 'x', 'y', 'b']);
    }

    #[test]
    fn bulk_removal() {
        let mut list: FastList<i32> = (1..=6).collect();
        assert_eq!(list.remove_all(&[2, 4]), Ok(true));
        assert_eq!(list.retain_all(&[1, 3, 5]), Ok(true));
        assert_eq!(list.as_slice(), &[1, 3, 5]);
        assert_eq!(list.retain_all(&[1, 3, 5]), Ok(false));

        assert_eq!(list.remove_if(&mut |n: &i32| *n > 4), Ok(true));
        assert_eq!(list.remove_if_with(|n, p: &i32| n == p, &1), Ok(true));
        assert_eq!(list.as_slice(), &[3]);

        let mut extra = [7, 8].into_iter();
        assert_eq!(list.add_all_iterable(&mut extra), Ok(true));
        let to_remove = [3, 8];
        assert_eq!(list.remove_all_iterable(&mut to_remove.iter()), Ok(true));
        assert_eq!(list.as_slice(), &[7]);
        assert_eq!(list.retain_all_iterable(&mut [9].iter()), Ok(true));
        assert!(list.is_empty());
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Ticket(u32);

    #[test]
    fn default_needs_no_element_default() {
        let list = FastList::<Ticket>::default();
        assert!(list.is_empty());

        let tickets = FastList::from([Ticket(1), Ticket(2), Ticket(3)]);
        let (odd, even) = tickets.select_and_reject_with(|t, m| t.0 % m == 1, &2);
        assert_eq!(odd, [Ticket(1), Ticket(3)]);
        assert_eq!(even, [Ticket(2)]);
    }

    #[test]
    fn renders_like_a_list() {
        let list = FastList::from(["x", "y"]);
        assert_eq!(list.to_string(), "[x, y]");
        assert_eq!(alloc::format!("{list:?}"), r#"["x", "y"]"#);
        assert_eq!(FastList::<i32>::new().to_string(), "[]");
    }
}
