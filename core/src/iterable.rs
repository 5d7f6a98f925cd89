//! Query and transformation operations shared by every contiguous list.
//!
//! [`RichIterable`] needs only [`as_slice`](RichIterable::as_slice); every
//! other method is a default that hands the slice to `listkit_iterate`. Results
//! that are lists come back as a new [`FastList`] unless the `_into` form is
//! used with a caller-supplied target.

use core::fmt;
use core::hash::{BuildHasher, Hash};

use listkit_iterate::{self as iterate, HashingStrategy};

use crate::error::{ListError, Result, range_check};
use crate::{Box, FastList, ListAdapter, ListIter, ListView, String, Vec};

pub trait RichIterable<T> {
    fn as_slice(&self) -> &[T];

    // ========================================================================
    // Element access
    // ========================================================================

    fn not_empty(&self) -> bool {
        !self.as_slice().is_empty()
    }

    fn get_first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    fn get_last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    fn contains<U>(&self, item: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        iterate::any_satisfy_with(self.as_slice(), |each, item| each == item, item)
    }

    /// True when every element of `items` is present in this list.
    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: PartialEq + 'a,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    fn index_of<U>(&self, item: &U) -> Option<usize>
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        iterate::index_of(self.as_slice(), item)
    }

    fn last_index_of<U>(&self, item: &U) -> Option<usize>
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        iterate::last_index_of(self.as_slice(), item)
    }

    // ========================================================================
    // Visiting
    // ========================================================================

    fn each(&self, procedure: impl FnMut(&T)) {
        self.as_slice().iter().for_each(procedure);
    }

    fn for_each_with<P: ?Sized>(&self, mut procedure: impl FnMut(&T, &P), parameter: &P) {
        for item in self.as_slice() {
            procedure(item, parameter);
        }
    }

    fn for_each_with_index(&self, procedure: impl FnMut(&T, usize)) {
        iterate::for_each_with_index(self.as_slice(), procedure);
    }

    /// Visits `from..to` with indices.
    fn for_each_with_index_in(
        &self,
        from: usize,
        to: usize,
        procedure: impl FnMut(&T, usize),
    ) -> Result<()> {
        let items = self.as_slice();
        range_check(from, to, items.len())?;
        iterate::for_each_with_index_without_checks(items, from, to, procedure);
        Ok(())
    }

    fn for_each_in(&self, from: usize, to: usize, procedure: impl FnMut(&T)) -> Result<()> {
        let items = self.as_slice();
        range_check(from, to, items.len())?;
        iterate::for_each_without_checks(items, from, to, procedure);
        Ok(())
    }

    // ========================================================================
    // Searching
    // ========================================================================

    fn detect(&self, predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        iterate::detect(self.as_slice(), predicate)
    }

    fn detect_with<P: ?Sized>(
        &self,
        predicate: impl FnMut(&T, &P) -> bool,
        parameter: &P,
    ) -> Option<&T> {
        iterate::detect_with(self.as_slice(), predicate, parameter)
    }

    /// `function` runs only when nothing matches.
    fn detect_if_none(&self, predicate: impl FnMut(&T) -> bool, function: impl FnOnce() -> T) -> T
    where
        T: Clone,
    {
        self.detect(predicate).cloned().unwrap_or_else(function)
    }

    fn detect_with_if_none<P: ?Sized>(
        &self,
        predicate: impl FnMut(&T, &P) -> bool,
        parameter: &P,
        function: impl FnOnce() -> T,
    ) -> T
    where
        T: Clone,
    {
        self.detect_with(predicate, parameter)
            .cloned()
            .unwrap_or_else(function)
    }

    fn detect_index(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        iterate::detect_index(self.as_slice(), predicate)
    }

    fn detect_last_index(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        iterate::detect_last_index(self.as_slice(), predicate)
    }

    // ========================================================================
    // Counting and quantifiers
    // ========================================================================

    fn count(&self, predicate: impl FnMut(&T) -> bool) -> usize {
        iterate::count(self.as_slice(), predicate)
    }

    fn count_with<P: ?Sized>(&self, predicate: impl FnMut(&T, &P) -> bool, parameter: &P) -> usize {
        iterate::count_with(self.as_slice(), predicate, parameter)
    }

    fn any_satisfy(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        iterate::any_satisfy(self.as_slice(), predicate)
    }

    fn all_satisfy(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        iterate::all_satisfy(self.as_slice(), predicate)
    }

    fn none_satisfy(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        iterate::none_satisfy(self.as_slice(), predicate)
    }

    fn any_satisfy_with<P: ?Sized>(
        &self,
        predicate: impl FnMut(&T, &P) -> bool,
        parameter: &P,
    ) -> bool {
        iterate::any_satisfy_with(self.as_slice(), predicate, parameter)
    }

    fn all_satisfy_with<P: ?Sized>(
        &self,
        predicate: impl FnMut(&T, &P) -> bool,
        parameter: &P,
    ) -> bool {
        iterate::all_satisfy_with(self.as_slice(), predicate, parameter)
    }

    fn none_satisfy_with<P: ?Sized>(
        &self,
        predicate: impl FnMut(&T, &P) -> bool,
        parameter: &P,
    ) -> bool {
        iterate::none_satisfy_with(self.as_slice(), predicate, parameter)
    }

    /// Same size as `other` and `predicate(self[i], other[i])` for every `i`.
    fn corresponds<S>(
        &self,
        other: &(impl ListView<S> + ?Sized),
        mut predicate: impl FnMut(&T, &S) -> bool,
    ) -> bool {
        let items = self.as_slice();
        match other.as_contiguous() {
            Some(others) => iterate::corresponds(items, others, predicate),
            None => {
                items.len() == other.size()
                    && items.iter().enumerate().all(|(index, item)| {
                        other.get(index).is_ok_and(|each| predicate(item, each))
                    })
            }
        }
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    fn select(&self, predicate: impl FnMut(&T) -> bool) -> FastList<T>
    where
        T: Clone,
    {
        self.select_into(predicate, FastList::new())
    }

    fn select_into<R: Extend<T>>(&self, predicate: impl FnMut(&T) -> bool, target: R) -> R
    where
        T: Clone,
    {
        iterate::select(self.as_slice(), predicate, target)
    }

    fn select_with<P: ?Sized>(
        &self,
        predicate: impl FnMut(&T, &P) -> bool,
        parameter: &P,
    ) -> FastList<T>
    where
        T: Clone,
    {
        self.select_with_into(predicate, parameter, FastList::new())
    }

    fn select_with_into<P: ?Sized, R: Extend<T>>(
        &self,
        predicate: impl FnMut(&T, &P) -> bool,
        parameter: &P,
        target: R,
    ) -> R
    where
        T: Clone,
    {
        iterate::select_with(self.as_slice(), predicate, parameter, target)
    }

    fn reject(&self, predicate: impl FnMut(&T) -> bool) -> FastList<T>
    where
        T: Clone,
    {
        self.reject_into(predicate, FastList::new())
    }

    fn reject_into<R: Extend<T>>(&self, predicate: impl FnMut(&T) -> bool, target: R) -> R
    where
        T: Clone,
    {
        iterate::reject(self.as_slice(), predicate, target)
    }

    fn reject_with<P: ?Sized>(
        &self,
        predicate: impl FnMut(&T, &P) -> bool,
        parameter: &P,
    ) -> FastList<T>
    where
        T: Clone,
    {
        self.reject_with_into(predicate, parameter, FastList::new())
    }

    fn reject_with_into<P: ?Sized, R: Extend<T>>(
        &self,
        predicate: impl FnMut(&T, &P) -> bool,
        parameter: &P,
        target: R,
    ) -> R
    where
        T: Clone,
    {
        iterate::reject_with(self.as_slice(), predicate, parameter, target)
    }

    /// Partitions in one pass into `(selected, rejected)`.
    fn select_and_reject_with<P: ?Sized>(
        &self,
        predicate: impl FnMut(&T, &P) -> bool,
        parameter: &P,
    ) -> (FastList<T>, FastList<T>)
    where
        T: Clone,
    {
        iterate::select_and_reject_with(self.as_slice(), predicate, parameter)
    }

    // ========================================================================
    // Mapping and folding
    // ========================================================================

    fn collect<V>(&self, function: impl FnMut(&T) -> V) -> FastList<V> {
        self.collect_into(function, FastList::with_capacity(self.as_slice().len()))
    }

    fn collect_into<V, R: Extend<V>>(&self, function: impl FnMut(&T) -> V, target: R) -> R {
        iterate::collect(self.as_slice(), function, target)
    }

    fn collect_with<P: ?Sized, V>(
        &self,
        function: impl FnMut(&T, &P) -> V,
        parameter: &P,
    ) -> FastList<V> {
        self.collect_with_into(
            function,
            parameter,
            FastList::with_capacity(self.as_slice().len()),
        )
    }

    fn collect_with_into<P: ?Sized, V, R: Extend<V>>(
        &self,
        function: impl FnMut(&T, &P) -> V,
        parameter: &P,
        target: R,
    ) -> R {
        iterate::collect_with(self.as_slice(), function, parameter, target)
    }

    /// Maps only the elements accepted by `predicate`.
    fn collect_if<V>(
        &self,
        predicate: impl FnMut(&T) -> bool,
        function: impl FnMut(&T) -> V,
    ) -> FastList<V> {
        self.collect_if_into(predicate, function, FastList::new())
    }

    fn collect_if_into<V, R: Extend<V>>(
        &self,
        predicate: impl FnMut(&T) -> bool,
        function: impl FnMut(&T) -> V,
        target: R,
    ) -> R {
        iterate::collect_if(self.as_slice(), predicate, function, target)
    }

    fn flat_collect<I: IntoIterator>(&self, function: impl FnMut(&T) -> I) -> FastList<I::Item> {
        self.flat_collect_into(function, FastList::with_capacity(self.as_slice().len()))
    }

    fn flat_collect_into<I, R>(&self, function: impl FnMut(&T) -> I, target: R) -> R
    where
        I: IntoIterator,
        R: Extend<I::Item>,
    {
        iterate::flat_collect(self.as_slice(), function, target)
    }

    fn inject_into<IV>(&self, injected_value: IV, function: impl FnMut(IV, &T) -> IV) -> IV {
        iterate::inject_into(injected_value, self.as_slice(), function)
    }

    fn inject_into_with<IV, P: ?Sized>(
        &self,
        injected_value: IV,
        function: impl FnMut(IV, &T, &P) -> IV,
        parameter: &P,
    ) -> IV {
        iterate::inject_into_with(injected_value, self.as_slice(), function, parameter)
    }

    // ========================================================================
    // Derived lists
    // ========================================================================

    /// Drops repeated elements, keeping each first occurrence in place.
    fn distinct(&self) -> FastList<T>
    where
        T: Clone + Eq + Hash,
    {
        iterate::distinct(self.as_slice(), FastList::new())
    }

    fn distinct_by<H>(&self, strategy: &H) -> FastList<T>
    where
        T: Clone,
        H: HashingStrategy<T> + ?Sized,
    {
        iterate::distinct_by(self.as_slice(), strategy, FastList::new())
    }

    /// The first `count` elements; all of them when `count` exceeds the size.
    fn take(&self, count: usize) -> FastList<T>
    where
        T: Clone,
    {
        let items = self.as_slice();
        iterate::take(items, count, FastList::with_capacity(count.min(items.len())))
    }

    /// Everything after the first `count` elements.
    fn drop(&self, count: usize) -> FastList<T>
    where
        T: Clone,
    {
        let items = self.as_slice();
        iterate::drop(items, count, FastList::with_capacity(items.len().saturating_sub(count)))
    }

    /// A borrowed view of `from..to`. Nothing is copied.
    fn sub_list(&self, from: usize, to: usize) -> Result<ListAdapter<'_, T>> {
        let items = self.as_slice();
        range_check(from, to, items.len())?;
        Ok(ListAdapter::new(&items[from..to]))
    }

    fn to_list(&self) -> FastList<T>
    where
        T: Clone,
    {
        FastList::from(self.as_slice().to_vec())
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// A fresh forward iterator on every call.
    fn iterator(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// A bidirectional cursor positioned before element `index`.
    fn list_iterator(&self, index: usize) -> Result<ListIter<'_, T>> {
        let items = self.as_slice();
        if index > items.len() {
            tracing::debug!(index, size = items.len(), "list iterator start out of range");
            return Err(ListError::IndexOutOfRange {
                index,
                size: items.len(),
            });
        }
        Ok(ListIter::new(items, index))
    }

    // ========================================================================
    // Copying out
    // ========================================================================

    fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.as_slice().into()
    }

    /// Copies into `buffer` when it has room for every element, writing
    /// `None` into the slot just past the last element if the buffer is
    /// longer. Otherwise returns a new buffer of exactly `size` slots.
    fn to_array_into(&self, mut buffer: Vec<Option<T>>) -> Vec<Option<T>>
    where
        T: Clone,
    {
        let items = self.as_slice();
        if buffer.len() < items.len() {
            return items.iter().cloned().map(Some).collect();
        }
        for (slot, item) in buffer.iter_mut().zip(items) {
            *slot = Some(item.clone());
        }
        if buffer.len() > items.len() {
            buffer[items.len()] = None;
        }
        buffer
    }

    // ========================================================================
    // Rendering and hashing
    // ========================================================================

    fn append_string<W>(&self, sink: &mut W, start: &str, separator: &str, end: &str) -> fmt::Result
    where
        T: fmt::Display,
        W: fmt::Write + ?Sized,
    {
        iterate::append_string(self.as_slice(), sink, start, separator, end)
    }

    fn make_string(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        self.append_string(&mut out, "", separator, "")
            .expect("a Display implementation returned an error unexpectedly");
        out
    }

    /// `h = 31 * h + hash(e)` over the elements, starting from 1.
    fn ordered_hash_code<S: BuildHasher>(&self, build_hasher: &S) -> u64
    where
        T: Hash,
    {
        iterate::ordered_hash_code(self.as_slice(), build_hasher)
    }
}
