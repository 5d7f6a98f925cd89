//! Linear-scan helpers shared by every contiguous list in `listkit`.
//!
//! Each function walks a `&[T]` exactly once (or stops early when the answer
//! is decided) and is parameterized by a predicate, mapper, or accumulator
//! closure. List types never re-implement these loops; they hand their slice
//! to the helper:
//!
//! ```
//! use listkit_iterate as iterate;
//!
//! let items = ["a", "b", "a", "c"];
//! assert_eq!(iterate::detect_index(&items, |s| *s == "c"), Some(3));
//! assert_eq!(iterate::count(&items, |s| *s == "a"), 2);
//!
//! let upper: Vec<String> = iterate::collect(&items, |s| s.to_uppercase(), Vec::new());
//! assert_eq!(upper, ["A", "B", "A", "C"]);
//! ```
//!
//! Result-producing helpers take the target container by value and return it,
//! so callers pick the container (`Vec`, a list type, anything `Extend`).

#![no_std]

extern crate alloc;

use core::fmt;
use core::hash::{BuildHasher, Hash};

use hashbrown::{HashSet, HashTable};

mod strategy;

pub use strategy::{HashingStrategy, KeyHashingStrategy, NaturalHashingStrategy, from_function};

// ============================================================================
// Visiting
// ============================================================================

/// Calls `procedure` with every element and its index, in order.
pub fn for_each_with_index<T>(items: &[T], mut procedure: impl FnMut(&T, usize)) {
    for (index, item) in items.iter().enumerate() {
        procedure(item, index);
    }
}

/// Visits `items[from..to]` with indices.
///
/// Bounds are not checked here: callers validate the range first.
pub fn for_each_with_index_without_checks<T>(
    items: &[T],
    from: usize,
    to: usize,
    mut procedure: impl FnMut(&T, usize),
) {
    for (offset, item) in items[from..to].iter().enumerate() {
        procedure(item, from + offset);
    }
}

/// Same as [`for_each_with_index_without_checks`] without the index.
pub fn for_each_without_checks<T>(
    items: &[T],
    from: usize,
    to: usize,
    procedure: impl FnMut(&T),
) {
    items[from..to].iter().for_each(procedure);
}

// ============================================================================
// Searching
// ============================================================================

pub fn detect<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
    items.iter().find(|item| predicate(item))
}

pub fn detect_with<'a, T, P: ?Sized>(
    items: &'a [T],
    mut predicate: impl FnMut(&T, &P) -> bool,
    parameter: &P,
) -> Option<&'a T> {
    items.iter().find(|item| predicate(item, parameter))
}

pub fn detect_index<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> Option<usize> {
    items.iter().position(predicate)
}

pub fn detect_last_index<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> Option<usize> {
    items.iter().rposition(predicate)
}

pub fn index_of<T, U>(items: &[T], needle: &U) -> Option<usize>
where
    T: PartialEq<U>,
    U: ?Sized,
{
    items.iter().position(|item| item == needle)
}

pub fn last_index_of<T, U>(items: &[T], needle: &U) -> Option<usize>
where
    T: PartialEq<U>,
    U: ?Sized,
{
    items.iter().rposition(|item| item == needle)
}

// ============================================================================
// Counting and quantifiers
// ============================================================================

pub fn count<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> usize {
    items.iter().filter(|item| predicate(item)).count()
}

pub fn count_with<T, P: ?Sized>(
    items: &[T],
    mut predicate: impl FnMut(&T, &P) -> bool,
    parameter: &P,
) -> usize {
    items.iter().filter(|item| predicate(item, parameter)).count()
}

pub fn any_satisfy<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    items.iter().any(predicate)
}

pub fn all_satisfy<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    items.iter().all(predicate)
}

pub fn none_satisfy<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> bool {
    !items.iter().any(|item| predicate(item))
}

pub fn any_satisfy_with<T, P: ?Sized>(
    items: &[T],
    mut predicate: impl FnMut(&T, &P) -> bool,
    parameter: &P,
) -> bool {
    items.iter().any(|item| predicate(item, parameter))
}

pub fn all_satisfy_with<T, P: ?Sized>(
    items: &[T],
    mut predicate: impl FnMut(&T, &P) -> bool,
    parameter: &P,
) -> bool {
    items.iter().all(|item| predicate(item, parameter))
}

pub fn none_satisfy_with<T, P: ?Sized>(
    items: &[T],
    mut predicate: impl FnMut(&T, &P) -> bool,
    parameter: &P,
) -> bool {
    !items.iter().any(|item| predicate(item, parameter))
}

/// True when `other` has the same length and `predicate` holds pairwise.
pub fn corresponds<'o, T, S: 'o, I>(
    items: &[T],
    other: I,
    mut predicate: impl FnMut(&T, &S) -> bool,
) -> bool
where
    I: IntoIterator<Item = &'o S>,
    I::IntoIter: ExactSizeIterator,
{
    let other = other.into_iter();
    if other.len() != items.len() {
        return false;
    }
    items.iter().zip(other).all(|(item, each)| predicate(item, each))
}

// ============================================================================
// Filtering
// ============================================================================

pub fn select<T: Clone, R: Extend<T>>(
    items: &[T],
    mut predicate: impl FnMut(&T) -> bool,
    mut target: R,
) -> R {
    target.extend(items.iter().filter(|item| predicate(item)).cloned());
    target
}

pub fn select_with<T: Clone, P: ?Sized, R: Extend<T>>(
    items: &[T],
    mut predicate: impl FnMut(&T, &P) -> bool,
    parameter: &P,
    mut target: R,
) -> R {
    target.extend(items.iter().filter(|item| predicate(item, parameter)).cloned());
    target
}

pub fn reject<T: Clone, R: Extend<T>>(
    items: &[T],
    mut predicate: impl FnMut(&T) -> bool,
    target: R,
) -> R {
    select(items, |item| !predicate(item), target)
}

pub fn reject_with<T: Clone, P: ?Sized, R: Extend<T>>(
    items: &[T],
    mut predicate: impl FnMut(&T, &P) -> bool,
    parameter: &P,
    target: R,
) -> R {
    select_with(items, |item, p| !predicate(item, p), parameter, target)
}

/// Splits `items` into `(selected, rejected)` in a single pass.
pub fn select_and_reject_with<T, P, R>(
    items: &[T],
    mut predicate: impl FnMut(&T, &P) -> bool,
    parameter: &P,
) -> (R, R)
where
    T: Clone,
    P: ?Sized,
    R: Default + Extend<T>,
{
    let mut selected = R::default();
    let mut rejected = R::default();
    for item in items {
        if predicate(item, parameter) {
            selected.extend(Some(item.clone()));
        } else {
            rejected.extend(Some(item.clone()));
        }
    }
    (selected, rejected)
}

// ============================================================================
// Mapping and folding
// ============================================================================

pub fn collect<T, V, R: Extend<V>>(items: &[T], function: impl FnMut(&T) -> V, mut target: R) -> R {
    target.extend(items.iter().map(function));
    target
}

pub fn collect_with<T, P: ?Sized, V, R: Extend<V>>(
    items: &[T],
    mut function: impl FnMut(&T, &P) -> V,
    parameter: &P,
    mut target: R,
) -> R {
    target.extend(items.iter().map(|item| function(item, parameter)));
    target
}

pub fn collect_if<T, V, R: Extend<V>>(
    items: &[T],
    mut predicate: impl FnMut(&T) -> bool,
    function: impl FnMut(&T) -> V,
    mut target: R,
) -> R {
    target.extend(items.iter().filter(|item| predicate(item)).map(function));
    target
}

pub fn flat_collect<T, I, R>(items: &[T], function: impl FnMut(&T) -> I, mut target: R) -> R
where
    I: IntoIterator,
    R: Extend<I::Item>,
{
    target.extend(items.iter().flat_map(function));
    target
}

pub fn inject_into<T, IV>(injected_value: IV, items: &[T], function: impl FnMut(IV, &T) -> IV) -> IV {
    items.iter().fold(injected_value, function)
}

pub fn inject_into_with<T, IV, P: ?Sized>(
    injected_value: IV,
    items: &[T],
    mut function: impl FnMut(IV, &T, &P) -> IV,
    parameter: &P,
) -> IV {
    items
        .iter()
        .fold(injected_value, |acc, item| function(acc, item, parameter))
}

// ============================================================================
// Slicing
// ============================================================================

/// Appends the first `count` elements (clamped to the length).
pub fn take<T: Clone, R: Extend<T>>(items: &[T], count: usize, mut target: R) -> R {
    let end = count.min(items.len());
    target.extend(items[..end].iter().cloned());
    target
}

/// Appends everything after the first `count` elements (clamped to the length).
pub fn drop<T: Clone, R: Extend<T>>(items: &[T], count: usize, mut target: R) -> R {
    let start = count.min(items.len());
    target.extend(items[start..].iter().cloned());
    target
}

// ============================================================================
// Distinct
// ============================================================================

/// Appends each element the first time an equal element is seen.
pub fn distinct<T, R>(items: &[T], mut target: R) -> R
where
    T: Clone + Eq + Hash,
    R: Extend<T>,
{
    let mut seen: HashSet<&T> = HashSet::with_capacity(items.len());
    target.extend(items.iter().filter(|item| seen.insert(*item)).cloned());
    target
}

/// Like [`distinct`], with equality and hashing supplied by `strategy`.
pub fn distinct_by<T, H, R>(items: &[T], strategy: &H, mut target: R) -> R
where
    T: Clone,
    H: HashingStrategy<T> + ?Sized,
    R: Extend<T>,
{
    // Stores indices into `items` so elements are never cloned twice.
    let mut seen: HashTable<usize> = HashTable::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let hash = strategy.hash_code(item);
        if seen
            .find(hash, |&other| strategy.equals(&items[other], item))
            .is_some()
        {
            continue;
        }
        seen.insert_unique(hash, index, |&other| strategy.hash_code(&items[other]));
        target.extend(Some(item.clone()));
    }
    target
}

// ============================================================================
// Equality and hashing
// ============================================================================

/// Elementwise comparison between two slices.
pub fn array_equals<T, U>(items: &[T], other: &[U]) -> bool
where
    T: PartialEq<U>,
{
    items == other
}

/// The classic sequence hash: `h = 31 * h + hash(e)`, starting from 1.
///
/// Element hashes come from `build_hasher`, so two equal sequences hash
/// equally as long as the same builder is used.
pub fn ordered_hash_code<T: Hash, S: BuildHasher>(items: &[T], build_hasher: &S) -> u64 {
    items.iter().fold(1u64, |hash, item| {
        hash.wrapping_mul(31).wrapping_add(build_hasher.hash_one(item))
    })
}

// ============================================================================
// Rendering
// ============================================================================

/// Writes `start`, the elements separated by `separator`, then `end`.
pub fn append_string<T, W>(
    items: &[T],
    sink: &mut W,
    start: &str,
    separator: &str,
    end: &str,
) -> fmt::Result
where
    T: fmt::Display,
    W: fmt::Write + ?Sized,
{
    sink.write_str(start)?;
    if let Some((first, rest)) = items.split_first() {
        write!(sink, "{first}")?;
        for item in rest {
            sink.write_str(separator)?;
            write!(sink, "{item}")?;
        }
    }
    sink.write_str(end)
}
