use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;

use hashbrown::DefaultHashBuilder;

/// Caller-supplied equivalence for hash-based helpers such as
/// [`distinct_by`](crate::distinct_by).
///
/// Implementations must keep the usual contract: `equals(a, b)` implies
/// `hash_code(a) == hash_code(b)`.
pub trait HashingStrategy<T: ?Sized> {
    fn hash_code(&self, item: &T) -> u64;

    fn equals(&self, left: &T, right: &T) -> bool;
}

impl<T: ?Sized, H: HashingStrategy<T> + ?Sized> HashingStrategy<T> for &H {
    fn hash_code(&self, item: &T) -> u64 {
        (**self).hash_code(item)
    }

    fn equals(&self, left: &T, right: &T) -> bool {
        (**self).equals(left, right)
    }
}

/// Uses the element's own `Eq` and `Hash`.
pub struct NaturalHashingStrategy<S = DefaultHashBuilder> {
    build_hasher: S,
}

impl NaturalHashingStrategy {
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl<S> NaturalHashingStrategy<S> {
    pub fn with_hasher(build_hasher: S) -> Self {
        Self { build_hasher }
    }
}

impl Default for NaturalHashingStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + ?Sized, S: BuildHasher> HashingStrategy<T> for NaturalHashingStrategy<S> {
    fn hash_code(&self, item: &T) -> u64 {
        self.build_hasher.hash_one(item)
    }

    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

/// Compares elements by a derived key.
///
/// Built with [`from_function`].
pub struct KeyHashingStrategy<F, T: ?Sized, S = DefaultHashBuilder> {
    function: F,
    build_hasher: S,
    _marker: PhantomData<fn(&T)>,
}

/// Two elements are equivalent when `function` maps them to equal keys.
///
/// ```
/// use listkit_iterate::{HashingStrategy, from_function};
///
/// let by_len = from_function(|s: &&str| s.len());
/// assert!(by_len.equals(&"abc", &"xyz"));
/// assert_eq!(by_len.hash_code(&"abc"), by_len.hash_code(&"xyz"));
/// ```
pub fn from_function<T, K, F>(function: F) -> KeyHashingStrategy<F, T>
where
    T: ?Sized,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    KeyHashingStrategy {
        function,
        build_hasher: DefaultHashBuilder::default(),
        _marker: PhantomData,
    }
}

impl<T, K, F, S> HashingStrategy<T> for KeyHashingStrategy<F, T, S>
where
    T: ?Sized,
    K: Eq + Hash,
    F: Fn(&T) -> K,
    S: BuildHasher,
{
    fn hash_code(&self, item: &T) -> u64 {
        self.build_hasher.hash_one((self.function)(item))
    }

    fn equals(&self, left: &T, right: &T) -> bool {
        (self.function)(left) == (self.function)(right)
    }
}
