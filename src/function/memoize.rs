//! Result-caching wrappers.

use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use parking_lot::Mutex;

/// A callable that caches its callback's result per cache key.
///
/// The cache key is derived from the argument by a key function: the
/// argument itself for [`memoize`], a caller-supplied function for
/// [`memoize_by`]. Keys are compared with their `Eq` implementation, so any
/// `Hash + Eq` type can serve as a key, not only primitives.
///
/// Entries are never evicted; the cache lives as long as the wrapper.
///
/// # Re-entry
///
/// The callback runs while the cache lock is held, which makes "at most one
/// computation per key" hold across threads. Calling the same wrapper from
/// inside its own callback deadlocks.
///
/// # Examples
///
/// ```rust
/// use underbar::function::memoize;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let evaluations = AtomicUsize::new(0);
/// let square = memoize(|number: u64| {
///     evaluations.fetch_add(1, Ordering::SeqCst);
///     number * number
/// });
///
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.call(3), 9);
/// assert_eq!(evaluations.load(Ordering::SeqCst), 2);
/// assert_eq!(square.len(), 2);
/// ```
pub struct Memoize<F, H, A, K, R, S = RandomState> {
    callback: F,
    key: H,
    cache: Mutex<HashMap<K, R, S>>,
    _arguments: PhantomData<fn(A)>,
}

impl<F, H, A, K, R> Memoize<F, H, A, K, R>
where
    F: Fn(A) -> R,
    H: Fn(&A) -> K,
    K: Hash + Eq,
    R: Clone,
{
    /// Wraps `callback`, caching results under `key(&argument)`.
    pub fn with_key(callback: F, key: H) -> Self {
        Self::with_key_and_hasher(callback, key, RandomState::new())
    }
}

impl<F, H, A, K, R, S> Memoize<F, H, A, K, R, S>
where
    F: Fn(A) -> R,
    H: Fn(&A) -> K,
    K: Hash + Eq,
    R: Clone,
    S: BuildHasher,
{
    /// Wraps `callback` using `hasher` for the cache.
    pub fn with_key_and_hasher(callback: F, key: H, hasher: S) -> Self {
        Self {
            callback,
            key,
            cache: Mutex::new(HashMap::with_hasher(hasher)),
            _arguments: PhantomData,
        }
    }

    /// Returns the cached result for `argument`'s key, computing and storing
    /// it first if the key has not been seen.
    pub fn call(&self, argument: A) -> R {
        let key = (self.key)(&argument);
        let mut cache = self.cache.lock();
        if let Some(result) = cache.get(&key) {
            return result.clone();
        }

        let result = (self.callback)(argument);
        cache.insert(key, result.clone());
        result
    }

    /// Returns `true` if a result is cached under `key`.
    pub fn is_cached(&self, key: &K) -> bool {
        self.cache.lock().contains_key(key)
    }
}

impl<F, H, A, K, R, S> Memoize<F, H, A, K, R, S> {
    /// Returns the number of cached results.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

impl<F, H, A, K, R, S> fmt::Debug for Memoize<F, H, A, K, R, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.len())
            .finish_non_exhaustive()
    }
}

/// Creates a [`Memoize`] wrapper keyed by the argument itself.
pub fn memoize<F, A, R>(callback: F) -> Memoize<F, fn(&A) -> A, A, A, R>
where
    F: Fn(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    Memoize::with_key(callback, A::clone as fn(&A) -> A)
}

/// Creates a [`Memoize`] wrapper keyed by `key(&argument)`.
///
/// # Examples
///
/// ```rust
/// use underbar::function::memoize_by;
///
/// let greeting = memoize_by(
///     |name: String| format!("hello, {name}"),
///     |name: &String| name.to_lowercase(),
/// );
///
/// assert_eq!(greeting.call("Ada".to_string()), "hello, Ada");
/// // Same key after lowering, so the first result is returned.
/// assert_eq!(greeting.call("ADA".to_string()), "hello, Ada");
/// ```
pub fn memoize_by<F, H, A, K, R>(callback: F, key: H) -> Memoize<F, H, A, K, R>
where
    F: Fn(A) -> R,
    H: Fn(&A) -> K,
    K: Hash + Eq,
    R: Clone,
{
    Memoize::with_key(callback, key)
}
