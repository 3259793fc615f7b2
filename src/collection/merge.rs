//! Shallow merges of key-value mappings.
//!
//! Both operations mutate and return the target so calls can be chained.
//! Sources are applied left to right.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A key-value mapping that can be the target of a merge.
pub trait Mapping {
    /// The key type.
    type Key;
    /// The value type.
    type Value;

    /// Returns `true` if `key` is present.
    fn has_key(&self, key: &Self::Key) -> bool;

    /// Inserts or replaces the value stored under `key`.
    fn put(&mut self, key: Self::Key, value: Self::Value);

    /// Returns an iterator over every `(key, value)` pair.
    fn pairs(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K: Hash + Eq, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

/// Copies every entry of every source into `target`, overwriting existing
/// keys. Later sources win over earlier ones.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::extend;
/// use std::collections::HashMap;
///
/// let mut settings = HashMap::from([("color", "red"), ("size", "m")]);
/// let overrides = HashMap::from([("size", "l")]);
/// let extra = HashMap::from([("font", "serif"), ("size", "xl")]);
///
/// extend(&mut settings, [&overrides, &extra]);
/// assert_eq!(settings["color"], "red");
/// assert_eq!(settings["size"], "xl");
/// assert_eq!(settings["font"], "serif");
/// ```
pub fn extend<'t, 's, M, I>(target: &'t mut M, sources: I) -> &'t mut M
where
    M: Mapping + 's,
    M::Key: Clone,
    M::Value: Clone,
    I: IntoIterator<Item = &'s M>,
{
    for source in sources {
        for (key, value) in source.pairs() {
            target.put(key.clone(), value.clone());
        }
    }
    target
}

/// Copies entries of every source into `target` only for keys `target` does
/// not already hold. Earlier sources win over later ones.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::defaults;
/// use std::collections::BTreeMap;
///
/// let mut options = BTreeMap::from([("retries", 5)]);
/// let fallback = BTreeMap::from([("retries", 3), ("timeout", 30)]);
///
/// defaults(&mut options, [&fallback]);
/// assert_eq!(options, BTreeMap::from([("retries", 5), ("timeout", 30)]));
/// ```
pub fn defaults<'t, 's, M, I>(target: &'t mut M, sources: I) -> &'t mut M
where
    M: Mapping + 's,
    M::Key: Clone,
    M::Value: Clone,
    I: IntoIterator<Item = &'s M>,
{
    for source in sources {
        for (key, value) in source.pairs() {
            if !target.has_key(key) {
                target.put(key.clone(), value.clone());
            }
        }
    }
    target
}
