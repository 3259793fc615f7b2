//! Traversals accepting both sequences and mappings.
//!
//! Every function in this module is generic over [`Collection`], so the same
//! call works on a `Vec`, a slice, a `HashMap` or a `BTreeMap`. Mapping
//! traversals visit entries in the map's own iteration order; none of the
//! operations here depend on that order for their result, except
//! [`for_each`] and [`map`] whose output order follows the traversal.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A container that can be traversed as `(key, value)` entries.
///
/// Sequences use the element index as the key; mappings use a reference to
/// the entry key.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Collection;
///
/// let letters = vec!['a', 'b'];
/// let entries: Vec<(usize, &char)> = letters.entries().collect();
/// assert_eq!(entries, vec![(0, &'a'), (1, &'b')]);
/// ```
pub trait Collection {
    /// The key identifying an entry.
    type Key<'a>
    where
        Self: 'a;

    /// The stored value type.
    type Value;

    /// Returns an iterator over every entry of the collection.
    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)>;

    /// Returns an iterator over the values of the collection.
    fn values(&self) -> impl Iterator<Item = &Self::Value> {
        self.entries().map(|(_, value)| value)
    }
}

impl<T> Collection for [T] {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    fn entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.iter().enumerate()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    fn entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.iter().enumerate()
    }
}

impl<T> Collection for Vec<T> {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    fn entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.iter().enumerate()
    }
}

impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Key<'a>
        = &'a K
    where
        Self: 'a;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Key<'a>
        = &'a K
    where
        Self: 'a;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

/// Calls `function(value, key)` for every entry of `collection`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::for_each;
///
/// let mut visited = Vec::new();
/// for_each(&vec!["x", "y"], |value, index| visited.push((index, *value)));
/// assert_eq!(visited, vec![(0, "x"), (1, "y")]);
/// ```
pub fn for_each<'a, C, F>(collection: &'a C, mut function: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value, C::Key<'a>),
{
    for (key, value) in collection.entries() {
        function(value, key);
    }
}

/// Applies `function` to every value and collects the results in traversal
/// order.
pub fn map<'a, C, U, F>(collection: &'a C, function: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value) -> U,
{
    collection.values().map(function).collect()
}

/// Accumulates every value into `seed` with `function`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::fold;
///
/// let total = fold(&[1, 2, 3], 10, |total, number| total + number);
/// assert_eq!(total, 16);
/// ```
pub fn fold<'a, C, A, F>(collection: &'a C, seed: A, function: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &'a C::Value) -> A,
{
    collection.values().fold(seed, function)
}

/// Accumulates the values of `collection` using the first value as the seed.
///
/// The first value is never passed to `function`: it becomes the initial
/// accumulator and the traversal continues from the second value. Returns
/// `None` for an empty collection.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce;
///
/// // The single value is returned as-is regardless of the function.
/// assert_eq!(reduce(&[5], |total, number| total + number * number), Some(5));
/// assert_eq!(reduce(&[1, 2, 3], |total, number| total + number), Some(6));
/// assert_eq!(reduce(&Vec::<i32>::new(), |total, number| total + number), None);
/// ```
pub fn reduce<'a, C, F>(collection: &'a C, mut function: F) -> Option<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(C::Value, &'a C::Value) -> C::Value,
{
    let mut values = collection.values();
    let seed = values.next()?.clone();
    Some(values.fold(seed, |accumulator, value| function(accumulator, value)))
}

/// Returns `true` if any value of `collection` equals `target`.
pub fn contains<C>(collection: &C, target: &C::Value) -> bool
where
    C: Collection + ?Sized,
    C::Value: PartialEq,
{
    collection.values().any(|value| value == target)
}

/// Returns `true` if `predicate` holds for every value.
///
/// An empty collection satisfies every predicate.
pub fn every<'a, C, P>(collection: &'a C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&'a C::Value) -> bool,
{
    collection.values().all(|value| predicate(value))
}

/// Returns `true` if `predicate` holds for at least one value.
///
/// An empty collection satisfies no predicate.
pub fn some<'a, C, P>(collection: &'a C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&'a C::Value) -> bool,
{
    collection.values().any(|value| predicate(value))
}

/// [`every`] with the identity predicate.
pub fn all_true<C>(collection: &C) -> bool
where
    C: Collection<Value = bool> + ?Sized,
{
    every(collection, |value| *value)
}

/// [`some`] with the identity predicate.
pub fn any_true<C>(collection: &C) -> bool
where
    C: Collection<Value = bool> + ?Sized,
{
    some(collection, |value| *value)
}
