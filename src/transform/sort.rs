//! Stable sorting by a derived key.

use std::fmt;

use crate::collection::Record;
use crate::error::{Error, Result};

/// How [`sort_by`] derives the sort key of an element.
///
/// Build one with [`Criterion::property`] (or `"name".into()`) to sort
/// records by a named property, or with [`Criterion::callback`] to sort by a
/// computed key.
pub enum Criterion<'a, T, K> {
    /// Read the key from the named property of each record.
    ByProperty {
        /// The property name.
        name: &'a str,
        /// Reads the property from a record, `None` if it does not exist.
        read: fn(&T, &str) -> Option<K>,
    },
    /// Compute the key with a callback.
    ByCallback(Box<dyn Fn(&T) -> K + 'a>),
}

impl<'a, T, K> Criterion<'a, T, K> {
    /// Sorts by the property called `name`.
    pub fn property(name: &'a str) -> Self
    where
        T: Record<Property = K>,
    {
        Self::ByProperty {
            name,
            read: T::property,
        }
    }

    /// Sorts by the key `callback` computes for each element.
    pub fn callback(callback: impl Fn(&T) -> K + 'a) -> Self {
        Self::ByCallback(Box::new(callback))
    }

    fn key_of(&self, element: &T) -> Result<K> {
        match self {
            Self::ByProperty { name, read } => {
                read(element, name).ok_or_else(|| Error::unknown_property("sort_by", name))
            }
            Self::ByCallback(callback) => Ok(callback(element)),
        }
    }
}

impl<'a, T: Record> From<&'a str> for Criterion<'a, T, T::Property> {
    fn from(name: &'a str) -> Self {
        Self::property(name)
    }
}

impl<T, K> fmt::Debug for Criterion<'_, T, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByProperty { name, .. } => formatter
                .debug_tuple("ByProperty")
                .field(name)
                .finish(),
            Self::ByCallback(_) => formatter.write_str("ByCallback(<fn>)"),
        }
    }
}

/// Returns a copy of `collection` ordered by the key `criterion` derives from
/// each element.
///
/// Keys use their natural `Ord` ordering and are computed once per element.
/// The sort is stable: elements with equal keys keep their input order.
/// Keys of the form `Option<_>` put `None` (missing or undefined) first.
/// The input is not modified.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the criterion names a property an
/// element does not define.
///
/// # Examples
///
/// ```rust
/// use underbar::transform::{Criterion, sort_by};
/// use std::collections::HashMap;
///
/// let rows = vec![
///     HashMap::from([("n", 3)]),
///     HashMap::from([("n", 1)]),
///     HashMap::new(),
/// ];
/// let sorted = sort_by(&rows, "n").unwrap();
/// assert_eq!(sorted[0].get("n"), None); // missing sorts lowest
/// assert_eq!(sorted[1]["n"], 1);
/// assert_eq!(sorted[2]["n"], 3);
///
/// // Equal lengths keep their input order.
/// let words = vec!["pear", "fig", "kiwi", "plum"];
/// let by_length = sort_by(&words, Criterion::callback(|word: &&str| word.len())).unwrap();
/// assert_eq!(by_length, vec!["fig", "pear", "kiwi", "plum"]);
/// ```
pub fn sort_by<'a, T, K>(collection: &[T], criterion: impl Into<Criterion<'a, T, K>>) -> Result<Vec<T>>
where
    T: Clone + 'a,
    K: Ord,
{
    let criterion = criterion.into();
    let mut keyed = collection
        .iter()
        .map(|element| Ok((criterion.key_of(element)?, element)))
        .collect::<Result<Vec<(K, &T)>>>()?;

    keyed.sort_by(|(left, _), (right, _)| left.cmp(right));
    Ok(keyed.into_iter().map(|(_, element)| element.clone()).collect())
}
