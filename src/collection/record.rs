//! Named property access.
//!
//! A [`Record`] is anything whose properties can be read by name. This is
//! the seam used by [`pluck`] and by `sort_by`'s `Criterion::ByProperty`.
//!
//! Two kinds of absence are distinguished:
//!
//! - a name the record type does not define at all: `property` returns
//!   `None` and the calling operation reports `Error::InvalidArgument`;
//! - a defined property that currently holds no value: the record chooses an
//!   `Option` property type and returns `Some(None)`.
//!
//! String-keyed maps define every name, so a missing key reads as
//! `Some(None)`.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::error::{Error, Result};

/// A value with properties addressable by name.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Record;
///
/// #[derive(Clone)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// enum PersonField {
///     Name(String),
///     Age(u32),
/// }
///
/// impl Record for Person {
///     type Property = PersonField;
///
///     fn property(&self, name: &str) -> Option<PersonField> {
///         match name {
///             "name" => Some(PersonField::Name(self.name.clone())),
///             "age" => Some(PersonField::Age(self.age)),
///             _ => None,
///         }
///     }
/// }
///
/// let person = Person { name: "Ada".into(), age: 36 };
/// assert_eq!(person.property("age"), Some(PersonField::Age(36)));
/// assert_eq!(person.property("height"), None);
/// ```
pub trait Record {
    /// The type of value produced when reading a property.
    type Property;

    /// Reads the property called `name`.
    ///
    /// Returns `None` if `name` is not a property of this record.
    fn property(&self, name: &str) -> Option<Self::Property>;
}

impl<K, V, S> Record for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: Clone,
    S: BuildHasher,
{
    type Property = Option<V>;

    fn property(&self, name: &str) -> Option<Option<V>> {
        Some(self.get(name).cloned())
    }
}

impl<K, V> Record for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Clone,
{
    type Property = Option<V>;

    fn property(&self, name: &str) -> Option<Option<V>> {
        Some(self.get(name).cloned())
    }
}

/// Reads the property `name` from every record, in order.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if any record does not define `name`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::pluck;
/// use std::collections::HashMap;
///
/// let people = vec![
///     HashMap::from([("age", 31)]),
///     HashMap::from([("age", 27)]),
///     HashMap::new(),
/// ];
/// let ages = pluck(&people, "age").unwrap();
/// assert_eq!(ages, vec![Some(31), Some(27), None]);
/// ```
pub fn pluck<R: Record>(records: &[R], name: &str) -> Result<Vec<R::Property>> {
    records
        .iter()
        .map(|record| {
            record
                .property(name)
                .ok_or_else(|| Error::unknown_property("pluck", name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        x: i32,
    }

    impl Record for Point {
        type Property = i32;

        fn property(&self, name: &str) -> Option<i32> {
            (name == "x").then_some(self.x)
        }
    }

    #[test]
    fn test_pluck_struct_records() {
        let points = [Point { x: 3 }, Point { x: -1 }];
        assert_eq!(pluck(&points, "x"), Ok(vec![3, -1]));
    }

    #[test]
    fn test_pluck_unknown_property_fails_fast() {
        let points = [Point { x: 3 }];
        assert_eq!(
            pluck(&points, "y"),
            Err(Error::unknown_property("pluck", "y"))
        );
    }

    #[test]
    fn test_btreemap_missing_key_reads_as_none() {
        let record: BTreeMap<String, u8> = BTreeMap::from([("a".to_string(), 1)]);
        assert_eq!(record.property("a"), Some(Some(1)));
        assert_eq!(record.property("b"), Some(None));
    }
}
