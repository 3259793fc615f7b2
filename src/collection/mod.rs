//! Traversal and merge operations over sequences and mappings.
//!
//! This module provides the single-pass building blocks the rest of the
//! toolkit is written in terms of. None of these operations retain state
//! between calls.
//!
//! - [`Collection`]: A uniform view over sequences and mappings
//! - [`for_each`], [`map`], [`reduce`], [`fold`], [`contains`], [`every`],
//!   [`some`]: Operations accepting either shape
//! - [`filter`], [`reject`], [`uniq`], [`index_of`], [`first`], [`last`]:
//!   Operations on ordered sequences
//! - [`Record`] and [`pluck`]: Reading named properties
//! - [`extend`] and [`defaults`]: Shallow mapping merges
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{every, map, reduce};
//! use std::collections::HashMap;
//!
//! let numbers = vec![1, 2, 3];
//! assert_eq!(map(&numbers, |number| number * 2), vec![2, 4, 6]);
//! assert_eq!(reduce(&numbers, |total, number| total + number), Some(6));
//!
//! let ages = HashMap::from([("alice", 31), ("bob", 27)]);
//! assert!(every(&ages, |age| *age > 18));
//! ```

mod merge;
mod record;
mod sequence;
mod traverse;

pub use merge::{Mapping, defaults, extend};
pub use record::{Record, pluck};
pub use sequence::{filter, first, index_of, last, reject, take_first, take_last, uniq};
pub use traverse::{
    Collection, all_true, any_true, contains, every, fold, for_each, map, reduce, some,
};
