//! Algorithmic collection transforms.
//!
//! Every transform returns a new collection and leaves its input untouched.
//!
//! - [`flatten`] / [`flatten_with`]: Depth-first flattening of [`Nested`]
//!   sequences, fully or one level deep
//! - [`sort_by`]: Stable sort by a property or computed key
//! - [`shuffle`] / [`shuffle_with`]: Random permutation that never returns
//!   the input order
//! - [`zip`] / [`zip_pair`]: Position-wise grouping, padded with `None`
//! - [`intersection`] / [`difference`]: Set algebra by value equality
//! - [`invoke`]: Calls a named method or callback on every element
//!
//! Operations choosing between "a name" and "a callback" take a tagged enum
//! ([`Criterion`], [`Invocation`]) that is resolved once per call. A plain
//! `&str` converts into the by-name variant.
//!
//! # Examples
//!
//! ```rust
//! use underbar::nested;
//! use underbar::transform::{difference, flatten, intersection};
//!
//! let flat = flatten(&nested![1, [2, [3, [4]], 5]]);
//! assert_eq!(flat, vec![1, 2, 3, 4, 5]);
//!
//! assert_eq!(intersection(&[vec![1, 2, 3], vec![2, 3, 4]]), vec![2, 3]);
//! assert_eq!(difference(&[1, 2, 3, 4], &[vec![2, 4]]), vec![1, 3]);
//! ```

mod invoke;
mod nested;
mod set;
mod shuffle;
mod sort;

pub use invoke::{Invocation, Methods, invoke};
pub use nested::{FlattenOptions, Nested, flatten, flatten_with};
pub use set::{difference, intersection, zip, zip_pair};
pub use shuffle::{shuffle, shuffle_with};
pub use sort::{Criterion, sort_by};
