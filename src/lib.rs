//! # underbar
//!
//! A functional toolkit for Rust providing generic operations over sequences
//! and mappings, multi-container set algebra, and stateful function
//! combinators.
//!
//! ## Overview
//!
//! - **Collections**: `for_each`, `map`, `filter`, `reduce`, `every`, `some`,
//!   `pluck` and friends over slices and maps, plus shallow map merges
//! - **Transforms**: `flatten`, `sort_by`, `shuffle`, `zip`, `intersection`,
//!   `difference`, `invoke`
//! - **Function combinators**: `once`, `memoize`, `delay`, `throttle`
//! - **Scheduling**: a `Scheduler` abstraction with a deterministic virtual
//!   clock and a tokio-backed implementation
//!
//! ## Feature Flags
//!
//! - `collection`: Traversal and merge operations
//! - `schedule`: The scheduler abstraction and `ManualScheduler`
//! - `function`: Function combinators
//! - `transform`: Algorithmic collection transforms
//! - `async`: `TokioScheduler`
//! - `serde`: Serialization support for nested sequences
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let nested = vec![Nested::item(1), Nested::sequence([Nested::item(2), Nested::item(3)])];
//! assert_eq!(flatten(&nested), vec![1, 2, 3]);
//!
//! let add_one = once(|value: i32| value + 1);
//! assert_eq!(add_one.call(1), 2);
//! assert_eq!(add_one.call(10), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "schedule")]
    pub use crate::schedule::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "transform")]
    pub use crate::transform::*;
}

pub mod error;

pub use error::{Error, Result};

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "schedule")]
pub mod schedule;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "transform")]
pub mod transform;
