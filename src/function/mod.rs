//! Function decorators.
//!
//! Each decorator wraps a caller-supplied callback and returns a struct that
//! owns the wrapper's private state next to the callback. The state is
//! created when the wrapper is built, changes only through the wrapper's
//! `call`, and is dropped with the wrapper. Wrapping the same callback twice
//! produces two independent states; sharing one wrapper shares its state.
//!
//! - [`once`]: Runs the callback on the first call only
//! - [`memoize`] / [`memoize_by`]: Caches results per argument key
//! - [`delay`]: Runs the callback once after a wait
//! - [`throttle`]: Runs the callback at most once per window, plus a
//!   trailing run
//! - [`identity`]: Returns its argument unchanged
//!
//! Callbacks take a single argument; use a tuple for several and `()` for
//! none. A callback returning `Result` gets its `Err` handed back unchanged.
//!
//! # Examples
//!
//! ```rust
//! use underbar::function::{memoize, once};
//!
//! let initialize = once(|()| "ready");
//! assert_eq!(initialize.call(()), "ready");
//!
//! let length = memoize(|text: String| text.len());
//! assert_eq!(length.call("four".to_string()), 4);
//! ```

mod delay;
mod memoize;
mod once;
mod throttle;
mod utils;

pub use delay::delay;
pub use memoize::{Memoize, memoize, memoize_by};
pub use once::{Once, once};
pub use throttle::{Throttle, throttle};
pub use utils::identity;
