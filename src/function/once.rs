//! Call-at-most-once wrappers.

use std::fmt;
use std::marker::PhantomData;

use parking_lot::Mutex;

/// The internal state of a [`Once`] wrapper.
#[derive(Debug)]
enum OnceState<F, R> {
    /// The callback has not run yet.
    Pending(F),
    /// The callback ran and produced this result.
    Fired(R),
    /// The callback panicked. The wrapper is now unusable.
    Poisoned,
}

/// A callable that runs its callback on the first call only.
///
/// Every later call returns a clone of the first result, whatever arguments
/// it is given. Multi-argument callbacks take a tuple.
///
/// # Poisoning
///
/// If the callback panics, the wrapper becomes poisoned and every later call
/// panics as well. [`Once::is_poisoned`] reports this state.
///
/// # Re-entry
///
/// The callback runs while the wrapper's lock is held. Calling the same
/// wrapper from inside its own callback deadlocks.
///
/// # Examples
///
/// ```rust
/// use underbar::function::once;
/// use std::cell::Cell;
///
/// let launches = Cell::new(0);
/// let launch = once(|(target, speed): (&str, u32)| {
///     launches.set(launches.get() + 1);
///     format!("{target} at {speed}")
/// });
///
/// assert_eq!(launch.call(("moon", 3)), "moon at 3");
/// assert_eq!(launch.call(("mars", 9)), "moon at 3");
/// assert_eq!(launches.get(), 1);
/// ```
pub struct Once<F, A, R> {
    state: Mutex<OnceState<F, R>>,
    _arguments: PhantomData<fn(A)>,
}

impl<F, A, R> Once<F, A, R>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    /// Wraps `callback`.
    pub fn new(callback: F) -> Self {
        Self {
            state: Mutex::new(OnceState::Pending(callback)),
            _arguments: PhantomData,
        }
    }

    /// Runs the callback with `arguments` on the first call and returns the
    /// recorded result on every call.
    ///
    /// # Panics
    ///
    /// Panics if the wrapper is poisoned, or propagates the callback's own
    /// panic on the call that runs it.
    pub fn call(&self, arguments: A) -> R {
        let mut state = self.state.lock();
        if let OnceState::Fired(result) = &*state {
            return result.clone();
        }

        match std::mem::replace(&mut *state, OnceState::Poisoned) {
            OnceState::Pending(callback) => {
                let result = callback(arguments);
                *state = OnceState::Fired(result.clone());
                result
            }
            OnceState::Fired(_) | OnceState::Poisoned => {
                panic!("Once wrapper has been poisoned")
            }
        }
    }
}

impl<F, A, R> Once<F, A, R> {
    /// Returns `true` once the callback has completed.
    pub fn is_fired(&self) -> bool {
        matches!(*self.state.lock(), OnceState::Fired(_))
    }

    /// Returns `true` if the callback panicked.
    pub fn is_poisoned(&self) -> bool {
        matches!(*self.state.lock(), OnceState::Poisoned)
    }
}

impl<F, A, R: fmt::Debug> fmt::Debug for Once<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.lock() {
            OnceState::Pending(_) => formatter.write_str("Once(<pending>)"),
            OnceState::Fired(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Poisoned => formatter.write_str("Once(<poisoned>)"),
        }
    }
}

/// Creates a [`Once`] wrapper around `callback`.
pub fn once<F, A, R>(callback: F) -> Once<F, A, R>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    Once::new(callback)
}
