//! Rate-limited wrappers with a trailing invocation.
//!
//! # Policy
//!
//! A [`Throttle`] alternates between two states:
//!
//! - **Idle**: the next call invokes the callback immediately and arms a
//!   trailing invocation due `wait` later. The wrapper becomes armed.
//! - **Armed**: calls do not invoke the callback. They replace the arguments
//!   the trailing invocation will use and return the latest result.
//!
//! When the trailing invocation fires it calls the callback with the most
//! recently supplied arguments (the arming call's arguments if nothing else
//! arrived), records the result, and returns the wrapper to idle.
//!
//! `call` always answers with the most recently computed result. A trailing
//! invocation that fired between two calls is therefore visible to the
//! second call even though that caller never triggered it.
//!
//! If the scheduler drops the trailing invocation without running it (for
//! example on shutdown), the window is over: the wrapper counts as idle and
//! the next call tries to arm a new window, reporting the scheduler's error
//! if that fails.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use crate::error::Result;
use crate::schedule::{ScheduleHandle, Scheduler};

enum ThrottleState<A, R> {
    Idle {
        latest: Option<R>,
    },
    Armed {
        latest: R,
        arguments: A,
        generation: u64,
        handle: ScheduleHandle,
    },
}

impl<A, R> ThrottleState<A, R> {
    /// Returns `true` while a trailing invocation can still fire.
    fn is_waiting(&self) -> bool {
        matches!(self, Self::Armed { handle, .. } if !handle.is_cancelled())
    }
}

struct Shared<F, A, R> {
    callback: F,
    state: Mutex<ThrottleState<A, R>>,
    generation: AtomicU64,
}

impl<F, A, R> Shared<F, A, R>
where
    F: Fn(A) -> R,
    R: Clone,
{
    fn fire_trailing(&self, generation: u64) {
        let mut state = self.state.lock();
        let is_current = matches!(
            &*state,
            ThrottleState::Armed { generation: armed, .. } if *armed == generation
        );
        if !is_current {
            return;
        }

        let previous = std::mem::replace(&mut *state, ThrottleState::Idle { latest: None });
        if let ThrottleState::Armed {
            latest, arguments, ..
        } = previous
        {
            // Keep the previous result visible if the callback panics.
            *state = ThrottleState::Idle {
                latest: Some(latest),
            };
            tracing::trace!(generation, "throttle trailing invocation fired");
            let result = (self.callback)(arguments);
            *state = ThrottleState::Idle {
                latest: Some(result),
            };
        }
    }
}

/// A callable that runs its callback at most once per `wait` window, plus
/// one trailing run at the end of the window.
///
/// Cloning a `Throttle` shares the window and the latest result between the
/// clones.
///
/// # Re-entry
///
/// Callback invocations run while the wrapper's lock is held, so the
/// immediate and trailing invocations never overlap. Calling the same
/// wrapper from inside its own callback deadlocks.
///
/// # Examples
///
/// ```rust
/// use underbar::function::throttle;
/// use underbar::schedule::ManualScheduler;
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let report = throttle(
///     scheduler.clone(),
///     move |position: u32| {
///         sink.lock().unwrap().push(position);
///         position * 10
///     },
///     Duration::from_millis(100),
/// );
///
/// assert_eq!(report.call(1).unwrap(), 10); // runs immediately
/// scheduler.advance(Duration::from_millis(50));
/// assert_eq!(report.call(2).unwrap(), 10); // queued as the trailing call
/// scheduler.advance(Duration::from_millis(50));
///
/// assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
/// assert_eq!(report.latest(), Some(20));
/// ```
pub struct Throttle<F, A, R, S> {
    shared: Arc<Shared<F, A, R>>,
    scheduler: S,
    wait: Duration,
}

impl<F, A, R, S> Throttle<F, A, R, S>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Clone + Send + 'static,
    R: Clone + Send + 'static,
    S: Scheduler,
{
    /// Wraps `callback`, allowing one immediate invocation per `wait` window
    /// on `scheduler`.
    pub fn new(scheduler: S, callback: F, wait: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                callback,
                state: Mutex::new(ThrottleState::Idle { latest: None }),
                generation: AtomicU64::new(0),
            }),
            scheduler,
            wait,
        }
    }

    /// Calls the throttled callback.
    ///
    /// When idle, the callback runs immediately with `arguments`, a trailing
    /// invocation is armed, and the fresh result is returned. When armed,
    /// `arguments` replace the trailing invocation's arguments and the most
    /// recent result is returned without running the callback.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchedulingUnavailable`](crate::Error::SchedulingUnavailable)
    /// if the trailing invocation cannot be scheduled. The callback is not run
    /// in that case.
    pub fn call(&self, arguments: A) -> Result<R> {
        let mut state = self.shared.state.lock();

        let latest_before = match &mut *state {
            ThrottleState::Armed {
                latest,
                arguments: pending,
                handle,
                ..
            } if !handle.is_cancelled() => {
                *pending = arguments;
                return Ok(latest.clone());
            }
            ThrottleState::Armed { latest, .. } => Some(latest.clone()),
            ThrottleState::Idle { latest } => latest.take(),
        };

        let generation = self.shared.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let trailing = Arc::clone(&self.shared);
        let handle = match self.scheduler.schedule_after(
            self.wait,
            Box::new(move || trailing.fire_trailing(generation)),
        ) {
            Ok(handle) => handle,
            Err(error) => {
                *state = ThrottleState::Idle {
                    latest: latest_before,
                };
                return Err(error);
            }
        };
        tracing::debug!(generation, wait = ?self.wait, "throttle window armed");

        // Leave the previous result in place if the callback panics.
        *state = ThrottleState::Idle {
            latest: latest_before,
        };
        let result = (self.shared.callback)(arguments.clone());
        *state = ThrottleState::Armed {
            latest: result.clone(),
            arguments,
            generation,
            handle,
        };
        Ok(result)
    }
}

impl<F, A, R, S> Throttle<F, A, R, S>
where
    R: Clone,
{
    /// Returns the most recently computed result without calling anything.
    pub fn latest(&self) -> Option<R> {
        match &*self.shared.state.lock() {
            ThrottleState::Idle { latest } => latest.clone(),
            ThrottleState::Armed { latest, .. } => Some(latest.clone()),
        }
    }

    /// Returns `true` while a trailing invocation is pending.
    pub fn is_armed(&self) -> bool {
        self.shared.state.lock().is_waiting()
    }

    /// Drops the pending trailing invocation, if any, and returns the wrapper
    /// to idle. The latest result is kept.
    ///
    /// Returns `true` if a trailing invocation was cancelled.
    pub fn cancel(&self) -> bool {
        let mut state = self.shared.state.lock();
        let previous = std::mem::replace(&mut *state, ThrottleState::Idle { latest: None });
        match previous {
            ThrottleState::Armed { latest, handle, .. } => {
                *state = ThrottleState::Idle {
                    latest: Some(latest),
                };
                handle.cancel()
            }
            idle @ ThrottleState::Idle { .. } => {
                *state = idle;
                false
            }
        }
    }
}

impl<F, A, R, S: Clone> Clone for Throttle<F, A, R, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            scheduler: self.scheduler.clone(),
            wait: self.wait,
        }
    }
}

impl<F, A, R, S> fmt::Debug for Throttle<F, A, R, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let armed = self.shared.state.lock().is_waiting();
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("armed", &armed)
            .finish_non_exhaustive()
    }
}

/// Creates a [`Throttle`] wrapper around `callback`.
pub fn throttle<F, A, R, S>(scheduler: S, callback: F, wait: Duration) -> Throttle<F, A, R, S>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Clone + Send + 'static,
    R: Clone + Send + 'static,
    S: Scheduler,
{
    Throttle::new(scheduler, callback, wait)
}
