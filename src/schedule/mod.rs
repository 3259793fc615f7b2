//! Timer-based scheduling behind a small trait.
//!
//! `delay` and `throttle` never talk to a concrete event loop. They submit
//! [`Task`]s to a [`Scheduler`], which promises to run each task no sooner
//! than the requested wait and hands back a [`ScheduleHandle`] that can
//! cancel it.
//!
//! - [`ManualScheduler`]: A virtual clock advanced explicitly by its owner
//! - [`TokioScheduler`]: Runs tasks on a tokio runtime (requires `async`)
//!
//! # Examples
//!
//! ```rust
//! use underbar::schedule::{ManualScheduler, Scheduler};
//! use std::time::Duration;
//!
//! let scheduler = ManualScheduler::new();
//! let handle = scheduler
//!     .schedule_after(Duration::from_secs(1), Box::new(|| println!("tick")))
//!     .unwrap();
//!
//! assert!(handle.cancel());
//! assert_eq!(scheduler.advance(Duration::from_secs(2)), 0);
//! ```

mod handle;
mod manual;
#[cfg(feature = "async")]
mod tokio_scheduler;

use std::sync::Arc;
use std::time::Duration;

pub use self::handle::{ScheduleHandle, ScheduledTask, Task, TaskId};
pub use self::manual::ManualScheduler;
#[cfg(feature = "async")]
pub use self::tokio_scheduler::TokioScheduler;

use crate::error::Result;

/// A facility that runs tasks after a minimum delay.
///
/// Implementations must run each accepted task at most once, never before
/// `wait` has elapsed, and never after its handle was cancelled.
pub trait Scheduler: Send + Sync {
    /// Submits `task` to run once `wait` has elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchedulingUnavailable`](crate::Error::SchedulingUnavailable)
    /// if the scheduler cannot accept work.
    fn schedule_after(&self, wait: Duration, task: Task) -> Result<ScheduleHandle>;
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    fn schedule_after(&self, wait: Duration, task: Task) -> Result<ScheduleHandle> {
        (**self).schedule_after(wait, task)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    fn schedule_after(&self, wait: Duration, task: Task) -> Result<ScheduleHandle> {
        (**self).schedule_after(wait, task)
    }
}
