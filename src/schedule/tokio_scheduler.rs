//! Scheduling on a tokio runtime.
//!
//! Each task becomes a spawned future that sleeps for the requested wait and
//! then runs the task, unless its handle was cancelled first. The task itself
//! is synchronous and runs on a runtime worker. A runtime that has shut down
//! drops spawned futures on the spot, which cancels the task.

use std::time::Duration;

use tokio::runtime::Handle;

use super::{ScheduleHandle, ScheduledTask, Scheduler, Task};
use crate::error::{Error, Result};

/// A [`Scheduler`] backed by a tokio runtime.
///
/// # Examples
///
/// ```rust
/// use underbar::schedule::{Scheduler, TokioScheduler};
/// use std::time::Duration;
///
/// // Outside a runtime there is nothing to schedule on.
/// assert!(TokioScheduler::current().is_err());
///
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// let scheduler = TokioScheduler::new(runtime.handle().clone());
/// let handle = scheduler
///     .schedule_after(Duration::from_millis(1), Box::new(|| {}))
///     .unwrap();
/// assert!(handle.is_pending() || handle.is_fired());
/// ```
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Creates a scheduler that spawns onto the runtime behind `handle`.
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Creates a scheduler for the runtime the caller is running on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchedulingUnavailable`] when called outside a tokio
    /// runtime.
    pub fn current() -> Result<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|error| Error::scheduling_unavailable(error.to_string()))
    }
}

impl Scheduler for TokioScheduler {
    /// Spawns `task` onto the runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchedulingUnavailable`] if the runtime has shut down
    /// and dropped the task instead of running it.
    fn schedule_after(&self, wait: Duration, task: Task) -> Result<ScheduleHandle> {
        let (task, handle) = ScheduledTask::new(task);
        tracing::trace!(task = %handle.id(), ?wait, "task scheduled on tokio runtime");
        self.handle.spawn(async move {
            tokio::time::sleep(wait).await;
            task.run();
        });
        if handle.is_cancelled() {
            return Err(Error::scheduling_unavailable("tokio runtime has shut down"));
        }
        Ok(handle)
    }
}
