//! Cancelable handles for scheduled tasks.
//!
//! A [`ScheduleHandle`] and its [`ScheduledTask`] share one atomic status
//! word. Firing and cancellation both try to move that word out of
//! `STATUS_PENDING` with a compare-and-swap, so exactly one of them can win
//! for any given task. A [`ScheduledTask`] dropped without running counts as
//! cancelled.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};

/// Status: waiting for its due time
const STATUS_PENDING: u8 = 0;
/// Status: the task has been claimed for execution
const STATUS_FIRED: u8 = 1;
/// Status: the task was cancelled before it fired
const STATUS_CANCELLED: u8 = 2;

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

/// A unit of work submitted to a [`Scheduler`](super::Scheduler).
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Identifies one scheduled task within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    fn next() -> Self {
        Self(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "task-{}", self.0)
    }
}

#[derive(Debug)]
struct TaskState {
    id: TaskId,
    status: AtomicU8,
}

/// A handle to a pending scheduled task.
///
/// Cloning a handle yields another handle to the same task.
///
/// # Examples
///
/// ```rust
/// use underbar::schedule::ScheduledTask;
///
/// let (task, handle) = ScheduledTask::new(Box::new(|| unreachable!()));
/// assert!(handle.cancel());
/// assert!(!task.run());
/// assert!(handle.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleHandle {
    state: Arc<TaskState>,
}

impl ScheduleHandle {
    /// Returns the identifier of the scheduled task.
    pub fn id(&self) -> TaskId {
        self.state.id
    }

    /// Cancels the task if it has not fired yet.
    ///
    /// Returns `true` if this call cancelled the task, `false` if the task
    /// already fired or was already cancelled.
    pub fn cancel(&self) -> bool {
        let cancelled = self
            .state
            .status
            .compare_exchange(
                STATUS_PENDING,
                STATUS_CANCELLED,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();
        if cancelled {
            tracing::trace!(task = %self.state.id, "scheduled task cancelled");
        }
        cancelled
    }

    /// Returns `true` while the task is neither fired nor cancelled.
    pub fn is_pending(&self) -> bool {
        self.state.status.load(Ordering::Acquire) == STATUS_PENDING
    }

    /// Returns `true` once the task has been claimed for execution.
    pub fn is_fired(&self) -> bool {
        self.state.status.load(Ordering::Acquire) == STATUS_FIRED
    }

    /// Returns `true` if the task was cancelled before firing.
    pub fn is_cancelled(&self) -> bool {
        self.state.status.load(Ordering::Acquire) == STATUS_CANCELLED
    }
}

/// A task paired with the status it shares with its [`ScheduleHandle`].
///
/// Scheduler implementations hold on to the `ScheduledTask` until its due
/// time and then call [`ScheduledTask::run`], which only executes the task if
/// it was not cancelled in the meantime. Dropping a `ScheduledTask` that
/// never ran cancels it, so its handle does not stay pending forever.
pub struct ScheduledTask {
    state: Arc<TaskState>,
    task: Option<Task>,
}

impl ScheduledTask {
    /// Wraps `task`, returning it together with its cancelation handle.
    pub fn new(task: Task) -> (Self, ScheduleHandle) {
        let state = Arc::new(TaskState {
            id: TaskId::next(),
            status: AtomicU8::new(STATUS_PENDING),
        });
        let handle = ScheduleHandle {
            state: Arc::clone(&state),
        };
        (
            Self {
                state,
                task: Some(task),
            },
            handle,
        )
    }

    /// Returns the identifier of the task.
    pub fn id(&self) -> TaskId {
        self.state.id
    }

    /// Returns `true` while the task can still fire.
    pub fn is_pending(&self) -> bool {
        self.state.status.load(Ordering::Acquire) == STATUS_PENDING
    }

    /// Moves a pending task to the cancelled state.
    ///
    /// Returns `true` if the task was still pending.
    pub(crate) fn cancel(&self) -> bool {
        self.state
            .status
            .compare_exchange(
                STATUS_PENDING,
                STATUS_CANCELLED,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Claims and executes the task.
    ///
    /// Returns `false` without running anything if the task was cancelled.
    pub fn run(mut self) -> bool {
        let claimed = self
            .state
            .status
            .compare_exchange(
                STATUS_PENDING,
                STATUS_FIRED,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();
        if claimed {
            tracing::trace!(task = %self.state.id, "scheduled task fired");
            if let Some(task) = self.task.take() {
                task();
            }
        }
        claimed
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        if self.cancel() {
            tracing::trace!(task = %self.state.id, "scheduled task dropped before firing");
        }
    }
}

impl fmt::Debug for ScheduledTask {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ScheduledTask")
            .field("id", &self.state.id)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}
