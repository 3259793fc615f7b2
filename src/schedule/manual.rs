//! A deterministic scheduler driven by a virtual clock.
//!
//! `ManualScheduler` never runs anything on its own. Time only moves when
//! the owner calls [`ManualScheduler::advance`] (or
//! [`ManualScheduler::run_until_idle`]), and due tasks run on that caller's
//! thread in due-time order. This is the single cooperative thread of the
//! toolkit's baseline execution model.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::{ScheduleHandle, ScheduledTask, Scheduler, Task};
use crate::error::{Error, Result};

struct Entry {
    due: Duration,
    sequence: u64,
    task: ScheduledTask,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.sequence == other.sequence
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so that `BinaryHeap` pops the earliest due time first, and the
// earliest submission among equal due times.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

#[derive(Default)]
struct Timeline {
    now: Duration,
    next_sequence: u64,
    queue: BinaryHeap<Entry>,
    shut_down: bool,
}

/// A scheduler whose clock only advances when told to.
///
/// Clones share the same clock and queue.
///
/// # Examples
///
/// ```rust
/// use underbar::schedule::{ManualScheduler, Scheduler};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
///
/// scheduler
///     .schedule_after(Duration::from_millis(100), Box::new(move || flag.store(true, Ordering::SeqCst)))
///     .unwrap();
///
/// scheduler.advance(Duration::from_millis(99));
/// assert!(!fired.load(Ordering::SeqCst));
///
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timeline: Arc<Mutex<Timeline>>,
}

impl ManualScheduler {
    /// Creates a scheduler whose clock reads zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.timeline.lock().now
    }

    /// Returns the number of tasks that are still waiting to fire.
    ///
    /// Cancelled tasks are not counted.
    pub fn pending_count(&self) -> usize {
        self.timeline
            .lock()
            .queue
            .iter()
            .filter(|entry| entry.task.is_pending())
            .count()
    }

    /// Moves the clock forward by `elapsed`, running every task that becomes
    /// due, and returns the number of tasks that actually ran.
    ///
    /// Tasks run with the clock set to their own due time, so a task that
    /// schedules further work is measured from the moment it fired. Work
    /// scheduled that way which falls inside the advanced window also runs.
    pub fn advance(&self, elapsed: Duration) -> usize {
        let target = self.timeline.lock().now.saturating_add(elapsed);
        let mut executed = 0;

        while let Some(task) = self.pop_due(target) {
            if task.run() {
                executed += 1;
            }
        }

        let mut timeline = self.timeline.lock();
        if timeline.now < target {
            timeline.now = target;
        }
        executed
    }

    /// Runs every queued task, moving the clock to each task's due time in
    /// turn, and returns the number of tasks that actually ran.
    pub fn run_until_idle(&self) -> usize {
        let mut executed = 0;
        while let Some(task) = self.pop_due(Duration::MAX) {
            if task.run() {
                executed += 1;
            }
        }
        executed
    }

    /// Refuses all future scheduling requests and cancels queued tasks.
    ///
    /// Cancelled tasks never fire and their handles report
    /// [`ScheduleHandle::is_cancelled`]. Requests made after shutdown fail
    /// with [`Error::SchedulingUnavailable`].
    pub fn shutdown(&self) {
        let dropped: Vec<Entry> = {
            let mut timeline = self.timeline.lock();
            timeline.shut_down = true;
            timeline.queue.drain().collect()
        };
        let cancelled = dropped.iter().filter(|entry| entry.task.cancel()).count();
        tracing::debug!(cancelled, "manual scheduler shut down");
    }

    /// Returns `true` once [`ManualScheduler::shutdown`] has been called.
    pub fn is_shut_down(&self) -> bool {
        self.timeline.lock().shut_down
    }

    fn pop_due(&self, target: Duration) -> Option<ScheduledTask> {
        let mut timeline = self.timeline.lock();
        if timeline.queue.peek()?.due > target {
            return None;
        }
        let entry = timeline.queue.pop()?;
        if entry.due > timeline.now {
            timeline.now = entry.due;
        }
        Some(entry.task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&self, wait: Duration, task: Task) -> Result<ScheduleHandle> {
        let mut timeline = self.timeline.lock();
        if timeline.shut_down {
            return Err(Error::scheduling_unavailable(
                "manual scheduler has been shut down",
            ));
        }

        // Cancelled entries would otherwise linger until their due time.
        timeline.queue.retain(|entry| entry.task.is_pending());

        let (task, handle) = ScheduledTask::new(task);
        let due = timeline.now.saturating_add(wait);
        let sequence = timeline.next_sequence;
        timeline.next_sequence += 1;
        tracing::trace!(task = %handle.id(), ?due, "task scheduled");
        timeline.queue.push(Entry {
            due,
            sequence,
            task,
        });
        Ok(handle)
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let timeline = self.timeline.lock();
        formatter
            .debug_struct("ManualScheduler")
            .field("now", &timeline.now)
            .field("queued", &timeline.queue.len())
            .field("shut_down", &timeline.shut_down)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) -> Task) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let shared = Arc::clone(&log);
        let make = move |label: u32| -> Task {
            let log = Arc::clone(&shared);
            Box::new(move || log.lock().push(label))
        };
        (log, make)
    }

    #[test]
    fn test_tasks_run_in_due_order_then_submission_order() {
        let scheduler = ManualScheduler::new();
        let (log, make) = recorder();

        scheduler.schedule_after(Duration::from_millis(30), make(3)).unwrap();
        scheduler.schedule_after(Duration::from_millis(10), make(1)).unwrap();
        scheduler.schedule_after(Duration::from_millis(10), make(2)).unwrap();

        assert_eq!(scheduler.advance(Duration::from_millis(50)), 3);
        assert_eq!(*log.lock(), vec![1, 2, 3]);
        assert_eq!(scheduler.now(), Duration::from_millis(50));
    }

    #[test]
    fn test_cancelled_task_does_not_run() {
        let scheduler = ManualScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let task_counter = Arc::clone(&counter);

        let handle = scheduler
            .schedule_after(
                Duration::from_millis(5),
                Box::new(move || {
                    task_counter.fetch_add(1, AtomicOrdering::SeqCst);
                }),
            )
            .unwrap();
        assert_eq!(scheduler.pending_count(), 1);
        assert!(handle.cancel());
        assert_eq!(scheduler.pending_count(), 0);

        assert_eq!(scheduler.advance(Duration::from_millis(5)), 0);
        assert_eq!(counter.load(AtomicOrdering::SeqCst), 0);
    }

    #[test]
    fn test_task_scheduled_from_task_is_measured_from_its_due_time() {
        let scheduler = ManualScheduler::new();
        let (log, make) = recorder();
        let inner = scheduler.clone();
        let follow_up = make(2);

        scheduler
            .schedule_after(
                Duration::from_millis(10),
                Box::new(move || {
                    inner
                        .schedule_after(Duration::from_millis(10), follow_up)
                        .unwrap();
                }),
            )
            .unwrap();

        scheduler.advance(Duration::from_millis(19));
        assert!(log.lock().is_empty());
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*log.lock(), vec![2]);
    }

    #[test]
    fn test_shutdown_rejects_new_work() {
        let scheduler = ManualScheduler::new();
        scheduler.shutdown();
        assert!(scheduler.is_shut_down());
        let result = scheduler.schedule_after(Duration::ZERO, Box::new(|| {}));
        assert!(matches!(result, Err(Error::SchedulingUnavailable { .. })));
    }

    #[test]
    fn test_shutdown_cancels_queued_tasks() {
        let scheduler = ManualScheduler::new();
        let (log, make) = recorder();
        let handle = scheduler
            .schedule_after(Duration::from_millis(5), make(1))
            .unwrap();

        scheduler.shutdown();

        assert!(handle.is_cancelled());
        assert!(!handle.is_pending());
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(5)), 0);
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_cancelled_entries_are_pruned_on_schedule() {
        let scheduler = ManualScheduler::new();
        for _ in 0..100 {
            let handle = scheduler
                .schedule_after(Duration::from_secs(60), Box::new(|| {}))
                .unwrap();
            assert!(handle.cancel());
        }
        scheduler
            .schedule_after(Duration::from_secs(60), Box::new(|| {}))
            .unwrap();

        assert_eq!(scheduler.timeline.lock().queue.len(), 1);
        assert_eq!(scheduler.pending_count(), 1);
    }
}
