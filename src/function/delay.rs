//! One-shot deferred invocation.

use std::time::Duration;

use crate::error::Result;
use crate::schedule::{ScheduleHandle, Scheduler};

/// Schedules `callback(arguments)` to run once, no sooner than `wait` from
/// now, on `scheduler`.
///
/// `arguments` are moved into the scheduled task immediately and passed to
/// the callback unchanged when it fires. Nothing observes the callback's
/// outcome, so it must return `()`; a fallible callback handles its own
/// errors. Cancelling the returned handle before the task fires prevents the
/// callback from running.
///
/// # Errors
///
/// Returns [`Error::SchedulingUnavailable`](crate::Error::SchedulingUnavailable)
/// if `scheduler` cannot accept the task.
///
/// # Examples
///
/// ```rust
/// use underbar::function::delay;
/// use underbar::schedule::ManualScheduler;
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let received = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&received);
///
/// delay(
///     &scheduler,
///     move |(first, second): (&str, &str)| sink.lock().unwrap().push(format!("{first}{second}")),
///     Duration::from_millis(500),
///     ("a", "b"),
/// )
/// .unwrap();
///
/// scheduler.advance(Duration::from_millis(500));
/// assert_eq!(*received.lock().unwrap(), vec!["ab".to_string()]);
/// ```
pub fn delay<S, F, A>(
    scheduler: &S,
    callback: F,
    wait: Duration,
    arguments: A,
) -> Result<ScheduleHandle>
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    scheduler.schedule_after(wait, Box::new(move || callback(arguments)))
}
