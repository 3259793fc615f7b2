#![cfg(all(feature = "async", feature = "function"))]
//! Tests for the tokio-backed scheduler on a paused runtime clock.
//!
//! Tests cover:
//! - Minimum wait before a task runs
//! - Cancellation before the deadline
//! - `delay` and `throttle` on a real runtime

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::Instant;
use underbar::Error;
use underbar::function::{delay, throttle};
use underbar::schedule::{Scheduler, TokioScheduler};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Scheduling
// =============================================================================

#[tokio::test(start_paused = true)]
async fn task_runs_no_sooner_than_wait() {
    init_tracing();
    let scheduler = TokioScheduler::current().unwrap();
    let (sender, receiver) = oneshot::channel();
    let started = Instant::now();

    let handle = scheduler
        .schedule_after(
            Duration::from_millis(250),
            Box::new(move || {
                let _ = sender.send(Instant::now());
            }),
        )
        .unwrap();

    let fired_at = receiver.await.unwrap();
    assert!(fired_at.duration_since(started) >= Duration::from_millis(250));
    assert!(handle.is_fired());
}

#[tokio::test(start_paused = true)]
async fn cancelled_task_does_not_run() {
    init_tracing();
    let scheduler = TokioScheduler::current().unwrap();
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);

    let handle = scheduler
        .schedule_after(
            Duration::from_millis(100),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .unwrap();
    assert!(handle.cancel());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(runs.load(Ordering::SeqCst), 0);
    assert!(handle.is_cancelled());
}

#[test]
fn shut_down_runtime_rejects_tasks() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    let scheduler = TokioScheduler::new(runtime.handle().clone());
    drop(runtime);

    let result = scheduler.schedule_after(Duration::from_millis(1), Box::new(|| {}));
    assert!(matches!(result, Err(Error::SchedulingUnavailable { .. })));
}

#[test]
fn current_outside_runtime_is_unavailable() {
    assert!(matches!(
        TokioScheduler::current(),
        Err(Error::SchedulingUnavailable { .. })
    ));
}

// =============================================================================
// Combinators on the Runtime
// =============================================================================

#[tokio::test(start_paused = true)]
async fn delay_passes_arguments_after_wait() {
    init_tracing();
    let scheduler = TokioScheduler::current().unwrap();
    let (sender, receiver) = oneshot::channel();

    delay(
        &scheduler,
        move |(left, right): (i32, i32)| {
            let _ = sender.send(left * right);
        },
        Duration::from_secs(1),
        (6, 7),
    )
    .unwrap();

    assert_eq!(receiver.await.unwrap(), 42);
}

#[tokio::test(start_paused = true)]
async fn throttle_runs_leading_and_trailing_invocations() {
    init_tracing();
    let scheduler = TokioScheduler::current().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let throttled = throttle(
        scheduler,
        move |value: u32| {
            sink.lock().unwrap().push(value);
            value
        },
        Duration::from_millis(100),
    );

    assert_eq!(throttled.call(1).unwrap(), 1);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(throttled.call(2).unwrap(), 1);
    assert_eq!(*seen.lock().unwrap(), vec![1]);

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    assert!(!throttled.is_armed());
}
