//! Unit tests for the background executor.

use artboard::background::{BackgroundExecutor, TaskResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// Pump `process_results` until the condition holds or two seconds pass.
fn drain_until<F>(executor: &BackgroundExecutor, mut done: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        executor.process_results();
        if done() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn test_fresh_executor_has_no_pending_work() {
    let executor = BackgroundExecutor::new(2);
    assert!(!executor.has_pending());
    assert_eq!(executor.pending_count(), 0);
}

#[test]
fn test_finished_job_reaches_its_callback() {
    let executor = BackgroundExecutor::new(1);
    let received: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&received);

    executor.spawn(
        "decode_image",
        || Ok("decoded".to_string()),
        move |result: TaskResult<String>| {
            *sink.lock().unwrap() = result.ok();
        },
    );

    assert!(drain_until(&executor, || received.lock().unwrap().is_some()));
    assert_eq!(received.lock().unwrap().as_deref(), Some("decoded"));
}

#[test]
fn test_callbacks_run_on_the_polling_thread() {
    let executor = BackgroundExecutor::new(1);
    let callback_thread = Arc::new(Mutex::new(None));
    let probe = Arc::clone(&callback_thread);

    executor.spawn(
        "probe_thread",
        || Ok(()),
        move |_: TaskResult<()>| {
            *probe.lock().unwrap() = Some(thread::current().id());
        },
    );

    assert!(drain_until(&executor, || callback_thread
        .lock()
        .unwrap()
        .is_some()));
    // The callback must run where process_results was called, never on the
    // worker thread.
    assert_eq!(
        callback_thread.lock().unwrap().unwrap(),
        thread::current().id()
    );
}

#[test]
fn test_worker_failure_surfaces_as_err() {
    let executor = BackgroundExecutor::new(1);
    let failure: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&failure);

    executor.spawn(
        "doomed_decode",
        || Err::<(), _>("image decode failed".to_string()),
        move |result: TaskResult<()>| {
            *sink.lock().unwrap() = result.err();
        },
    );

    assert!(drain_until(&executor, || failure.lock().unwrap().is_some()));
    assert_eq!(
        failure.lock().unwrap().as_deref(),
        Some("image decode failed")
    );
}

#[test]
fn test_jobs_fan_out_across_workers() {
    let executor = BackgroundExecutor::new(3);
    let finished = Arc::new(AtomicUsize::new(0));

    for i in 0..8 {
        let finished = Arc::clone(&finished);
        executor.spawn(
            &format!("job_{i}"),
            move || Ok(i),
            move |result: TaskResult<i32>| {
                if result.is_ok() {
                    finished.fetch_add(1, Ordering::SeqCst);
                }
            },
        );
    }

    assert!(drain_until(&executor, || finished.load(Ordering::SeqCst) == 8));
}

#[test]
fn test_pending_count_drops_after_processing() {
    let executor = BackgroundExecutor::new(1);
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);

    executor.spawn(
        "counted_job",
        || Ok(()),
        move |_: TaskResult<()>| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );
    assert!(executor.has_pending());

    assert!(drain_until(&executor, || seen.load(Ordering::SeqCst) == 1));
    assert!(!executor.has_pending());
    assert_eq!(executor.pending_count(), 0);
}
