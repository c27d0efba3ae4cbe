//! Background task execution for collaborator calls.
//!
//! Worker threads run named tasks off the interaction thread. Each task's
//! callback is queued when the task finishes and runs on whichever thread
//! calls [`BackgroundExecutor::process_results`] — for the engine that is
//! the frame tick, so pointer handling never blocks on a collaborator and
//! state mutation stays single-threaded.

use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, warn};

use crate::constants::DEFAULT_BACKGROUND_WORKERS;

/// Result of a background task. Errors cross the thread boundary as plain
/// strings so tasks never smuggle non-Send error types.
pub type TaskResult<T> = Result<T, String>;

/// Deferred callback, run on the thread that processes results.
type Callback = Box<dyn FnOnce() + Send>;

/// A named unit of work: runs on a worker thread and hands back the
/// callback to run on the caller's side.
struct Job {
    name: String,
    run: Box<dyn FnOnce() -> Callback + Send>,
}

/// Fixed pool of worker threads with a completion queue drained by the
/// caller.
pub struct BackgroundExecutor {
    sender: Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
    completed: Arc<Mutex<Vec<Callback>>>,
    pending: Arc<AtomicUsize>,
}

impl BackgroundExecutor {
    /// Create an executor with `worker_count` threads.
    pub fn new(worker_count: usize) -> Self {
        let (sender, receiver) = channel::<Job>();
        let receiver = Arc::new(Mutex::new(receiver));
        let completed: Arc<Mutex<Vec<Callback>>> = Arc::new(Mutex::new(Vec::new()));

        let workers = (0..worker_count.max(1))
            .map(|index| {
                let receiver = Arc::clone(&receiver);
                let completed = Arc::clone(&completed);
                thread::Builder::new()
                    .name(format!("background-{index}"))
                    .spawn(move || worker_loop(&receiver, &completed))
                    .expect("failed to spawn background worker")
            })
            .collect();

        Self {
            sender: Some(sender),
            workers,
            completed,
            pending: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create an executor with the default worker count.
    pub fn with_default_workers() -> Self {
        Self::new(DEFAULT_BACKGROUND_WORKERS)
    }

    /// Queue `task` on a worker thread. When it finishes, `callback`
    /// receives the result during the next [`process_results`] call.
    ///
    /// [`process_results`]: Self::process_results
    pub fn spawn<T, F, C>(&self, name: &str, task: F, callback: C)
    where
        T: Send + 'static,
        F: FnOnce() -> TaskResult<T> + Send + 'static,
        C: FnOnce(TaskResult<T>) + Send + 'static,
    {
        let job = Job {
            name: name.to_string(),
            run: Box::new(move || {
                let result = task();
                Box::new(move || callback(result)) as Callback
            }),
        };

        self.pending.fetch_add(1, Ordering::SeqCst);
        let sent = self
            .sender
            .as_ref()
            .is_some_and(|sender| sender.send(job).is_ok());
        if !sent {
            self.pending.fetch_sub(1, Ordering::SeqCst);
            warn!(task = name, "executor is shut down; task dropped");
        }
    }

    /// Run the callbacks of every finished task on the current thread.
    pub fn process_results(&self) {
        let callbacks: Vec<Callback> = std::mem::take(&mut *self.completed.lock());
        for callback in callbacks {
            callback();
            self.pending.fetch_sub(1, Ordering::SeqCst);
        }
    }

    /// Whether any spawned task has not yet had its callback processed.
    pub fn has_pending(&self) -> bool {
        self.pending_count() > 0
    }

    /// Number of tasks spawned but not yet processed.
    pub fn pending_count(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }
}

impl Default for BackgroundExecutor {
    fn default() -> Self {
        Self::with_default_workers()
    }
}

impl Drop for BackgroundExecutor {
    fn drop(&mut self) {
        // Closing the channel ends every worker's recv loop.
        self.sender.take();
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

fn worker_loop(receiver: &Mutex<Receiver<Job>>, completed: &Mutex<Vec<Callback>>) {
    loop {
        // The guard drops as soon as recv returns, so workers take turns
        // pulling jobs without holding the queue during execution.
        let job = match receiver.lock().recv() {
            Ok(job) => job,
            Err(_) => break,
        };

        let started = Instant::now();
        debug!(task = %job.name, "background task started");
        let callback = (job.run)();
        debug!(
            task = %job.name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "background task finished"
        );
        completed.lock().push(callback);
    }
}
