//! Performance instrumentation for the interaction hot paths.
//!
//! Pointer handlers run at pointer-event rate and the frame tick runs every
//! animation frame, so both carry lightweight timing: scoped timers that
//! only log when a budget is blown, plus rolling per-operation and per-tick
//! statistics.
//!
//! Enable the `profiling` feature to get trace-level timing for every
//! instrumented scope; without it the macro costs nothing and only
//! over-budget operations warn.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
use tracing::warn;

/// Frame-tick budget for 60 FPS hosts
pub const TARGET_FRAME_MS: f64 = 16.67;

/// A tick this many times over budget logs a warning
const SLOW_TICK_FACTOR: f64 = 2.0;

/// Rolling window of tick samples
const FRAME_WINDOW: usize = 60;

/// Rolling window of samples per operation
const OP_WINDOW: usize = 100;

/// Runtime switch for profiling-feature builds
static PROFILING_ACTIVE: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Time a block. Zero-cost unless the `profiling` feature is on.
///
/// # Example
/// ```ignore
/// fn on_pointer_move(...) {
///     profile_scope!("on_pointer_move");
///     // ... gesture handling ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _profile_guard = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

/// Enable or disable profiling at runtime. Only affects builds with the
/// `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ACTIVE.store(enabled, Ordering::Relaxed);
}

/// Whether profiling is currently enabled.
#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ACTIVE.load(Ordering::Relaxed)
}

fn ms_since(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

/// Write one sample into a rolling window, overwriting the oldest slot
/// once the window is full.
fn push_sample(window: &mut Vec<f64>, cursor: &mut usize, capacity: usize, ms: f64) {
    if window.len() < capacity {
        window.push(ms);
    } else {
        window[*cursor] = ms;
    }
    *cursor = (*cursor + 1) % capacity;
}

// ============================================================================
// Frame-Tick Monitor
// ============================================================================

/// Rolling statistics for frame ticks and named operations.
#[derive(Default)]
pub struct PerfMonitor {
    /// Recent tick times in milliseconds, ring-ordered
    tick_ms: Vec<f64>,
    tick_cursor: usize,
    /// When the current tick started
    tick_started: Option<Instant>,
    /// Ticks that exceeded the warning threshold
    slow_ticks: u64,
    /// Total ticks tracked
    total_ticks: u64,
    /// Per-operation timing statistics
    by_operation: HashMap<&'static str, OperationStats>,
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the start of a frame tick.
    pub fn begin_frame(&mut self) {
        self.tick_started = Some(Instant::now());
    }

    /// Mark the end of a frame tick and record its time in milliseconds.
    pub fn end_frame(&mut self) -> Option<f64> {
        let started = self.tick_started.take()?;
        let ms = ms_since(started);

        push_sample(&mut self.tick_ms, &mut self.tick_cursor, FRAME_WINDOW, ms);
        self.total_ticks += 1;

        if ms > TARGET_FRAME_MS * SLOW_TICK_FACTOR {
            self.slow_ticks += 1;
            warn!(
                tick_ms = format!("{ms:.2}"),
                budget_ms = format!("{TARGET_FRAME_MS:.2}"),
                "slow frame tick"
            );
        }

        Some(ms)
    }

    /// Record a timing sample for a named operation.
    pub fn record_operation(&mut self, name: &'static str, elapsed_ms: f64) {
        self.by_operation.entry(name).or_default().record(elapsed_ms);
    }

    /// Average tick time over the retained window.
    pub fn average_frame_time(&self) -> f64 {
        if self.tick_ms.is_empty() {
            return 0.0;
        }
        self.tick_ms.iter().sum::<f64>() / self.tick_ms.len() as f64
    }

    /// Worst tick time in the retained window.
    pub fn max_frame_time(&self) -> f64 {
        self.tick_ms.iter().fold(0.0_f64, |worst, &ms| worst.max(ms))
    }

    /// Percentage of all ticks that blew the warning threshold.
    pub fn slow_frame_percentage(&self) -> f64 {
        if self.total_ticks == 0 {
            return 0.0;
        }
        self.slow_ticks as f64 / self.total_ticks as f64 * 100.0
    }

    /// FPS estimate derived from the average tick time.
    pub fn estimated_fps(&self) -> f64 {
        match self.average_frame_time() {
            avg if avg > 0.0 => 1000.0 / avg,
            _ => 0.0,
        }
    }

    /// Statistics for one operation, if it has been recorded.
    pub fn get_operation_stats(&self, name: &str) -> Option<&OperationStats> {
        self.by_operation.get(name)
    }

    /// All recorded operation statistics.
    pub fn all_operation_stats(&self) -> &HashMap<&'static str, OperationStats> {
        &self.by_operation
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.tick_ms.clear();
        self.tick_cursor = 0;
        self.slow_ticks = 0;
        self.total_ticks = 0;
        self.by_operation.clear();
    }
}

/// Rolling statistics for one named operation.
#[derive(Debug, Clone, Default)]
pub struct OperationStats {
    recent: Vec<f64>,
    cursor: usize,
    invocations: u64,
    worst_ms: f64,
}

impl OperationStats {
    /// Record one sample in milliseconds.
    pub fn record(&mut self, ms: f64) {
        push_sample(&mut self.recent, &mut self.cursor, OP_WINDOW, ms);
        self.invocations += 1;
        if ms > self.worst_ms {
            self.worst_ms = ms;
        }
    }

    /// Average over the retained samples.
    pub fn average(&self) -> f64 {
        if self.recent.is_empty() {
            return 0.0;
        }
        self.recent.iter().sum::<f64>() / self.recent.len() as f64
    }

    /// 95th-percentile time over the retained samples.
    pub fn p95(&self) -> f64 {
        if self.recent.is_empty() {
            return 0.0;
        }
        let mut sorted = self.recent.clone();
        let rank = (sorted.len() - 1) * 95 / 100;
        let (_, value, _) = sorted.select_nth_unstable_by(rank, |a, b| a.total_cmp(b));
        *value
    }

    /// Total number of recorded invocations, beyond the retained window.
    pub fn count(&self) -> u64 {
        self.invocations
    }

    /// Worst time ever recorded.
    pub fn max_ms(&self) -> f64 {
        self.worst_ms
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// RAII timer that logs on drop when its budget is exceeded.
pub struct ScopedTimer {
    label: &'static str,
    started: Instant,
    budget_ms: f64,
    #[cfg(feature = "profiling")]
    depth: usize,
}

// Thread-local depth so nested profiled scopes report their nesting level.
#[cfg(feature = "profiling")]
thread_local! {
    static SCOPE_DEPTH: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

#[cfg(feature = "profiling")]
fn enter_scope() -> usize {
    SCOPE_DEPTH.with(|d| {
        let level = d.get();
        d.set(level + 1);
        level
    })
}

#[cfg(feature = "profiling")]
fn leave_scope() {
    SCOPE_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
}

impl ScopedTimer {
    /// Timer with an explicit warning budget in milliseconds.
    pub fn new(label: &'static str, budget_ms: f64) -> Self {
        Self {
            label,
            started: Instant::now(),
            budget_ms,
            #[cfg(feature = "profiling")]
            depth: enter_scope(),
        }
    }

    /// Low-budget timer used by the `profile_scope!` macro.
    pub fn for_profiling(label: &'static str) -> Self {
        Self::new(label, 1.0)
    }

    /// Elapsed time so far, without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        ms_since(self.started)
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();

        #[cfg(feature = "profiling")]
        {
            leave_scope();
            if is_profiling_enabled() && elapsed > self.budget_ms {
                trace!(
                    operation = self.label,
                    depth = self.depth,
                    elapsed_ms = format!("{elapsed:.2}"),
                    "profiled scope"
                );
            }
        }

        #[cfg(not(feature = "profiling"))]
        if elapsed > self.budget_ms {
            warn!(
                operation = self.label,
                elapsed_ms = format!("{elapsed:.2}"),
                budget_ms = format!("{:.2}", self.budget_ms),
                "slow operation"
            );
        }
    }
}
