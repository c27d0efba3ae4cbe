//! User-facing notices for operations that finish out of band.
//!
//! Collaborator failures and confirmations surface here instead of panicking
//! or vanishing into logs. The log hands hosts everything they need to
//! render a notice stack: level, message, and remaining lifetime. It is
//! clonable and lock-protected so a handle can live wherever completions are
//! applied.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::constants::NOTICE_LINGER_MS;

/// Severity of a notice, which also picks its default lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    /// How long a notice of this level lingers by default. Errors stay
    /// longest since they usually want a follow-up action.
    pub fn default_duration(&self) -> Duration {
        match self {
            NoticeLevel::Success | NoticeLevel::Info => Duration::from_millis(NOTICE_LINGER_MS),
            NoticeLevel::Warning => Duration::from_secs(4),
            NoticeLevel::Error => Duration::from_secs(5),
        }
    }

    /// Glyph hosts can prefix the message with.
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "✓",
            NoticeLevel::Info => "ℹ",
            NoticeLevel::Warning => "⚠",
            NoticeLevel::Error => "✗",
        }
    }
}

/// A single notice. Ids are assigned when the notice enters a log.
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
    pub duration: Duration,
    created: Instant,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            id: 0,
            level,
            message: message.into(),
            duration: level.default_duration(),
            created: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    /// Override the default lifetime.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Whether the notice has outlived its duration.
    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= self.duration
    }

    /// Fraction of the lifetime still remaining, in `[0, 1]`. Hosts use
    /// this to drive fade-outs.
    pub fn remaining_percent(&self) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let remaining = self.duration.saturating_sub(self.created.elapsed());
        remaining.as_secs_f64() / self.duration.as_secs_f64()
    }
}

#[derive(Default)]
struct LogInner {
    notices: Vec<Notice>,
    next_id: u64,
}

/// Shared, clonable notice log.
#[derive(Clone, Default)]
pub struct NoticeLog {
    inner: Arc<Mutex<LogInner>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notice and return its assigned id.
    pub fn push(&self, mut notice: Notice) -> u64 {
        let mut inner = self.inner.lock();
        inner.next_id += 1;
        notice.id = inner.next_id;
        let id = notice.id;
        inner.notices.push(notice);
        id
    }

    pub fn count(&self) -> usize {
        self.inner.lock().notices.len()
    }

    /// Snapshot of the live notices, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.inner.lock().notices.clone()
    }

    pub fn remove(&self, id: u64) {
        self.inner.lock().notices.retain(|n| n.id != id);
    }

    pub fn clear(&self) {
        self.inner.lock().notices.clear();
    }

    /// Drop expired notices. Returns true when anything was removed, so
    /// callers know the notice stack needs a redraw.
    pub fn prune_expired(&self) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.notices.len();
        inner.notices.retain(|n| !n.is_expired());
        inner.notices.len() != before
    }
}
