use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters describing one interactive session.
#[derive(Default)]
pub struct SessionMetrics {
    students_added: AtomicU64,
    grades_recorded: AtomicU64,
    tokens_rejected: AtomicU64,
}

impl SessionMetrics {
    /// Create an empty metrics accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully registered student.
    pub fn record_student(&self) {
        self.students_added.fetch_add(1, Ordering::Relaxed);
    }

    /// Record grades accepted during one entry session.
    pub fn record_grades(&self, count: u64) {
        self.grades_recorded.fetch_add(count, Ordering::Relaxed);
    }

    /// Record grade tokens rejected during validation.
    pub fn record_rejections(&self, count: u64) {
        self.tokens_rejected.fetch_add(count, Ordering::Relaxed);
    }

    /// Return a snapshot of the current counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            students_added: self.students_added.load(Ordering::Relaxed),
            grades_recorded: self.grades_recorded.load(Ordering::Relaxed),
            tokens_rejected: self.tokens_rejected.load(Ordering::Relaxed),
        }
    }
}

/// Immutable view of session counters used for reporting.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct MetricsSnapshot {
    /// Students registered during the session.
    pub students_added: u64,
    /// Grades accepted across all entry sessions.
    pub grades_recorded: u64,
    /// Grade tokens rejected during validation.
    pub tokens_rejected: u64,
}

impl MetricsSnapshot {
    /// Serialize the snapshot for log output, falling back to an empty
    /// object when serialization fails.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".into())
    }
}
