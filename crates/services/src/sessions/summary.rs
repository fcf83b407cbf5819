use chrono::{DateTime, Duration, Utc};

/// Statistics for a session, shown when the learner quits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub module: String,
    pub total_interactions: u64,
    pub items_completed: u64,
    pub current_index: usize,
    pub total_items: usize,
    pub repeat_threshold: u32,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
}

impl SessionSummary {
    /// Whole seconds spent in the session.
    #[must_use]
    pub fn duration_secs(&self) -> i64 {
        self.duration.num_seconds()
    }
}
