use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of what the ledger has learned so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningSummary {
    pub total_feedback_count: usize,
    pub total_entries: usize,
    pub last_feedback_timestamp: Option<DateTime<Utc>>,
    /// 1.0 − churn ratio over adaptive entries; an empty ledger is 1.0.
    pub stability_score: f64,
}

/// Result of `analyze_trends` over a recent window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub window_days: u32,
    pub feedback_count: usize,
    /// Mean recipe rating in the window; `None` when no ratings landed.
    pub average_rating: Option<f64>,
    /// Counts for ratings 1..=5, index 0 holding rating 1.
    pub rating_distribution: [usize; 5],
    pub stability_score: f64,
    pub recommendations: Vec<String>,
}
