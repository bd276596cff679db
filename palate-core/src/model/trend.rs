use serde::{Deserialize, Serialize};

/// Direction of the most recent score change for an adaptive entry.
/// A single-delta signal, not a multi-point regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    /// Classify the last score delta against the movement threshold.
    pub fn from_delta(delta: f64, threshold: f64) -> Self {
        if delta > threshold {
            Trend::Increasing
        } else if delta < -threshold {
            Trend::Decreasing
        } else {
            Trend::Stable
        }
    }
}

impl Default for Trend {
    fn default() -> Self {
        Trend::Stable
    }
}
