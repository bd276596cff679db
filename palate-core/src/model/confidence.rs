use std::fmt;

use serde::{Deserialize, Serialize};

/// Confidence clamped to [0.0, 1.0].
/// A saturating, counter-derived measure of how much evidence supports an
/// adaptive entry. Monotonically non-decreasing across updates.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Entries at or above this gate influence the merged preference view.
    pub const GATE: f64 = 0.3;
    /// Confidence assigned to a freshly created entry.
    pub const INITIAL: f64 = 0.1;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Saturating increment; confidence never exceeds 1.0.
    pub fn bump(self, step: f64) -> Self {
        Self::new(self.0 + step)
    }

    /// Whether this entry carries enough evidence to affect the merge.
    pub fn passes_gate(self, gate: f64) -> bool {
        self.0 >= gate
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}
