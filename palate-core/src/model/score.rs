use std::fmt;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Preference score clamped to [-1.0, 1.0].
/// Negative means disliked, positive means liked, zero is neutral.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score(f64);

impl Score {
    /// Neutral score.
    pub const NEUTRAL: Score = Score(0.0);

    /// Create a new Score, clamping to [-1.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(-1.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Map a 1..=5 recipe rating onto [-1.0, 1.0], with 3 as the neutral point.
    pub fn from_rating(rating: u8) -> Self {
        Self::new((f64::from(rating) - 3.0) / 2.0)
    }

    /// Map a score back onto a 1..=5 rating.
    pub fn to_rating(self) -> u8 {
        ((self.0 + 1.0) * 2.5).clamp(1.0, 5.0).round() as u8
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.3}", self.0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> Self {
        s.0
    }
}

impl Add for Score {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl Mul<f64> for Score {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}
