use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use ts_rs::TS;

/// Persisted translation confidence, clamped to [0.0, 1.0].
///
/// Distinct from the ephemeral similarity score computed during discovery:
/// it starts from that score and then moves only through manual
/// re-validation or learned re-validation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Confidence(f64);

impl Confidence {
    /// A confidence of exactly zero marks a translation rejected by a human.
    pub const REJECTED: f64 = 0.0;
    /// Confidence recorded for a manual submission with no scorable target word.
    pub const MANUAL_DEFAULT: f64 = 0.7;

    /// Create a new Confidence, clamping to [0.0, 1.0]. NaN collapses to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_rejected(self) -> bool {
        self.0 <= Self::REJECTED
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(Self::MANUAL_DEFAULT)
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

impl Add<f64> for Confidence {
    type Output = Self;
    fn add(self, rhs: f64) -> Self {
        Self::new(self.0 + rhs)
    }
}

impl Sub<f64> for Confidence {
    type Output = Self;
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.0 - rhs)
    }
}
