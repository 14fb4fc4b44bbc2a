//! Payload range filtering and the range slider's fixed configuration.

use crate::error::{LaunchDataError, Result};
use serde::Serialize;

/// An open payload interval `(low, high)` in kilograms.
///
/// [`contains`](Self::contains) is strict on both ends: a record whose payload
/// equals either bound is outside the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Build a range, rejecting NaN bounds and `low > high`.
    ///
    /// `low == high` is allowed and matches nothing.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if low.is_nan() || high.is_nan() || low > high {
            return Err(LaunchDataError::InvalidPayloadRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_mass: f64) -> bool {
        payload_mass > self.low && payload_mass < self.high
    }
}

/// Range slider bounds, step and tick marks, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: &'static [f64],
}

impl SliderConfig {
    pub const DEFAULT: SliderConfig = SliderConfig {
        min: 0.0,
        max: 10000.0,
        step: 1000.0,
        marks: &[0.0, 2500.0, 5000.0, 7500.0, 10000.0],
    };
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
