//! Hazard classification.
//!
//! Maps the raw smoke reading onto a three-level [`Tier`] using two
//! ordered thresholds, and the raw flame reading onto a presence flag.
//!
//! ```text
//!   smoke:  ... lower ] ( lower ... upper ] ( upper ...
//!   tier:     Normal   |      Elevated      |  Critical
//! ```
//!
//! Both functions are pure and total: every `i32` is a valid input.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// One sample of every sensor, taken fresh each control cycle.
///
/// Raw values are not validated: a disconnected sensor is
/// indistinguishable from a genuine low reading.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reading {
    /// Smoke/gas concentration, raw 10-bit ADC units.
    pub smoke: i32,
    /// Flame sensor output, raw 10-bit ADC units (lower = stronger flame).
    pub flame: i32,
    /// Probe temperature in degrees Celsius.
    pub temperature_c: f32,
}

/// Hazard severity derived from the smoke reading.
///
/// Ordered: `Normal < Elevated < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tier {
    Normal = 0,
    Elevated = 1,
    Critical = 2,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Elevated => "ELEVATED",
            Self::Critical => "CRITICAL",
        }
    }
}

impl core::fmt::Display for Tier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier thresholds. Construct through [`Thresholds::new`] so the
/// `lower < upper` ordering always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    lower: i32,
    upper: i32,
    flame: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            lower: 520,
            upper: 620,
            flame: 950,
        }
    }
}

impl Thresholds {
    pub fn new(lower: i32, upper: i32, flame: i32) -> Result<Self, ConfigError> {
        if lower >= upper {
            return Err(ConfigError::ValidationFailed(
                "smoke thresholds must satisfy lower < upper",
            ));
        }
        Ok(Self { lower, upper, flame })
    }

    /// Classify a raw smoke reading.
    ///
    /// A reading equal to `upper` is still `Elevated`; a reading equal to
    /// `lower` is still `Normal`.
    pub fn classify(&self, smoke: i32) -> Tier {
        if smoke > self.upper {
            Tier::Critical
        } else if smoke > self.lower {
            Tier::Elevated
        } else {
            Tier::Normal
        }
    }

    /// Whether the flame sensor sees a flame.
    ///
    /// The IR flame module pulls its output *down* as flame intensity
    /// rises, so a lower raw value means a closer or stronger flame.
    pub fn flame_detected(&self, flame: i32) -> bool {
        flame <= self.flame
    }

    pub fn lower(&self) -> i32 {
        self.lower
    }

    pub fn upper(&self) -> i32 {
        self.upper
    }

    pub fn flame(&self) -> i32 {
        self.flame
    }
}
