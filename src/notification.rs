//! Alert notification payload and the one-shot latch that gates it.

use core::fmt::Write;

use crate::error::CommsError;

/// Capacity of one rendered payload line.
pub const LINE_CAP: usize = 48;
/// Number of lines in a rendered payload.
pub const LINE_COUNT: usize = 3;

pub const BANNER: &str = "ALERT: hazardous gas level detected!";

pub type Line = heapless::String<LINE_CAP>;

/// Snapshot captured at the moment the alert fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertMessage {
    pub flame_detected: bool,
    pub temperature_c: f32,
}

impl AlertMessage {
    pub fn new(flame_detected: bool, temperature_c: f32) -> Self {
        Self {
            flame_detected,
            temperature_c,
        }
    }

    /// Whole degrees, truncated toward zero (36.9 -> 36, -3.7 -> -3).
    /// NaN maps to 0 and out-of-range values saturate.
    pub fn whole_degrees(&self) -> i32 {
        self.temperature_c as i32
    }

    /// Render the banner, flame line and temperature line.
    pub fn lines(&self) -> Result<heapless::Vec<Line, LINE_COUNT>, CommsError> {
        let mut out = heapless::Vec::new();

        let mut banner = Line::new();
        banner
            .push_str(BANNER)
            .map_err(|_| CommsError::PayloadOverflow)?;

        let mut flame = Line::new();
        flame
            .push_str(if self.flame_detected {
                "Flame: DETECTED"
            } else {
                "Flame: not detected"
            })
            .map_err(|_| CommsError::PayloadOverflow)?;

        let mut temp = Line::new();
        write!(temp, "Temperature: {}C", self.whole_degrees())
            .map_err(|_| CommsError::PayloadOverflow)?;

        for line in [banner, flame, temp] {
            out.push(line).map_err(|_| CommsError::PayloadOverflow)?;
        }
        Ok(out)
    }
}

/// Arms once at construction and disarms on the first [`take`](Self::take).
/// Only a restart re-arms it.
#[derive(Debug)]
pub struct NotificationLatch {
    armed: bool,
}

impl Default for NotificationLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationLatch {
    pub fn new() -> Self {
        Self { armed: true }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns `true` exactly once, then `false` forever.
    pub fn take(&mut self) -> bool {
        core::mem::replace(&mut self.armed, false)
    }
}
