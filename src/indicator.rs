//! Indicator pattern engine.
//!
//! Turns the current [`Tier`] into per-output levels for the three LEDs
//! and the buzzer. Pulses are derived from a monotonic clock instead of
//! blocking delays, so the control loop stays responsive while the
//! on/off timing is preserved.
//!
//! | Pattern      | safe | caution        | danger        | tone           |
//! |--------------|------|----------------|---------------|----------------|
//! | SafeSteady   | on   | off            | off           | off            |
//! | CautionPulse | off  | 1 s on / 1 s off | off         | with caution   |
//! | DangerPulse  | off  | off            | 75 ms on / 75 ms off | with danger |
//!
//! The pulse phase restarts whenever the pattern changes, so every entry
//! into a pulsing pattern begins with the "on" half.

use embassy_time::{Duration, Instant};

use crate::hazard::Tier;

/// Indicator pattern, one per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    SafeSteady,
    CautionPulse,
    DangerPulse,
}

impl Pattern {
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Normal => Self::SafeSteady,
            Tier::Elevated => Self::CautionPulse,
            Tier::Critical => Self::DangerPulse,
        }
    }
}

/// Binary output levels for one control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorLevels {
    pub safe: bool,
    pub caution: bool,
    pub danger: bool,
    pub tone: bool,
}

impl IndicatorLevels {
    /// Everything dark and silent.
    pub const OFF: Self = Self {
        safe: false,
        caution: false,
        danger: false,
        tone: false,
    };
}

/// Tracks the active pattern and when its phase started.
pub struct PatternEngine {
    caution_half: Duration,
    danger_half: Duration,
    active: Option<Pattern>,
    phase_start: Instant,
}

impl PatternEngine {
    pub fn new(caution_half_ms: u32, danger_half_ms: u32) -> Self {
        Self {
            caution_half: Duration::from_millis(u64::from(caution_half_ms.max(1))),
            danger_half: Duration::from_millis(u64::from(danger_half_ms.max(1))),
            active: None,
            phase_start: Instant::from_ticks(0),
        }
    }

    /// Select the pattern for this cycle. Restarts the phase only when the
    /// pattern actually changes.
    pub fn set_pattern(&mut self, pattern: Pattern, now: Instant) {
        if self.active != Some(pattern) {
            self.active = Some(pattern);
            self.phase_start = now;
        }
    }

    pub fn active(&self) -> Option<Pattern> {
        self.active
    }

    /// Output levels at `now` for the active pattern.
    pub fn levels(&self, now: Instant) -> IndicatorLevels {
        match self.active {
            None => IndicatorLevels::OFF,
            Some(Pattern::SafeSteady) => IndicatorLevels {
                safe: true,
                ..IndicatorLevels::OFF
            },
            Some(Pattern::CautionPulse) => {
                let on = self.pulse_on(now, self.caution_half);
                IndicatorLevels {
                    caution: on,
                    tone: on,
                    ..IndicatorLevels::OFF
                }
            }
            Some(Pattern::DangerPulse) => {
                let on = self.pulse_on(now, self.danger_half);
                IndicatorLevels {
                    danger: on,
                    tone: on,
                    ..IndicatorLevels::OFF
                }
            }
        }
    }

    /// 50 % square wave: on for the first half of every period.
    fn pulse_on(&self, now: Instant, half: Duration) -> bool {
        let elapsed_ms = now.saturating_duration_since(self.phase_start).as_millis();
        let half_ms = half.as_millis().max(1);
        elapsed_ms % (2 * half_ms) < half_ms
    }
}
