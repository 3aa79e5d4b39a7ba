//! Indicator output driver: three LEDs and a buzzer.
//!
//! Each output is any `embedded_hal` [`OutputPin`], so the same driver runs
//! on `esp-idf-hal` pin drivers and on host-side mock pins.
//!
//! ## Change suppression
//!
//! The control loop applies levels every cycle. Pins are only written when
//! the requested levels differ from the last successfully written set.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::IndicatorError;
use crate::indicator::IndicatorLevels;

pub struct IndicatorBank<S, C, D, T> {
    safe: S,
    caution: C,
    danger: D,
    tone: T,
    current: Option<IndicatorLevels>,
}

impl<S, C, D, T> IndicatorBank<S, C, D, T>
where
    S: OutputPin,
    C: OutputPin,
    D: OutputPin,
    T: OutputPin,
{
    pub fn new(safe: S, caution: C, danger: D, tone: T) -> Self {
        Self {
            safe,
            caution,
            danger,
            tone,
            current: None,
        }
    }

    pub fn set(&mut self, levels: IndicatorLevels) -> Result<(), IndicatorError> {
        if self.current == Some(levels) {
            return Ok(());
        }
        // Forget the cached state first so a partial failure forces a
        // full rewrite on the next call.
        self.current = None;

        drive(&mut self.safe, levels.safe)?;
        drive(&mut self.caution, levels.caution)?;
        drive(&mut self.danger, levels.danger)?;
        drive(&mut self.tone, levels.tone)?;

        self.current = Some(levels);
        Ok(())
    }

    pub fn off(&mut self) -> Result<(), IndicatorError> {
        self.set(IndicatorLevels::OFF)
    }

    /// Last levels written successfully.
    pub fn current(&self) -> Option<IndicatorLevels> {
        self.current
    }
}

fn drive<P: OutputPin>(pin: &mut P, on: bool) -> Result<(), IndicatorError> {
    pin.set_state(PinState::from(on))
        .map_err(|_| IndicatorError::GpioWriteFailed)
}
