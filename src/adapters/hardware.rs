//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`] and the [`IndicatorBank`], exposing them
//! through [`SensorPort`] and [`IndicatorPort`]. On non-espidf targets
//! the sensors use cfg-gated simulation stubs and the bank can be built
//! over any `embedded_hal` pins.

use embedded_hal::digital::OutputPin;
use log::{info, warn};

use crate::app::ports::{IndicatorPort, SensorPort};
use crate::drivers::indicator_bank::IndicatorBank;
use crate::hazard::Reading;
use crate::indicator::IndicatorLevels;
use crate::sensors::SensorHub;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<S, C, D, T> {
    sensor_hub: SensorHub,
    indicators: IndicatorBank<S, C, D, T>,
    indicator_fault: bool,
}

impl<S, C, D, T> HardwareAdapter<S, C, D, T>
where
    S: OutputPin,
    C: OutputPin,
    D: OutputPin,
    T: OutputPin,
{
    pub fn new(sensor_hub: SensorHub, indicators: IndicatorBank<S, C, D, T>) -> Self {
        Self {
            sensor_hub,
            indicators,
            indicator_fault: false,
        }
    }

    fn write(&mut self, levels: IndicatorLevels) {
        match self.indicators.set(levels) {
            Ok(()) => {
                if self.indicator_fault {
                    info!("Indicator outputs recovered");
                    self.indicator_fault = false;
                }
            }
            Err(e) => {
                // Retried next cycle; only the first failure is logged.
                if !self.indicator_fault {
                    warn!("Indicator write failed: {}", e);
                    self.indicator_fault = true;
                }
            }
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<S, C, D, T> SensorPort for HardwareAdapter<S, C, D, T>
where
    S: OutputPin,
    C: OutputPin,
    D: OutputPin,
    T: OutputPin,
{
    fn read_all(&mut self) -> Reading {
        self.sensor_hub.read_all()
    }
}

// ── IndicatorPort implementation ──────────────────────────────

impl<S, C, D, T> IndicatorPort for HardwareAdapter<S, C, D, T>
where
    S: OutputPin,
    C: OutputPin,
    D: OutputPin,
    T: OutputPin,
{
    fn apply(&mut self, levels: IndicatorLevels) {
        self.write(levels);
    }

    fn all_off(&mut self) {
        self.write(IndicatorLevels::OFF);
    }
}
