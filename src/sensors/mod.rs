//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns the analog drivers and the read side of the temperature
//! sampler, and produces one [`Reading`] per control cycle without
//! blocking.

pub mod flame;
pub mod sampler;
pub mod smoke;
pub mod temperature;

use log::info;

use crate::hazard::Reading;
use flame::FlameSensor;
use sampler::LatestTemperature;
use smoke::SmokeSensor;

/// Aggregates all sensor drivers and produces a unified reading.
pub struct SensorHub {
    smoke: SmokeSensor,
    flame: FlameSensor,
    temperature: LatestTemperature,
}

impl SensorHub {
    /// Construct a new hub. Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(smoke: SmokeSensor, flame: FlameSensor, temperature: LatestTemperature) -> Self {
        info!(
            "Sensors: smoke ADC1 CH{}, flame ADC1 CH{}",
            smoke.channel(),
            flame.channel()
        );
        Self {
            smoke,
            flame,
            temperature,
        }
    }

    /// Read every sensor.
    ///
    /// Smoke and flame are sampled now. Temperature is the sampler's last
    /// good value (0.0 before the first success).
    pub fn read_all(&self) -> Reading {
        Reading {
            smoke: self.smoke.read(),
            flame: self.flame.read(),
            temperature_c: self.temperature.celsius(),
        }
    }
}
