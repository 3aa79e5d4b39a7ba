//! MQ-2 smoke / combustible-gas sensor driver.
//!
//! Reads the analog output through an ADC1 channel. The sample is scaled
//! from 12 to 10 bits so the classifier thresholds keep their calibrated
//! meaning. No filtering and no plausibility check: a disconnected sensor
//! reads as clean air.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static `AtomicI32` for injection.

use core::sync::atomic::AtomicI32;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(target_os = "espidf")]
use crate::pins;

static SIM_SMOKE_RAW: AtomicI32 = AtomicI32::new(0);

/// Inject a 10-bit smoke reading (host builds only).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_smoke(raw: i32) {
    SIM_SMOKE_RAW.store(raw, Ordering::Relaxed);
}

pub struct SmokeSensor {
    channel: u32,
}

impl SmokeSensor {
    pub fn new(channel: u32) -> Self {
        Self { channel }
    }

    pub fn channel(&self) -> u32 {
        self.channel
    }

    /// Raw 10-bit reading.
    #[cfg(target_os = "espidf")]
    pub fn read(&self) -> i32 {
        i32::from(hw_init::adc1_read(self.channel) >> pins::ADC_SCALE_SHIFT)
    }

    /// Raw 10-bit reading.
    #[cfg(not(target_os = "espidf"))]
    pub fn read(&self) -> i32 {
        SIM_SMOKE_RAW.load(Ordering::Relaxed)
    }
}
