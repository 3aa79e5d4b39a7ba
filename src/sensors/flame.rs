//! IR flame sensor driver (analog output).
//!
//! The module's output falls as infrared intensity rises, so *lower*
//! readings mean a closer or stronger flame. Interpretation is left to
//! [`Thresholds::flame_detected`](crate::hazard::Thresholds::flame_detected).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API, scaled to 10 bits.
//! On host/test: reads from a static `AtomicI32` for injection.

use core::sync::atomic::AtomicI32;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(target_os = "espidf")]
use crate::pins;

/// Idle level of the sensor with no flame in view.
static SIM_FLAME_RAW: AtomicI32 = AtomicI32::new(1023);

/// Inject a 10-bit flame reading (host builds only).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_flame(raw: i32) {
    SIM_FLAME_RAW.store(raw, Ordering::Relaxed);
}

pub struct FlameSensor {
    channel: u32,
}

impl FlameSensor {
    pub fn new(channel: u32) -> Self {
        Self { channel }
    }

    pub fn channel(&self) -> u32 {
        self.channel
    }

    #[cfg(target_os = "espidf")]
    pub fn read(&self) -> i32 {
        i32::from(hw_init::adc1_read(self.channel) >> pins::ADC_SCALE_SHIFT)
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn read(&self) -> i32 {
        SIM_FLAME_RAW.load(Ordering::Relaxed)
    }
}
