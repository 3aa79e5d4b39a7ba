//! Background temperature sampling.
//!
//! A DS18B20 conversion blocks its caller for ~100 ms, longer than the
//! 75 ms danger half period. The probe therefore runs on its own thread
//! and publishes each good reading into [`LatestTemperature`], which the
//! control loop reads without waiting.
//!
//! ```text
//!   sampler thread:  probe.read() ──▶ AtomicU32 (f32 bits)
//!   control loop:    SensorHub::read_all() ◀── load
//! ```

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use core::time::Duration;
use std::sync::Arc;
use std::thread::JoinHandle;

use log::{info, warn};

use super::temperature::TemperatureSource;
use crate::error::SensorError;

/// Stack for the sampler thread. Only the probe call and one log line run on it.
const SAMPLER_STACK_SIZE: usize = 4096;

#[derive(Default)]
struct Shared {
    /// Last good reading as `f32` bits; 0 (= 0.0 °C) before the first one.
    bits: AtomicU32,
    failing: AtomicBool,
    samples: AtomicU32,
}

/// Cheap, cloneable read side of the sampler.
#[derive(Clone, Default)]
pub struct LatestTemperature(Arc<Shared>);

impl LatestTemperature {
    /// Last good reading in degrees Celsius, 0.0 before any success.
    pub fn celsius(&self) -> f32 {
        f32::from_bits(self.0.bits.load(Ordering::Acquire))
    }

    /// Whether the most recent probe read failed.
    pub fn probe_failing(&self) -> bool {
        self.0.failing.load(Ordering::Relaxed)
    }

    /// Number of good readings published so far.
    pub fn samples(&self) -> u32 {
        self.0.samples.load(Ordering::Acquire)
    }

    fn publish(&self, celsius: f32) {
        self.0.bits.store(celsius.to_bits(), Ordering::Release);
        self.0.samples.fetch_add(1, Ordering::AcqRel);
    }
}

/// Owns the blocking probe and feeds a [`LatestTemperature`].
pub struct TemperatureSampler<P> {
    source: P,
    latest: LatestTemperature,
}

impl<P: TemperatureSource> TemperatureSampler<P> {
    pub fn new(source: P) -> Self {
        Self {
            source,
            latest: LatestTemperature::default(),
        }
    }

    pub fn latest(&self) -> LatestTemperature {
        self.latest.clone()
    }

    /// Read the probe once (blocking) and publish the result.
    ///
    /// A failure keeps the previous good value. Only the first failure of
    /// a run and the recovery are logged.
    pub fn sample_once(&mut self) -> Result<f32, SensorError> {
        let result = self.source.read();
        match result {
            Ok(c) => {
                self.latest.publish(c);
                if self.latest.0.failing.swap(false, Ordering::Relaxed) {
                    info!("Temperature probe recovered ({:.1}C)", c);
                }
            }
            Err(e) => {
                if !self.latest.0.failing.swap(true, Ordering::Relaxed) {
                    warn!("{}; holding {:.1}C", e, self.latest.celsius());
                }
            }
        }
        result
    }

    /// Move the sampler onto its own thread, sampling every `period`.
    pub fn spawn(mut self, period: Duration) -> std::io::Result<JoinHandle<()>> {
        std::thread::Builder::new()
            .name("temp-sampler".into())
            .stack_size(SAMPLER_STACK_SIZE)
            .spawn(move || {
                info!("Temperature sampler running every {} ms", period.as_millis());
                loop {
                    let _ = self.sample_once();
                    std::thread::sleep(period);
                }
            })
    }
}
