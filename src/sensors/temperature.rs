//! DS18B20 1-Wire temperature probe.
//!
//! The bus and device protocol live in the ESP-IDF `espressif/ds18b20`
//! component; this driver only discovers the first probe on the bus and
//! asks it for a reading. Resolution is set to 9 bits so a conversion
//! takes ~94 ms instead of the 750 ms default.
//!
//! [`TemperatureProbe::read`] blocks for the whole conversion. It is only
//! called from the [`sampler`](super::sampler) thread, never from the
//! control loop.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: calls the component's C API through esp-idf-sys bindings.
//! On host/test: reads from static atomics, with an injectable fault.

use core::sync::atomic::{AtomicBool, AtomicU32};
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;
#[cfg(target_os = "espidf")]
use log::info;

use crate::error::SensorError;

/// A blocking temperature reading, in degrees Celsius.
pub trait TemperatureSource: Send + 'static {
    fn read(&mut self) -> Result<f32, SensorError>;
}

/// 25.0 °C as `f32` bits.
static SIM_TEMP_BITS: AtomicU32 = AtomicU32::new(0x41C8_0000);
static SIM_TEMP_FAULT: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temperature(celsius: f32) {
    SIM_TEMP_BITS.store(celsius.to_bits(), Ordering::Relaxed);
}

/// Make subsequent host reads fail (`true`) or succeed (`false`).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_probe_fault(fault: bool) {
    SIM_TEMP_FAULT.store(fault, Ordering::Relaxed);
}

pub struct TemperatureProbe {
    #[cfg(target_os = "espidf")]
    handle: ds18b20_device_handle_t,
}

// SAFETY: the device handle is moved into the sampler thread and used only
// there; the component keeps no thread-affine state.
#[cfg(target_os = "espidf")]
unsafe impl Send for TemperatureProbe {}

impl TemperatureProbe {
    /// Create the 1-Wire bus on `gpio` and bind the first DS18B20 found.
    #[cfg(target_os = "espidf")]
    pub fn new(gpio: i32) -> Result<Self, SensorError> {
        // SAFETY: called once from main() before the control loop. Every
        // out-pointer is a live local; the iterator is deleted before return.
        unsafe {
            let bus_cfg = onewire_bus_config_t {
                bus_gpio_num: gpio,
                ..core::mem::zeroed()
            };
            let rmt_cfg = onewire_bus_rmt_config_t {
                max_rx_bytes: 10,
            };
            let mut bus: onewire_bus_handle_t = core::ptr::null_mut();
            let ret = onewire_new_bus_rmt(&bus_cfg, &rmt_cfg, &mut bus);
            if ret != ESP_OK as i32 {
                return Err(SensorError::ProbeReadFailed(ret));
            }

            let mut iter: onewire_device_iter_handle_t = core::ptr::null_mut();
            let ret = onewire_new_device_iter(bus, &mut iter);
            if ret != ESP_OK as i32 {
                return Err(SensorError::ProbeReadFailed(ret));
            }

            let mut handle: ds18b20_device_handle_t = core::ptr::null_mut();
            let mut device: onewire_device_t = core::mem::zeroed();
            while onewire_device_iter_get_next(iter, &mut device) == ESP_OK as i32 {
                let cfg: ds18b20_config_t = core::mem::zeroed();
                if ds18b20_new_device(&mut device, &cfg, &mut handle) == ESP_OK as i32 {
                    break;
                }
            }
            onewire_del_device_iter(iter);

            if handle.is_null() {
                return Err(SensorError::ProbeNotFound);
            }
            ds18b20_set_resolution(handle, ds18b20_resolution_t_DS18B20_RESOLUTION_9B);
            info!("DS18B20 bound on GPIO{}", gpio);

            Ok(Self { handle })
        }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new(_gpio: i32) -> Result<Self, SensorError> {
        Ok(Self {})
    }
}

impl TemperatureSource for TemperatureProbe {
    /// Start a conversion, wait it out and read the result.
    #[cfg(target_os = "espidf")]
    fn read(&mut self) -> Result<f32, SensorError> {
        let mut celsius: f32 = 0.0;
        // SAFETY: handle was returned by ds18b20_new_device() and is never freed.
        let ret = unsafe { ds18b20_trigger_temperature_conversion(self.handle) };
        if ret != ESP_OK as i32 {
            return Err(SensorError::ProbeReadFailed(ret));
        }
        let ret = unsafe { ds18b20_get_temperature(self.handle, &mut celsius) };
        if ret != ESP_OK as i32 {
            return Err(SensorError::ProbeReadFailed(ret));
        }
        Ok(celsius)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read(&mut self) -> Result<f32, SensorError> {
        if SIM_TEMP_FAULT.load(Ordering::Relaxed) {
            return Err(SensorError::ProbeReadFailed(-1));
        }
        Ok(f32::from_bits(SIM_TEMP_BITS.load(Ordering::Relaxed)))
    }
}
