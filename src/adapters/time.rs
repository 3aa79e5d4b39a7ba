//! ESP32 time adapter.
//!
//! Provides the monotonic [`Instant`] the control loop passes into the
//! service and the modem.
//!
//! - **`target_os = "espidf"`** — wraps `esp_timer_get_time()` from the
//!   ESP-IDF high-resolution timer (microsecond precision, monotonic).
//! - **`not(target_os = "espidf")`** — uses embassy-time's std driver for
//!   host-side testing and simulation.

use embassy_time::Instant;

/// Time since boot.
#[cfg(target_os = "espidf")]
pub fn now() -> Instant {
    // SAFETY: esp_timer is started by the IDF before app_main.
    let us = unsafe { esp_idf_svc::sys::esp_timer_get_time() };
    Instant::from_micros(us.max(0) as u64)
}

/// Time since the std driver's epoch.
#[cfg(not(target_os = "espidf"))]
pub fn now() -> Instant {
    Instant::now()
}

/// Whole seconds since boot, for log lines.
pub fn uptime_secs() -> u64 {
    now().as_secs()
}
