//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AlarmService (domain)
//! ```
//!
//! Driven adapters (sensors, indicators, notifier, event sinks) implement
//! these traits. The [`AlarmService`](super::service::AlarmService) consumes
//! them via generics, so the domain core never touches hardware directly.

use crate::error::CommsError;
use crate::hazard::Reading;
use crate::indicator::IndicatorLevels;
use crate::notification::AlertMessage;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per cycle.
pub trait SensorPort {
    /// Sample smoke, flame and temperature.
    fn read_all(&mut self) -> Reading;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the LEDs and the buzzer.
///
/// Writes are treated as always succeeding; adapters log failures.
pub trait IndicatorPort {
    /// Drive every output to the given levels.
    fn apply(&mut self, levels: IndicatorLevels);

    /// All LEDs off, buzzer silent.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Notifier port (driven adapter: domain → messaging channel)
// ───────────────────────────────────────────────────────────────

/// Accepts one alert for transmission. No acknowledgement is awaited;
/// an `Ok` only means the message was accepted for sending.
pub trait NotifierPort {
    fn dispatch(&mut self, message: &AlertMessage) -> Result<(), CommsError>;
}

// ───────────────────────────────────────────────────────────────
// Serial port (driven adapter: notifier → UART)
// ───────────────────────────────────────────────────────────────

/// Raw byte sink underneath the modem dialogue.
pub trait SerialPort {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), CommsError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
