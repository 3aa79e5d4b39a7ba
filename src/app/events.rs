//! Outbound application events.
//!
//! The [`AlarmService`](super::service::AlarmService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.

use crate::error::CommsError;
use crate::hazard::Tier;
use crate::notification::AlertMessage;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The service has started.
    Started,

    /// The hazard tier changed. `from` is `None` on the first cycle.
    TierChanged { from: Option<Tier>, to: Tier },

    /// The one-shot alert was accepted by the notifier.
    NotificationDispatched(AlertMessage),

    /// The one-shot alert was rejected. It is not retried.
    NotificationFailed(CommsError),

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging.
#[derive(Debug, Clone, Copy)]
pub struct TelemetryData {
    pub tier: Tier,
    pub smoke: i32,
    pub flame: i32,
    pub flame_detected: bool,
    pub temperature_c: f32,
    pub latch_armed: bool,
    pub cycles: u64,
}
