//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | tier={} | smoke={} | flame={} ({}) | T={:.1}\u{00b0}C | \
                     latch={} | cycles={}",
                    t.tier,
                    t.smoke,
                    t.flame,
                    if t.flame_detected { "DETECTED" } else { "clear" },
                    t.temperature_c,
                    if t.latch_armed { "armed" } else { "spent" },
                    t.cycles,
                );
            }
            AppEvent::TierChanged { from: Some(from), to } => {
                info!("TIER | {} -> {}", from, to);
            }
            AppEvent::TierChanged { from: None, to } => {
                info!("TIER | initial {}", to);
            }
            AppEvent::NotificationDispatched(msg) => {
                info!(
                    "ALERT | SMS queued (flame={}, T={}C)",
                    msg.flame_detected,
                    msg.whole_degrees()
                );
            }
            AppEvent::NotificationFailed(e) => {
                warn!("ALERT | dispatch failed: {} (not retried)", e);
            }
            AppEvent::Started => {
                info!("START | alarm service running");
            }
        }
    }
}
