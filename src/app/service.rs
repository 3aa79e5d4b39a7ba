//! Application service — the hexagonal core.
//!
//! [`AlarmService`] owns the classifier thresholds, the indicator pattern
//! engine and the notification latch. All I/O flows through port traits
//! injected at call sites, so the whole service is testable with mocks.
//!
//! ```text
//!   SensorPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                  │       AlarmService        │
//! IndicatorPort ◀──│ classify · pattern · latch│──▶ NotifierPort
//!                  └──────────────────────────┘
//! ```

use embassy_time::{Duration, Instant};
use log::{info, warn};

use crate::config::{AlarmConfig, ConfigError};
use crate::hazard::{Reading, Thresholds, Tier};
use crate::indicator::{IndicatorLevels, Pattern, PatternEngine};
use crate::notification::{AlertMessage, NotificationLatch};

use super::events::{AppEvent, TelemetryData};
use super::ports::{EventSink, IndicatorPort, NotifierPort, SensorPort};

// ───────────────────────────────────────────────────────────────
// AlarmService
// ───────────────────────────────────────────────────────────────

/// Constructed once at boot and owned by the control loop.
pub struct AlarmService {
    thresholds: Thresholds,
    patterns: PatternEngine,
    /// Gates the alert to one dispatch per process lifetime.
    latch: NotificationLatch,
    tier: Option<Tier>,
    reading: Reading,
    telemetry_interval: Duration,
    next_telemetry: Option<Instant>,
    cycle_count: u64,
}

impl AlarmService {
    /// Build the service from a validated configuration.
    pub fn new(config: &AlarmConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            thresholds: config.thresholds()?,
            patterns: PatternEngine::new(config.caution_half_period_ms, config.danger_half_period_ms),
            latch: NotificationLatch::new(),
            tier: None,
            reading: Reading::default(),
            telemetry_interval: Duration::from_secs(u64::from(config.telemetry_interval_secs)),
            next_telemetry: None,
            cycle_count: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, hw: &mut impl IndicatorPort, sink: &mut impl EventSink) {
        hw.all_off();
        sink.emit(&AppEvent::Started);
        info!(
            "AlarmService started (smoke {}/{}, flame <= {})",
            self.thresholds.lower(),
            self.thresholds.upper(),
            self.thresholds.flame()
        );
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one cycle: read sensors → classify → indicators → alert.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`IndicatorPort`] so one adapter can own every peripheral.
    pub fn tick(
        &mut self,
        now: Instant,
        hw: &mut (impl SensorPort + IndicatorPort),
        notifier: &mut impl NotifierPort,
        sink: &mut impl EventSink,
    ) -> Tier {
        self.cycle_count += 1;

        // 1. Fresh reading
        let reading = hw.read_all();
        self.reading = reading;

        // 2. Classification
        let tier = self.thresholds.classify(reading.smoke);
        let flame = self.thresholds.flame_detected(reading.flame);

        let prev = self.tier;
        if prev != Some(tier) {
            self.tier = Some(tier);
            sink.emit(&AppEvent::TierChanged { from: prev, to: tier });
        }

        // 3. Indicators (independent of the latch)
        self.patterns.set_pattern(Pattern::for_tier(tier), now);
        hw.apply(self.patterns.levels(now));

        // 4. One-shot alert
        if tier == Tier::Critical && self.latch.take() {
            let message = AlertMessage::new(flame, reading.temperature_c);
            match notifier.dispatch(&message) {
                Ok(()) => {
                    info!("Alert dispatched (flame={}, T={:.1}C)", flame, reading.temperature_c);
                    sink.emit(&AppEvent::NotificationDispatched(message));
                }
                Err(e) => {
                    warn!("Alert dispatch failed: {} (not retried)", e);
                    sink.emit(&AppEvent::NotificationFailed(e));
                }
            }
        }

        // 5. Telemetry
        if self.next_telemetry.is_none_or(|due| now >= due) {
            sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
            self.next_telemetry = Some(now + self.telemetry_interval);
        }

        tier
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            tier: self.tier.unwrap_or(Tier::Normal),
            smoke: self.reading.smoke,
            flame: self.reading.flame,
            flame_detected: self.thresholds.flame_detected(self.reading.flame),
            temperature_c: self.reading.temperature_c,
            latch_armed: self.latch.is_armed(),
            cycles: self.cycle_count,
        }
    }

    /// Tier of the last cycle; `None` before the first tick.
    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }

    pub fn latch_armed(&self) -> bool {
        self.latch.is_armed()
    }
}
