//! Mock adapters for integration tests.
//!
//! Records every indicator write, alert and serial frame so tests can
//! assert on the full history without touching real GPIO or UART.

use std::collections::VecDeque;

use hazardwatch::app::events::AppEvent;
use hazardwatch::app::ports::{EventSink, IndicatorPort, NotifierPort, SensorPort, SerialPort};
use hazardwatch::error::CommsError;
use hazardwatch::hazard::Reading;
use hazardwatch::indicator::IndicatorLevels;
use hazardwatch::notification::AlertMessage;

// ── Indicator call record ─────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorCall {
    Apply(IndicatorLevels),
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

/// Scripted sensors plus recording indicators.
///
/// Readings are consumed front to back; once the script runs out the last
/// reading repeats.
pub struct MockHardware {
    script: VecDeque<Reading>,
    last: Reading,
    pub calls: Vec<IndicatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            last: Reading::default(),
            calls: Vec::new(),
        }
    }

    /// Queue a smoke sample with a clear flame channel and room temperature.
    pub fn push_smoke(&mut self, smoke: i32) -> &mut Self {
        self.push(Reading {
            smoke,
            flame: 1023,
            temperature_c: 21.0,
        })
    }

    pub fn push(&mut self, reading: Reading) -> &mut Self {
        self.script.push_back(reading);
        self
    }

    pub fn last_levels(&self) -> Option<IndicatorLevels> {
        self.calls.iter().rev().find_map(|c| match c {
            IndicatorCall::Apply(l) => Some(*l),
            IndicatorCall::AllOff => Some(IndicatorLevels::OFF),
        })
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_all(&mut self) -> Reading {
        if let Some(r) = self.script.pop_front() {
            self.last = r;
        }
        self.last
    }
}

impl IndicatorPort for MockHardware {
    fn apply(&mut self, levels: IndicatorLevels) {
        self.calls.push(IndicatorCall::Apply(levels));
    }

    fn all_off(&mut self) {
        self.calls.push(IndicatorCall::AllOff);
    }
}

// ── MockNotifier ──────────────────────────────────────────────

/// Records every alert handed to it; optionally refuses them.
#[derive(Default)]
pub struct MockNotifier {
    pub sent: Vec<AlertMessage>,
    pub attempts: u32,
    pub fail_with: Option<CommsError>,
}

impl NotifierPort for MockNotifier {
    fn dispatch(&mut self, message: &AlertMessage) -> Result<(), CommsError> {
        self.attempts += 1;
        if let Some(e) = self.fail_with {
            return Err(e);
        }
        self.sent.push(*message);
        Ok(())
    }
}

// ── MockSerial ────────────────────────────────────────────────

/// Collects each `write_all` call as one frame.
#[derive(Default)]
pub struct MockSerial {
    pub frames: Vec<Vec<u8>>,
    pub fail: bool,
}

#[allow(dead_code)]
impl MockSerial {
    /// All bytes written so far, in order.
    pub fn stream(&self) -> Vec<u8> {
        self.frames.concat()
    }
}

impl SerialPort for MockSerial {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), CommsError> {
        if self.fail {
            return Err(CommsError::UartWriteFailed);
        }
        self.frames.push(bytes.to_vec());
        Ok(())
    }
}

// ── CollectingSink ────────────────────────────────────────────

#[derive(Default)]
pub struct CollectingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl CollectingSink {
    pub fn tier_changes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::TierChanged { .. }))
            .count()
    }

    pub fn telemetry_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::Telemetry(_)))
            .count()
    }
}

impl EventSink for CollectingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── ClockedHardware ───────────────────────────────────────────

/// Critical smoke on every read, with a virtual clock that each read
/// advances by `read_cost_ms`. Indicator writes are stamped with the clock
/// at the moment they reach the pins.
pub struct ClockedHardware {
    pub clock_ms: u64,
    pub read_cost_ms: u64,
    pub applied: Vec<(u64, IndicatorLevels)>,
}

#[allow(dead_code)]
impl ClockedHardware {
    pub fn new(read_cost_ms: u64) -> Self {
        Self {
            clock_ms: 0,
            read_cost_ms,
            applied: Vec::new(),
        }
    }

    /// Durations of each completed danger-on and danger-off stretch, as
    /// seen on the pins. The trailing stretch is still open and left out.
    pub fn danger_runs(&self) -> Vec<u64> {
        let mut edges = Vec::new();
        let mut prev = None;
        for &(t, levels) in &self.applied {
            if prev != Some(levels.danger) {
                edges.push(t);
                prev = Some(levels.danger);
            }
        }
        edges.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

impl SensorPort for ClockedHardware {
    fn read_all(&mut self) -> Reading {
        self.clock_ms += self.read_cost_ms;
        Reading {
            smoke: 900,
            flame: 1023,
            temperature_c: 21.0,
        }
    }
}

impl IndicatorPort for ClockedHardware {
    fn apply(&mut self, levels: IndicatorLevels) {
        self.applied.push((self.clock_ms, levels));
    }

    fn all_off(&mut self) {
        self.applied.push((self.clock_ms, IndicatorLevels::OFF));
    }
}
