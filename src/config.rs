//! System configuration parameters
//!
//! All tunable parameters for the HazardWatch alarm. Values are compiled
//! in; there is no configuration file and nothing is persisted across
//! restarts.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::hazard::Thresholds;

/// Maximum length of the SMS recipient address (E.164 plus margin).
pub const RECIPIENT_CAP: usize = 20;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmConfig {
    // --- Smoke thresholds (10-bit raw ADC units) ---
    /// Readings above this are at least `Elevated`.
    pub smoke_elevated_threshold: i32,
    /// Readings above this are `Critical`.
    pub smoke_critical_threshold: i32,

    // --- Flame ---
    /// Raw flame readings at or *below* this count as a flame.
    pub flame_threshold: i32,

    // --- Indicator timing ---
    /// On (and off) time of the caution pulse in milliseconds.
    pub caution_half_period_ms: u32,
    /// On (and off) time of the danger pulse in milliseconds.
    pub danger_half_period_ms: u32,

    // --- Timing ---
    /// Sleep between control loop iterations (milliseconds).
    pub loop_interval_ms: u32,
    /// Telemetry report interval (seconds).
    pub telemetry_interval_secs: u32,
    /// Period of the temperature sampler thread (milliseconds). A DS18B20
    /// conversion blocks for ~100 ms, so it never runs on the control loop.
    pub temperature_sample_interval_ms: u32,

    // --- Modem ---
    /// Gap between frames of the SMS dialogue (milliseconds).
    pub modem_command_gap_ms: u32,
    /// UART baud rate of the GSM modem.
    pub modem_baud: u32,
    /// Phone number that receives the alert SMS.
    pub recipient: heapless::String<RECIPIENT_CAP>,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        let mut recipient = heapless::String::new();
        // Fits: 12 chars into a 20-char buffer.
        let _ = recipient.push_str("+10000000000");

        Self {
            // Smoke thresholds
            smoke_elevated_threshold: 520,
            smoke_critical_threshold: 620,

            // Flame
            flame_threshold: 950,

            // Indicators
            caution_half_period_ms: 1000, // 1 s on / 1 s off
            danger_half_period_ms: 75,    // 75 ms on / 75 ms off

            // Timing
            loop_interval_ms: 25,
            telemetry_interval_secs: 10,
            temperature_sample_interval_ms: 1000,

            // Modem
            modem_command_gap_ms: 1000,
            modem_baud: 9600,
            recipient,
        }
    }
}

impl AlarmConfig {
    /// Range-check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.smoke_elevated_threshold >= self.smoke_critical_threshold {
            return Err(ConfigError::ValidationFailed(
                "smoke_elevated_threshold must be < smoke_critical_threshold",
            ));
        }
        if self.caution_half_period_ms == 0 || self.danger_half_period_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "indicator half periods must be non-zero",
            ));
        }
        if self.loop_interval_ms == 0 || self.loop_interval_ms > self.danger_half_period_ms {
            return Err(ConfigError::ValidationFailed(
                "loop_interval_ms must be 1..=danger_half_period_ms",
            ));
        }
        if self.telemetry_interval_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "telemetry_interval_secs must be non-zero",
            ));
        }
        if self.temperature_sample_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "temperature_sample_interval_ms must be non-zero",
            ));
        }
        if self.modem_baud == 0 {
            return Err(ConfigError::ValidationFailed("modem_baud must be non-zero"));
        }
        if !is_valid_recipient(&self.recipient) {
            return Err(ConfigError::ValidationFailed(
                "recipient must be '+' followed by digits",
            ));
        }
        Ok(())
    }

    /// Classifier thresholds derived from this config.
    pub fn thresholds(&self) -> Result<Thresholds, ConfigError> {
        Thresholds::new(
            self.smoke_elevated_threshold,
            self.smoke_critical_threshold,
            self.flame_threshold,
        )
    }
}

fn is_valid_recipient(s: &str) -> bool {
    let digits = s.strip_prefix('+').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Configuration rejected during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A field failed range validation; the message names it.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl core::error::Error for ConfigError {}
