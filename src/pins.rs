//! GPIO / peripheral pin assignments for the HazardWatch board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// MQ-2 smoke/gas sensor analog output.
/// ADC1 channel 3 (GPIO 4 on ESP32-S3).
pub const SMOKE_ADC_GPIO: i32 = 4;
pub const SMOKE_ADC_CHANNEL: u32 = 3;

/// IR flame sensor analog output (lower = stronger flame).
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const FLAME_ADC_GPIO: i32 = 5;
pub const FLAME_ADC_CHANNEL: u32 = 4;

/// ADC1 samples at 12 bits; thresholds are calibrated for 10-bit samples.
pub const ADC_SCALE_SHIFT: u32 = 2;

// ---------------------------------------------------------------------------
// Sensors — 1-Wire
// ---------------------------------------------------------------------------

/// DS18B20 data line (external 4.7 kΩ pull-up).
pub const TEMP_ONEWIRE_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Indicators
// ---------------------------------------------------------------------------

/// Green "safe" LED.
pub const SAFE_LED_GPIO: i32 = 11;
/// Yellow "caution" LED.
pub const CAUTION_LED_GPIO: i32 = 12;
/// Red "danger" LED.
pub const DANGER_LED_GPIO: i32 = 13;
/// Active buzzer (driven HIGH = sounding).
pub const BUZZER_GPIO: i32 = 14;

// ---------------------------------------------------------------------------
// GSM modem (SIM800L) on UART1
// ---------------------------------------------------------------------------

pub const MODEM_UART_PORT: i32 = 1;
pub const MODEM_UART_TX_GPIO: i32 = 17;
pub const MODEM_UART_RX_GPIO: i32 = 18;
/// UART driver TX ring buffer size (bytes).
pub const MODEM_UART_TX_BUF: i32 = 256;
/// UART driver RX ring buffer size (bytes). Responses are not parsed but
/// the driver requires a receive buffer.
pub const MODEM_UART_RX_BUF: i32 = 256;
