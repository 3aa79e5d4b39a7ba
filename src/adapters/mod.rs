//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements     | Connects to                |
//! |------------|----------------|----------------------------|
//! | `hardware` | SensorPort     | ESP32 ADC, DS18B20         |
//! |            | IndicatorPort  | LED and buzzer GPIOs       |
//! | `log_sink` | EventSink      | Serial log output          |
//! | `modem`    | NotifierPort   | GSM modem (SMS text mode)  |
//! | `uart`     | SerialPort     | ESP32 UART driver          |
//! | `time`     | —              | ESP32 system timer         |

pub mod hardware;
pub mod log_sink;
pub mod modem;
pub mod time;
pub mod uart;
