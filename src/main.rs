//! HazardWatch Firmware — Main Entry Point
//!
//! Hexagonal architecture with a single cooperative control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter        LogEventSink     SmsModem<ModemUart>   │
//! │  (Sensor+Indicator)     (EventSink)      (NotifierPort)        │
//! │        ▲                                                       │
//! │  TemperatureSampler thread (DS18B20, blocking conversions)     │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AlarmService (pure logic)                 │    │
//! │  │  Classifier · Pattern engine · Notification latch      │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use core::time::Duration;

use anyhow::{Context, Result};
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::gpio::{AnyOutputPin, PinDriver};
use log::{info, warn};

use hazardwatch::adapters::hardware::HardwareAdapter;
use hazardwatch::adapters::log_sink::LogEventSink;
use hazardwatch::adapters::modem::SmsModem;
use hazardwatch::adapters::time;
use hazardwatch::adapters::uart::ModemUart;
use hazardwatch::app::service::AlarmService;
use hazardwatch::config::AlarmConfig;
use hazardwatch::drivers::hw_init;
use hazardwatch::drivers::indicator_bank::IndicatorBank;
use hazardwatch::error::Error;
use hazardwatch::pins;
use hazardwatch::sensors::flame::FlameSensor;
use hazardwatch::sensors::sampler::TemperatureSampler;
use hazardwatch::sensors::smoke::SmokeSensor;
use hazardwatch::sensors::temperature::TemperatureProbe;
use hazardwatch::sensors::SensorHub;

fn output(gpio: i32) -> Result<PinDriver<'static, AnyOutputPin, esp_idf_svc::hal::gpio::Output>> {
    // SAFETY: each indicator GPIO in `pins` is claimed exactly once, here.
    let pin = unsafe { AnyOutputPin::new(gpio) };
    PinDriver::output(pin).with_context(|| format!("GPIO{gpio} output init"))
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  HazardWatch v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration (compiled-in) ────────────────────────
    let config = AlarmConfig::default();
    config.validate().map_err(Error::from)?;
    match serde_json::to_string(&config) {
        Ok(json) => info!("Config: {}", json),
        Err(e) => warn!("Config not serialisable: {}", e),
    }

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals(config.modem_baud).map_err(Error::from)?;

    // The probe blocks for a whole conversion, so it gets its own thread.
    let probe = TemperatureProbe::new(pins::TEMP_ONEWIRE_GPIO).map_err(Error::from)?;
    let sampler = TemperatureSampler::new(probe);
    let temperature = sampler.latest();
    let _sampler_thread = sampler
        .spawn(Duration::from_millis(u64::from(config.temperature_sample_interval_ms)))
        .context("temperature sampler thread")?;

    let hub = SensorHub::new(
        SmokeSensor::new(pins::SMOKE_ADC_CHANNEL),
        FlameSensor::new(pins::FLAME_ADC_CHANNEL),
        temperature,
    );
    let bank = IndicatorBank::new(
        output(pins::SAFE_LED_GPIO)?,
        output(pins::CAUTION_LED_GPIO)?,
        output(pins::DANGER_LED_GPIO)?,
        output(pins::BUZZER_GPIO)?,
    );
    let mut hw = HardwareAdapter::new(hub, bank);
    let mut modem = SmsModem::new(ModemUart::new(), &config);
    let mut log_sink = LogEventSink::new();

    // ── 4. Application core ───────────────────────────────────
    let mut app = AlarmService::new(&config).context("alarm service")?;
    app.start(&mut hw, &mut log_sink);

    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        let now = time::now();
        app.tick(now, &mut hw, &mut modem, &mut log_sink);

        if let Err(e) = modem.poll(now) {
            warn!("{} at {}s", Error::from(e), time::uptime_secs());
        }

        FreeRtos::delay_ms(config.loop_interval_ms);
    }
}
