//! Control-loop timing: the danger pulse as it appears on the pins when
//! the loop runs at its configured cadence, and the sensor hub's read cost
//! while a slow temperature conversion is in progress.

use std::time::{Duration, Instant as StdInstant};

use embassy_time::Instant;

use hazardwatch::app::service::AlarmService;
use hazardwatch::config::AlarmConfig;
use hazardwatch::error::SensorError;
use hazardwatch::pins;
use hazardwatch::sensors::flame::FlameSensor;
use hazardwatch::sensors::sampler::TemperatureSampler;
use hazardwatch::sensors::smoke::SmokeSensor;
use hazardwatch::sensors::temperature::TemperatureSource;
use hazardwatch::sensors::SensorHub;

use crate::mock_hw::{ClockedHardware, CollectingSink, MockNotifier};

/// Run the loop the way `main` does: tick at the current time, then sleep
/// one loop interval. Time spent inside the reads is not slept away.
fn run_loop(read_cost_ms: u64, until_ms: u64) -> ClockedHardware {
    let config = AlarmConfig::default();
    let mut svc = AlarmService::new(&config).unwrap();
    let mut hw = ClockedHardware::new(read_cost_ms);
    let mut n = MockNotifier::default();
    let mut sink = CollectingSink::default();

    while hw.clock_ms < until_ms {
        let now = Instant::from_millis(hw.clock_ms);
        svc.tick(now, &mut hw, &mut n, &mut sink);
        hw.clock_ms += u64::from(config.loop_interval_ms);
    }
    hw
}

#[test]
fn danger_pulse_holds_75ms_when_reads_do_not_block() {
    let hw = run_loop(0, 3_000);
    let runs = hw.danger_runs();

    assert!(runs.len() >= 30, "only {} danger edges", runs.len());
    assert!(runs.iter().all(|&r| r == 75), "runs: {runs:?}");
}

#[test]
fn conversion_inside_the_loop_would_distort_danger_pulse() {
    // A 9-bit DS18B20 conversion blocks ~100 ms. Were it read on the
    // control loop, the pins would no longer show 75 ms halves.
    let hw = run_loop(100, 6_000);
    let runs = hw.danger_runs();

    assert!(!runs.is_empty());
    assert!(runs.iter().any(|&r| r != 75), "runs: {runs:?}");
}

/// Stands in for a DS18B20 conversion.
struct SlowConversion;

impl TemperatureSource for SlowConversion {
    fn read(&mut self) -> Result<f32, SensorError> {
        std::thread::sleep(Duration::from_millis(100));
        Ok(19.5)
    }
}

#[test]
fn sensor_hub_read_does_not_wait_for_temperature_conversion() {
    let sampler = TemperatureSampler::new(SlowConversion);
    let latest = sampler.latest();
    let hub = SensorHub::new(
        SmokeSensor::new(pins::SMOKE_ADC_CHANNEL),
        FlameSensor::new(pins::FLAME_ADC_CHANNEL),
        latest.clone(),
    );
    sampler.spawn(Duration::from_millis(10)).unwrap();

    // Thirty loop intervals' worth of reads while conversions run back to back.
    for _ in 0..30 {
        let t0 = StdInstant::now();
        let _ = hub.read_all();
        assert!(t0.elapsed() < Duration::from_millis(25));
        std::thread::sleep(Duration::from_millis(5));
    }

    let deadline = StdInstant::now() + Duration::from_secs(5);
    while latest.samples() == 0 && StdInstant::now() < deadline {
        std::thread::sleep(Duration::from_millis(10));
    }
    assert!(latest.samples() > 0);
    assert_eq!(hub.read_all().temperature_c, 19.5);
}
