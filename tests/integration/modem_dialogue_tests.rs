//! Integration tests for the SMS modem adapter: frame order, pacing and
//! failure handling against a recording serial port.

use embassy_time::Instant;

use hazardwatch::adapters::modem::{CTRL_Z, DIALOGUE_LEN, SmsModem};
use hazardwatch::app::ports::NotifierPort;
use hazardwatch::config::AlarmConfig;
use hazardwatch::error::CommsError;
use hazardwatch::notification::AlertMessage;

use crate::mock_hw::MockSerial;

fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

fn modem_with_gap(gap_ms: u32) -> SmsModem<MockSerial> {
    let config = AlarmConfig {
        modem_command_gap_ms: gap_ms,
        ..AlarmConfig::default()
    };
    SmsModem::new(MockSerial::default(), &config)
}

#[test]
fn idle_modem_writes_nothing() {
    let mut modem = modem_with_gap(1_000);
    assert_eq!(modem.poll(at(0)), Ok(false));
    assert!(modem.is_idle());
    assert!(modem.serial().frames.is_empty());
}

#[test]
fn frames_are_paced_by_the_command_gap() {
    let mut modem = modem_with_gap(1_000);
    modem.dispatch(&AlertMessage::new(true, 41.2)).unwrap();

    assert_eq!(modem.poll(at(100)), Ok(true));
    assert_eq!(modem.poll(at(600)), Ok(false));
    assert_eq!(modem.poll(at(1_099)), Ok(false));
    assert_eq!(modem.poll(at(1_100)), Ok(true));
    assert_eq!(modem.poll(at(2_100)), Ok(true));
    assert_eq!(modem.pending_frames(), 1);
    assert_eq!(modem.poll(at(3_100)), Ok(true));
    assert_eq!(modem.poll(at(9_000)), Ok(false));

    assert!(modem.is_idle());
    assert_eq!(modem.frames_sent(), DIALOGUE_LEN as u32);
}

#[test]
fn byte_stream_matches_text_mode_dialogue() {
    let mut modem = modem_with_gap(1);
    modem.dispatch(&AlertMessage::new(true, 41.2)).unwrap();
    for ms in 0..10 {
        let _ = modem.poll(at(ms));
    }

    let mut expected = Vec::new();
    expected.extend_from_slice(b"AT+CMGF=1\r");
    expected.extend_from_slice(b"AT+CMGS=\"+10000000000\"\r");
    expected.extend_from_slice(b"ALERT: hazardous gas level detected!\r\n");
    expected.extend_from_slice(b"Flame: DETECTED\r\n");
    expected.extend_from_slice(b"Temperature: 41C\r\n");
    expected.push(CTRL_Z);
    assert_eq!(modem.serial().stream(), expected);
    assert_eq!(modem.serial().stream().last(), Some(&0x1A));
}

#[test]
fn configured_recipient_is_used() {
    let mut config = AlarmConfig::default();
    config.recipient.clear();
    config.recipient.push_str("+441234567890").unwrap();
    let mut modem = SmsModem::new(MockSerial::default(), &config);

    modem.dispatch(&AlertMessage::new(false, 20.0)).unwrap();
    modem.poll(at(0)).unwrap();
    modem.poll(at(1_000)).unwrap();

    assert_eq!(modem.serial().frames[1], b"AT+CMGS=\"+441234567890\"\r");
}

#[test]
fn write_failure_drops_the_rest_of_the_dialogue() {
    let mut failing = SmsModem::new(
        MockSerial {
            fail: true,
            ..MockSerial::default()
        },
        &AlarmConfig::default(),
    );
    failing.dispatch(&AlertMessage::new(false, 20.0)).unwrap();

    assert_eq!(failing.poll(at(0)), Err(CommsError::UartWriteFailed));
    assert!(failing.is_idle());
    assert_eq!(failing.frames_sent(), 0);
    assert_eq!(failing.poll(at(5_000)), Ok(false));
}

#[test]
fn modem_accepts_a_new_alert_once_idle() {
    let mut modem = modem_with_gap(1);
    let msg = AlertMessage::new(false, 20.0);
    modem.dispatch(&msg).unwrap();
    assert_eq!(modem.dispatch(&msg), Err(CommsError::ModemBusy));

    for ms in 0..10 {
        let _ = modem.poll(at(ms));
    }
    assert!(modem.is_idle());
    assert_eq!(modem.dispatch(&msg), Ok(()));
}
