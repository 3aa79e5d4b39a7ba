//! Fuzz target: `SmsModem` dispatch / poll interleaving
//!
//! Each input byte is an operation: dispatch an alert, poll at some time
//! step, or toggle a serial fault. The modem must never panic, never hold
//! more than one dialogue, and every completed dialogue written to the
//! serial port must end with Ctrl-Z.
//!
//! cargo fuzz run fuzz_modem_dialogue

#![no_main]

use embassy_time::Instant;
use hazardwatch::adapters::modem::{CTRL_Z, DIALOGUE_LEN, SmsModem};
use hazardwatch::app::ports::{NotifierPort, SerialPort};
use hazardwatch::config::AlarmConfig;
use hazardwatch::error::CommsError;
use hazardwatch::notification::AlertMessage;
use libfuzzer_sys::fuzz_target;

#[derive(Default)]
struct Sink {
    bytes: Vec<u8>,
    fail: bool,
}

impl SerialPort for Sink {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), CommsError> {
        if self.fail {
            return Err(CommsError::UartWriteFailed);
        }
        self.bytes.extend_from_slice(bytes);
        Ok(())
    }
}

fuzz_target!(|data: &[u8]| {
    let mut modem = SmsModem::new(Sink::default(), &AlarmConfig::default());
    let mut now_ms: u64 = 0;
    let mut ever_faulted = false;

    for &op in data {
        match op % 4 {
            0 => {
                let busy = !modem.is_idle();
                let r = modem.dispatch(&AlertMessage::new(op & 0x10 != 0, f32::from(op)));
                if busy {
                    assert_eq!(r, Err(CommsError::ModemBusy));
                } else {
                    assert_eq!(r, Ok(()));
                }
            }
            1 | 2 => {
                now_ms += u64::from(op) * 16;
                let _ = modem.poll(Instant::from_millis(now_ms));
            }
            _ => {
                let serial = modem.serial_mut();
                serial.fail = !serial.fail;
                ever_faulted = true;
            }
        }
        assert!(modem.pending_frames() <= DIALOGUE_LEN);
    }

    if !ever_faulted && modem.is_idle() && modem.frames_sent() > 0 {
        assert_eq!(modem.serial().bytes.last(), Some(&CTRL_Z));
    }
});
