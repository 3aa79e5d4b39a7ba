//! GSM modem SMS adapter.
//!
//! Implements [`NotifierPort`] by sending an alert as a text-mode SMS
//! through a SIM800-class modem. The dialogue is four frames:
//!
//! ```text
//!   AT+CMGF=1\r                 text mode
//!   AT+CMGS="<recipient>"\r     recipient, modem answers with '>'
//!   <line>\r\n × 3              message body
//!   0x1A                        Ctrl-Z, submit
//! ```
//!
//! `dispatch` only queues the frames. [`SmsModem::poll`] writes at most one
//! frame per call and waits `modem_command_gap_ms` before the next, giving
//! the modem time to answer without blocking the control loop. Responses
//! are never parsed and delivery is never confirmed.

use embassy_time::{Duration, Instant};
use log::{debug, info, warn};

use crate::app::ports::{NotifierPort, SerialPort};
use crate::config::{AlarmConfig, RECIPIENT_CAP};
use crate::error::CommsError;
use crate::notification::AlertMessage;

/// Capacity of one frame (body frame is the largest).
pub const FRAME_CAP: usize = 192;
/// Frames in one dialogue.
pub const DIALOGUE_LEN: usize = 4;

pub const CMD_TEXT_MODE: &[u8] = b"AT+CMGF=1\r";
pub const CTRL_Z: u8 = 0x1A;

pub type Frame = heapless::Vec<u8, FRAME_CAP>;

pub struct SmsModem<S> {
    serial: S,
    recipient: heapless::String<RECIPIENT_CAP>,
    gap: Duration,
    queue: heapless::Deque<Frame, DIALOGUE_LEN>,
    next_send: Option<Instant>,
    frames_sent: u32,
}

impl<S: SerialPort> SmsModem<S> {
    pub fn new(serial: S, config: &AlarmConfig) -> Self {
        Self {
            serial,
            recipient: config.recipient.clone(),
            gap: Duration::from_millis(u64::from(config.modem_command_gap_ms)),
            queue: heapless::Deque::new(),
            next_send: None,
            frames_sent: 0,
        }
    }

    /// Write the next queued frame if the inter-frame gap has elapsed.
    ///
    /// Returns `Ok(true)` when a frame was written. A write failure drops
    /// the rest of the dialogue.
    pub fn poll(&mut self, now: Instant) -> Result<bool, CommsError> {
        if self.next_send.is_some_and(|at| now < at) {
            return Ok(false);
        }
        let Some(frame) = self.queue.pop_front() else {
            return Ok(false);
        };

        if let Err(e) = self.serial.write_all(&frame) {
            warn!("Modem: frame write failed ({}), dropping {} queued", e, self.queue.len());
            self.queue.clear();
            return Err(e);
        }

        self.frames_sent = self.frames_sent.saturating_add(1);
        self.next_send = Some(now + self.gap);
        debug!("Modem: frame sent ({} bytes, {} left)", frame.len(), self.queue.len());
        if self.queue.is_empty() {
            info!("Modem: SMS dialogue complete");
        }
        Ok(true)
    }

    /// No dialogue in progress.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn pending_frames(&self) -> usize {
        self.queue.len()
    }

    pub fn frames_sent(&self) -> u32 {
        self.frames_sent
    }

    pub fn serial(&self) -> &S {
        &self.serial
    }

    pub fn serial_mut(&mut self) -> &mut S {
        &mut self.serial
    }

    fn build_dialogue(&self, message: &AlertMessage) -> Result<[Frame; DIALOGUE_LEN], CommsError> {
        let text_mode = frame(&[CMD_TEXT_MODE])?;
        let recipient = frame(&[&b"AT+CMGS=\""[..], self.recipient.as_bytes(), &b"\"\r"[..]])?;

        let mut body = Frame::new();
        for line in message.lines()? {
            body.extend_from_slice(line.as_bytes())
                .map_err(|_| CommsError::PayloadOverflow)?;
            body.extend_from_slice(b"\r\n")
                .map_err(|_| CommsError::PayloadOverflow)?;
        }

        let submit = frame(&[&[CTRL_Z][..]])?;
        Ok([text_mode, recipient, body, submit])
    }
}

impl<S: SerialPort> NotifierPort for SmsModem<S> {
    fn dispatch(&mut self, message: &AlertMessage) -> Result<(), CommsError> {
        if !self.queue.is_empty() {
            return Err(CommsError::ModemBusy);
        }
        for f in self.build_dialogue(message)? {
            self.queue
                .push_back(f)
                .map_err(|_| CommsError::PayloadOverflow)?;
        }
        info!("Modem: SMS to {} queued", self.recipient);
        Ok(())
    }
}

fn frame(parts: &[&[u8]]) -> Result<Frame, CommsError> {
    let mut f = Frame::new();
    for part in parts {
        f.extend_from_slice(part)
            .map_err(|_| CommsError::PayloadOverflow)?;
    }
    Ok(f)
}
