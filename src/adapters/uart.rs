//! Modem UART adapter.
//!
//! Implements [`SerialPort`] on top of the UART driver installed by
//! [`hw_init`](crate::drivers::hw_init). Writes are queued into the
//! driver's TX ring buffer; a short write counts as a failure.

use log::debug;

use crate::app::ports::SerialPort;
use crate::drivers::hw_init;
use crate::error::CommsError;

pub struct ModemUart {
    bytes_written: usize,
}

impl Default for ModemUart {
    fn default() -> Self {
        Self::new()
    }
}

impl ModemUart {
    /// The driver must already be installed by `hw_init::init_peripherals`.
    pub fn new() -> Self {
        Self { bytes_written: 0 }
    }

    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }
}

impl SerialPort for ModemUart {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), CommsError> {
        match hw_init::uart_write(bytes) {
            Ok(n) if n == bytes.len() => {
                self.bytes_written = self.bytes_written.saturating_add(n);
                Ok(())
            }
            Ok(n) => {
                debug!("UART short write: {}/{} bytes", n, bytes.len());
                Err(CommsError::UartWriteFailed)
            }
            Err(rc) => {
                debug!("UART write failed (rc={})", rc);
                Err(CommsError::UartWriteFailed)
            }
        }
    }
}
