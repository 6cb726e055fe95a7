//! In-memory transport for the PC debug host.
//!
//! Records every transaction instead of driving a bus, and can reject every
//! Nth one to exercise the driver's dropped-transaction path.

use oled_core::display::bus::MAX_TRANSACTION;
use oled_hal::I2cTransport;

/// Recording transport error types.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failure injected by `--fail-every`.
    #[error("transaction {index} rejected (injected failure)")]
    Injected { index: u64 },

    /// The driver tried to send more than the bus controller can buffer.
    #[error("{len}-byte transaction exceeds the {}-byte bus buffer", MAX_TRANSACTION)]
    Oversized { len: usize },
}

/// Captured transaction: (address, bytes).
pub type Record = (u8, Vec<u8>);

pub struct RecordingTransport {
    fail_every: Option<u64>,
    attempts: u64,
    records: Vec<Record>,
    rejected: u64,
}

impl RecordingTransport {
    pub fn new(fail_every: Option<u64>) -> Self {
        Self {
            fail_every: fail_every.filter(|&n| n > 0),
            attempts: 0,
            records: Vec::new(),
            rejected: 0,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    fn check(&self, bytes: &[u8]) -> Result<(), TransportError> {
        if bytes.len() > MAX_TRANSACTION {
            return Err(TransportError::Oversized { len: bytes.len() });
        }
        if self.fail_every.is_some_and(|n| self.attempts % n == 0) {
            return Err(TransportError::Injected {
                index: self.attempts,
            });
        }
        Ok(())
    }
}

impl I2cTransport for RecordingTransport {
    type Error = TransportError;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.attempts += 1;
        if let Err(e) = self.check(bytes) {
            self.rejected += 1;
            return Err(e);
        }
        log::trace!("{:#04x} <- {:02X?}", address, bytes);
        self.records.push((address, bytes.to_vec()));
        Ok(())
    }
}
