//! Control-byte framing and transaction chunking for the two-wire bus.
//!
//! Every payload byte is preceded by a control byte. Commands use
//! [`CONTROL_COMMAND`] and always travel alone. Data bytes in a stream use
//! [`CONTROL_DATA_CONTINUE`] while more pairs follow in the same transaction;
//! the pair that closes a transaction uses [`CONTROL_DATA`]. A transaction
//! holds at most [`CONTINUE_PAIRS`] continue pairs plus the closing pair,
//! which fills the bus controller's 32-byte buffer exactly.

use core::iter::Peekable;

use log::warn;
use oled_hal::I2cTransport;

/// Co = 0, D/C# = 0.
pub const CONTROL_COMMAND: u8 = 0x00;
/// Co = 0, D/C# = 1.
pub const CONTROL_DATA: u8 = 0x40;
/// Co = 1, D/C# = 1.
pub const CONTROL_DATA_CONTINUE: u8 = 0xC0;

/// Largest transaction the bus controller can buffer, in bytes.
pub const MAX_TRANSACTION: usize = 32;
/// Continue pairs allowed before a transaction must close.
pub const CONTINUE_PAIRS: usize = 15;

/// One framed transaction.
pub type Transaction = heapless::Vec<u8, MAX_TRANSACTION>;

fn push_pair(tx: &mut Transaction, control: u8, byte: u8) {
    // CONTINUE_PAIRS + 1 pairs fill MAX_TRANSACTION exactly.
    let pushed = tx.extend_from_slice(&[control, byte]);
    debug_assert!(pushed.is_ok());
}

/// Splits a data stream into framed transactions.
pub struct DataFrames<I: Iterator<Item = u8>> {
    bytes: Peekable<I>,
}

impl<I: Iterator<Item = u8>> DataFrames<I> {
    pub fn new<B: IntoIterator<IntoIter = I>>(bytes: B) -> Self {
        Self {
            bytes: bytes.into_iter().peekable(),
        }
    }
}

impl<I: Iterator<Item = u8>> Iterator for DataFrames<I> {
    type Item = Transaction;

    fn next(&mut self) -> Option<Transaction> {
        let mut byte = self.bytes.next()?;
        let mut tx = Transaction::new();
        let mut pairs = 0;
        loop {
            if self.bytes.peek().is_none() || pairs == CONTINUE_PAIRS {
                push_pair(&mut tx, CONTROL_DATA, byte);
                return Some(tx);
            }
            push_pair(&mut tx, CONTROL_DATA_CONTINUE, byte);
            pairs += 1;
            byte = self.bytes.next()?;
        }
    }
}

/// Traffic counters kept by [`Bus`]. All three wrap on overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusStats {
    /// Transactions the transport accepted.
    pub transactions: u32,
    /// Bytes in accepted transactions, control bytes included.
    pub bytes: u32,
    /// Transactions the transport rejected.
    pub dropped: u32,
}

/// Framing layer over an [`I2cTransport`].
///
/// Transport failures are logged and counted, never returned: a rejected
/// transaction is simply lost and the caller carries on.
pub struct Bus<T: I2cTransport> {
    transport: T,
    address: u8,
    stats: BusStats,
}

impl<T: I2cTransport> Bus<T> {
    pub fn new(transport: T, address: u8) -> Self {
        Self {
            transport,
            address,
            stats: BusStats::default(),
        }
    }

    /// Send one command byte.
    pub fn command(&mut self, command: u8) {
        self.transact(&[CONTROL_COMMAND, command]);
    }

    /// Send each byte of `commands` as its own command transaction.
    pub fn commands(&mut self, commands: &[u8]) {
        for &command in commands {
            self.command(command);
        }
    }

    /// Send one data byte in its own transaction.
    pub fn data(&mut self, byte: u8) {
        self.transact(&[CONTROL_DATA, byte]);
    }

    /// Stream `bytes` to display memory in as few transactions as allowed.
    pub fn data_stream<B: IntoIterator<Item = u8>>(&mut self, bytes: B) {
        for tx in DataFrames::new(bytes) {
            self.transact(&tx);
        }
    }

    pub fn stats(&self) -> BusStats {
        self.stats
    }

    pub fn release(self) -> T {
        self.transport
    }

    fn transact(&mut self, bytes: &[u8]) {
        match self.transport.write(self.address, bytes) {
            Ok(()) => {
                self.stats.transactions = self.stats.transactions.wrapping_add(1);
                self.stats.bytes = self.stats.bytes.wrapping_add(bytes.len() as u32);
            }
            Err(e) => {
                self.stats.dropped = self.stats.dropped.wrapping_add(1);
                warn!(
                    "dropped {}-byte transaction to {:#04x}: {:?}",
                    bytes.len(),
                    self.address,
                    e
                );
            }
        }
    }
}
