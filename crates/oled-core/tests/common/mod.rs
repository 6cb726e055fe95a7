//! Mock transport shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use oled_core::{DisplayConfig, Ssd1306};

/// Captured transaction: (address, bytes).
pub type Transaction = (u8, Vec<u8>);

/// Mock transport that records every transaction. Optionally rejects every
/// `fail_every`-th transaction.
#[derive(Clone, Default)]
pub struct MockTransport {
    transactions: Rc<RefCell<Vec<Transaction>>>,
    attempts: Rc<RefCell<usize>>,
    fail_every: Option<usize>,
}

#[derive(Debug)]
pub struct MockError;

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_every(n: usize) -> Self {
        Self {
            fail_every: Some(n),
            ..Self::default()
        }
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.borrow().clone()
    }

    /// Transactions with the address dropped.
    pub fn payloads(&self) -> Vec<Vec<u8>> {
        self.transactions
            .borrow()
            .iter()
            .map(|(_, bytes)| bytes.clone())
            .collect()
    }

    /// Forget everything captured so far.
    pub fn reset(&self) {
        self.transactions.borrow_mut().clear();
    }
}

impl oled_hal::I2cTransport for MockTransport {
    type Error = MockError;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        let mut attempts = self.attempts.borrow_mut();
        *attempts += 1;
        if self.fail_every.is_some_and(|n| *attempts % n == 0) {
            return Err(MockError);
        }
        self.transactions
            .borrow_mut()
            .push((address, bytes.to_vec()));
        Ok(())
    }
}

/// Helper: driver over a fresh mock, plus a handle on the mock.
pub fn make_driver() -> (Ssd1306<MockTransport>, MockTransport) {
    let transport = MockTransport::new();
    let handle = transport.clone();
    (Ssd1306::new(transport, DisplayConfig::default()), handle)
}

/// Split a framed data stream back into payload bytes, checking that every
/// transaction ends on a closing data pair.
pub fn unframe(payloads: &[Vec<u8>]) -> Vec<u8> {
    let mut data = Vec::new();
    for tx in payloads {
        assert!(tx.len() % 2 == 0, "odd transaction length: {tx:02X?}");
        assert_eq!(tx[tx.len() - 2], 0x40, "transaction not closed: {tx:02X?}");
        for pair in tx.chunks(2) {
            assert!(pair[0] == 0xC0 || pair[0] == 0x40, "bad control byte: {tx:02X?}");
            data.push(pair[1]);
        }
    }
    data
}

/// Whether a payload is a single command transaction.
pub fn is_command(tx: &[u8]) -> bool {
    tx.len() == 2 && tx[0] == 0x00
}
