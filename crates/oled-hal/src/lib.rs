#![no_std]

/// Abstracts one write transaction on the shared two-wire bus.
///
/// A call to [`write`](I2cTransport::write) is a complete transaction: start,
/// address, every byte of `bytes`, stop. The driver never issues a
/// transaction longer than 32 bytes, which is the controller's buffer size.
pub trait I2cTransport {
    type Error: core::fmt::Debug;

    /// Write `bytes` to the 7-bit device `address` as a single transaction.
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Abstracts the display's hardware reset line and the delays used to pulse it.
///
/// The reset input is active low: asserting it drives the line low.
pub trait ResetControl {
    /// Drive the reset line. `true` holds the display in reset.
    fn set_reset(&mut self, asserted: bool);

    /// Block for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}
