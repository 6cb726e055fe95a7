//! RP2350 I2C transport and reset line: implement the oled-hal traits on top
//! of embedded-hal peripherals.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use oled_hal::{I2cTransport, ResetControl};

/// I2C transport error for the RP2350 platform.
#[derive(Debug, defmt::Format)]
pub enum TransportError {
    /// The display did not acknowledge its address or a byte.
    NoAcknowledge,
    /// Arbitration loss, bus error or controller overrun.
    BusError,
}

/// RP2350 hardware transport for the OLED.
pub struct Rp2350Transport<B: I2c> {
    i2c: B,
}

impl<B: I2c> Rp2350Transport<B> {
    pub fn new(i2c: B) -> Self {
        Self { i2c }
    }
}

impl<B: I2c> I2cTransport for Rp2350Transport<B> {
    type Error = TransportError;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address, bytes).map_err(|e| match e.kind() {
            ErrorKind::NoAcknowledge(_) => TransportError::NoAcknowledge,
            _ => TransportError::BusError,
        })
    }
}

/// Active-low reset pin plus the delay used to time the pulse.
pub struct Rp2350Reset<'d, P: OutputPin, D: DelayNs> {
    pin: P,
    delay: &'d mut D,
}

impl<'d, P: OutputPin, D: DelayNs> Rp2350Reset<'d, P, D> {
    pub fn new(pin: P, delay: &'d mut D) -> Self {
        Self { pin, delay }
    }
}

impl<P: OutputPin, D: DelayNs> ResetControl for Rp2350Reset<'_, P, D> {
    fn set_reset(&mut self, asserted: bool) {
        // GPIO writes on the RP2350 are infallible.
        let _ = if asserted {
            self.pin.set_low()
        } else {
            self.pin.set_high()
        };
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
