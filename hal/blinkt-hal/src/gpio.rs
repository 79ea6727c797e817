//! GPIO output abstraction
//!
//! Provides the digital output trait consumed by the LED driver, plus an
//! adapter for pins implementing the `embedded-hal` 1.0 digital traits.

use embedded_hal::digital::{OutputPin, PinState};

/// Digital output line
///
/// Every state change can fail; implementations report the failure through
/// their own error type and never retry on their own.
pub trait DigitalOutput {
    /// Error raised when the line state cannot be set
    type Error;

    /// Drive the line high (logic 1)
    fn set_high(&mut self) -> Result<(), Self::Error>;

    /// Drive the line low (logic 0)
    fn set_low(&mut self) -> Result<(), Self::Error>;

    /// Drive the line to a specific state
    fn set_state(&mut self, high: bool) -> Result<(), Self::Error> {
        if high {
            self.set_high()
        } else {
            self.set_low()
        }
    }
}

impl<T: DigitalOutput + ?Sized> DigitalOutput for &mut T {
    type Error = T::Error;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        T::set_high(self)
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        T::set_low(self)
    }

    fn set_state(&mut self, high: bool) -> Result<(), Self::Error> {
        T::set_state(self, high)
    }
}

/// Adapter exposing an `embedded-hal` output pin as a [`DigitalOutput`]
///
/// ```ignore
/// let clock = EmbeddedHalOutput::new(Output::new(p.PIN_5, Level::Low));
/// let data = EmbeddedHalOutput::new(Output::new(p.PIN_4, Level::Low));
/// ```
#[derive(Debug)]
pub struct EmbeddedHalOutput<P> {
    pin: P,
}

impl<P: OutputPin> EmbeddedHalOutput<P> {
    /// Wrap an `embedded-hal` output pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Get a reference to the wrapped pin
    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> DigitalOutput for EmbeddedHalOutput<P> {
    type Error = P::Error;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high()
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()
    }

    fn set_state(&mut self, high: bool) -> Result<(), Self::Error> {
        self.pin.set_state(PinState::from(high))
    }
}
