//! Blinkt controller
//!
//! Owns the LED buffer and the serial driver. Buffer setters are reachable
//! directly through `Deref`; nothing reaches the LEDs until
//! [`Blinkt::transmit`] is called.

use core::ops::{Deref, DerefMut};

use blinkt_core::{BlinktConfig, BufferError, LedBuffer, PIXEL_COUNT, RGB8};
use blinkt_hal::DigitalOutput;
use smart_leds_trait::SmartLedsWrite;

use crate::apa102::Apa102Driver;
use crate::error::DriverError;

/// Controller for an 8-pixel APA102 chain
pub struct Blinkt<C, D> {
    driver: Apa102Driver<C, D>,
    buffer: LedBuffer,
    config: BlinktConfig,
}

impl<C, D, E> Blinkt<C, D>
where
    C: DigitalOutput<Error = E>,
    D: DigitalOutput<Error = E>,
{
    /// Create a controller with the default configuration
    ///
    /// The lines are not touched until [`Blinkt::init`] or
    /// [`Blinkt::transmit`].
    pub fn new(clock: C, data: D) -> Self {
        Self {
            driver: Apa102Driver::new(clock, data),
            buffer: LedBuffer::new(),
            config: BlinktConfig::default(),
        }
    }

    /// Create a controller with a validated configuration
    pub fn with_config(clock: C, data: D, config: BlinktConfig) -> Result<Self, BufferError> {
        config.validate()?;

        let mut buffer = LedBuffer::new();
        buffer.set_default_brightness(config.default_brightness)?;

        Ok(Self {
            driver: Apa102Driver::new(clock, data),
            buffer,
            config,
        })
    }

    /// Bring the chain to a known state
    ///
    /// With `clear_on_init` set, clears the buffer and sends one dark frame.
    pub fn init(&mut self) -> Result<(), DriverError<E>> {
        if !self.config.clear_on_init {
            return Ok(());
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Blinkt init: clearing chain");

        self.buffer.clear_all();
        self.transmit()
    }

    /// Active configuration
    pub fn config(&self) -> &BlinktConfig {
        &self.config
    }

    /// LED buffer
    pub fn buffer(&self) -> &LedBuffer {
        &self.buffer
    }

    /// Mutable LED buffer
    pub fn buffer_mut(&mut self) -> &mut LedBuffer {
        &mut self.buffer
    }

    /// Send the whole buffer to the chain
    pub fn transmit(&mut self) -> Result<(), DriverError<E>> {
        self.driver.transmit(&self.buffer)
    }

    /// Clear all pixels, restore full default brightness and send the dark frame
    pub fn reset(&mut self) -> Result<(), DriverError<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Blinkt reset");

        self.buffer.reset();
        self.transmit()
    }

    /// Release the output lines
    pub fn release(self) -> (C, D) {
        self.driver.release()
    }
}

impl<C, D> Deref for Blinkt<C, D> {
    type Target = LedBuffer;

    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl<C, D> DerefMut for Blinkt<C, D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer
    }
}

impl<C, D, E> SmartLedsWrite for Blinkt<C, D>
where
    C: DigitalOutput<Error = E>,
    D: DigitalOutput<Error = E>,
{
    type Error = DriverError<E>;
    type Color = RGB8;

    /// Set all 8 pixels at the default brightness and transmit
    ///
    /// Any other number of colors is rejected before the buffer changes.
    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let mut colors = [RGB8::new(0, 0, 0); PIXEL_COUNT];
        let mut count = 0;
        // One extra item is enough to detect an oversized write
        for item in iterator.into_iter().take(PIXEL_COUNT + 1) {
            if let Some(slot) = colors.get_mut(count) {
                *slot = item.into();
            }
            count += 1;
        }

        if count != PIXEL_COUNT {
            return Err(BufferError::LengthMismatch {
                expected: PIXEL_COUNT,
                actual: count,
            }
            .into());
        }

        self.buffer.set_all_pixels_color(&colors)?;
        self.transmit()
    }
}
