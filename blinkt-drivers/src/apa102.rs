//! Bit-banged APA102 serializer
//!
//! Clocks a [`Frame`] out over two digital outputs:
//!
//! 1. 32 zero bits of preamble
//! 2. 8 packets of 32 bits, each byte MSB first
//! 3. Latch: data low, then 36 clock pulses
//!
//! For every bit the data line is set first, then the clock is pulsed high
//! and low. The LEDs sample on the rising edge, so the clock idles low
//! between calls. There is no transport-level acknowledgment: a failed line
//! aborts the frame and the error is returned as-is, without retry.

use blinkt_core::LedBuffer;
use blinkt_hal::DigitalOutput;
use blinkt_protocol::{Frame, LATCH_PULSES, PREAMBLE_LEN};

use crate::error::{DriverError, Line};

/// Serial driver for an APA102 chain on two output lines
pub struct Apa102Driver<C, D> {
    clock: C,
    data: D,
}

impl<C, D, E> Apa102Driver<C, D>
where
    C: DigitalOutput<Error = E>,
    D: DigitalOutput<Error = E>,
{
    /// Create a driver from already configured clock and data outputs
    ///
    /// Does not touch the lines; the caller decides when the first frame
    /// goes out.
    pub fn new(clock: C, data: D) -> Self {
        Self { clock, data }
    }

    /// Release the output lines
    pub fn release(self) -> (C, D) {
        (self.clock, self.data)
    }

    /// Send the buffer's current state to the chain
    pub fn transmit(&mut self, buffer: &LedBuffer) -> Result<(), DriverError<E>> {
        self.send_frame(&buffer.to_frame())
    }

    /// Send a complete frame: preamble, packets, latch
    pub fn send_frame(&mut self, frame: &Frame) -> Result<(), DriverError<E>> {
        for _ in 0..PREAMBLE_LEN {
            self.write_byte(0)?;
        }

        for packet in &frame.packets {
            for byte in packet.to_bytes() {
                self.write_byte(byte)?;
            }
        }

        self.latch()?;

        #[cfg(feature = "defmt")]
        defmt::trace!("APA102 frame sent");

        Ok(())
    }

    /// Write out a single byte, MSB first
    fn write_byte(&mut self, byte: u8) -> Result<(), DriverError<E>> {
        for i in (0..8).rev() {
            self.data
                .set_state(byte & (1 << i) != 0)
                .map_err(|e| io_error(Line::Data, e))?;
            self.pulse()?;
        }
        Ok(())
    }

    /// One rising and one falling clock edge
    fn pulse(&mut self) -> Result<(), DriverError<E>> {
        self.clock
            .set_high()
            .map_err(|e| io_error(Line::Clock, e))?;
        self.clock.set_low().map_err(|e| io_error(Line::Clock, e))
    }

    /// Commit the shifted-in data to the LEDs
    fn latch(&mut self) -> Result<(), DriverError<E>> {
        // Zeros, not ones
        self.data.set_low().map_err(|e| io_error(Line::Data, e))?;

        for _ in 0..LATCH_PULSES {
            self.pulse()?;
        }
        Ok(())
    }
}

fn io_error<E>(line: Line, error: E) -> DriverError<E> {
    #[cfg(feature = "defmt")]
    defmt::warn!("APA102 {} line failed, frame aborted", line);

    DriverError::Io { line, error }
}
