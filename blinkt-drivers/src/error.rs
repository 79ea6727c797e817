//! Driver error types

use blinkt_core::BufferError;

/// Output line of the two-wire link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Clock line (LEDs sample on its rising edge)
    Clock,
    /// Data line
    Data,
}

/// Errors that can occur while driving the chain
///
/// An `Io` error leaves the frame half-sent; the next full transmission
/// starts with a fresh preamble and overwrites it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<E> {
    /// Buffer argument rejected before any wire activity
    Buffer(BufferError),
    /// Output line failed to change state
    Io {
        /// Line that failed
        line: Line,
        /// Error reported by the output
        error: E,
    },
}

impl<E> From<BufferError> for DriverError<E> {
    fn from(e: BufferError) -> Self {
        DriverError::Buffer(e)
    }
}
