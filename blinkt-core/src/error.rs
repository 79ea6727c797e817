//! Buffer error types

/// Argument that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Argument {
    /// Pixel index outside 0-7
    Index,
    /// Red channel outside 0-255
    Red,
    /// Green channel outside 0-255
    Green,
    /// Blue channel outside 0-255
    Blue,
    /// Brightness outside 0.0-1.0 (or NaN)
    Brightness,
}

/// Errors raised by buffer setters
///
/// A setter that returns an error has not modified the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferError {
    /// Numeric argument outside its defined bound
    OutOfRange(Argument),
    /// Bulk-set slice does not cover exactly the whole chain
    LengthMismatch {
        /// Required length (the chain size)
        expected: usize,
        /// Length that was passed
        actual: usize,
    },
}
