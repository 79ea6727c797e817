//! Controller configuration
//!
//! Settings applied when a controller is brought up. With the `serde`
//! feature the struct can be stored alongside other device settings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::buffer::FULL_BRIGHTNESS;
use crate::error::BufferError;
use crate::pixel::quantize_brightness;

/// Blinkt controller configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlinktConfig {
    /// Default brightness for setters that omit one (0.0-1.0)
    pub default_brightness: f32,
    /// Send an all-dark frame during init so the chain starts in a known state
    pub clear_on_init: bool,
}

impl Default for BlinktConfig {
    fn default() -> Self {
        Self {
            default_brightness: FULL_BRIGHTNESS,
            clear_on_init: true,
        }
    }
}

impl BlinktConfig {
    /// Check that every value is in range
    pub fn validate(&self) -> Result<(), BufferError> {
        quantize_brightness(self.default_brightness)?;
        Ok(())
    }
}
