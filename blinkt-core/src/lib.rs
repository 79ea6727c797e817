//! Board-agnostic LED state for the Blinkt chain
//!
//! This crate holds everything that does not touch a pin:
//!
//! - Pixel type with quantized 5-bit brightness
//! - Fixed 8-slot LED buffer with validated setters
//! - Gradient and bulk-fill helpers
//! - Error taxonomy for rejected arguments
//! - Controller configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod gradient;
pub mod pixel;

pub use buffer::LedBuffer;
pub use config::BlinktConfig;
pub use error::{Argument, BufferError};
pub use pixel::{checked_rgb, quantize_brightness, Pixel, PixelIndex};

/// RGB color type accepted by the color-object setters.
pub use rgb::RGB8;

pub use blinkt_protocol::PIXEL_COUNT;
