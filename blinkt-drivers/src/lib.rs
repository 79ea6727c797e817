//! Hardware driver for the Blinkt LED chain
//!
//! This crate connects the pure LED state of `blinkt-core` to two digital
//! outputs from `blinkt-hal`:
//!
//! - [`Apa102Driver`] - bit-banged serializer for the APA102 frame
//! - [`Blinkt`] - controller owning the buffer and the driver
//!
//! ```ignore
//! let mut blinkt = Blinkt::new(clock, data);
//! blinkt.init()?;
//! blinkt.set_default_brightness(0.1)?;
//! blinkt.set_pixel_color(3, RGB8::new(255, 0, 0))?;
//! blinkt.transmit()?;
//! ```
//!
//! Transmission is blocking and not reentrant; one owner performs all buffer
//! mutation and transmission.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod apa102;
pub mod blinkt;
pub mod error;

#[cfg(test)]
mod wire;

pub use apa102::Apa102Driver;
pub use blinkt::Blinkt;
pub use error::{DriverError, Line};

pub use blinkt_core::{BlinktConfig, BufferError, LedBuffer, Pixel, RGB8};
pub use blinkt_hal::{DigitalOutput, EmbeddedHalOutput};
