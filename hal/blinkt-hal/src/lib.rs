//! Blinkt Hardware Abstraction Layer
//!
//! This crate defines the single hardware capability the LED driver needs:
//! a digital output line that can be driven high or low. Pin acquisition,
//! numbering and multiplexing stay with the platform; the driver only ever
//! receives two ready-to-use outputs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  blinkt-drivers (bit-banged APA102)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  blinkt-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │ custom/mock   │
//! │  output pins  │       │   outputs     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::DigitalOutput`] - Fallible digital output line

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{DigitalOutput, EmbeddedHalOutput};
