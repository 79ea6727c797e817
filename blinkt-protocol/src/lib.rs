//! APA102 wire protocol for the Blinkt 8-pixel chain
//!
//! This crate defines the frame clocked out over the two-wire (clock + data)
//! link. Every transmission re-sends the whole chain:
//!
//! ```text
//! ┌──────────┬──────────────────────────────────────┬─────────────┐
//! │ PREAMBLE │ PACKET × 8                           │ LATCH       │
//! │ 4B zero  │ 0xE0|level, blue, green, red (4B)    │ 36 pulses,  │
//! │          │                                      │ data low    │
//! └──────────┴──────────────────────────────────────┴─────────────┘
//! ```
//!
//! Bytes go out most-significant bit first; the LEDs sample the data line on
//! the rising clock edge. The latch is not byte-aligned, so it is expressed as
//! a pulse count rather than as frame bytes.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod decoder;
pub mod frame;

pub use decoder::{DecodedFrame, FrameDecoder};
pub use frame::{
    Frame, FrameError, Packet, FRAME_LEN, HEADER_MASK, LATCH_PULSES, LEVEL_MASK,
    MAX_BRIGHTNESS_LEVEL, PACKET_LEN, PIXEL_COUNT, PREAMBLE_LEN,
};
