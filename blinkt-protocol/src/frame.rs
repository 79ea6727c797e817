//! Frame encoding for the APA102 chain.
//!
//! Frame format:
//! - PREAMBLE (4 bytes): all zero, resets the downstream shift registers
//! - PACKET (4 bytes, × 8): `0xE0 | level`, blue, green, red
//! - LATCH (36 clock pulses): data held low, commits the shifted-in data
//!
//! The `0xE0` header and the 36-pulse latch are fixed empirically; the
//! datasheet values do not work reliably on the chain.

/// Number of pixels in the chain
pub const PIXEL_COUNT: usize = 8;

/// Number of zero bytes sent before the first packet
pub const PREAMBLE_LEN: usize = 4;

/// Size of one pixel packet in bytes
pub const PACKET_LEN: usize = 4;

/// Encoded frame size (PREAMBLE + PIXEL_COUNT * PACKET), latch excluded
pub const FRAME_LEN: usize = PREAMBLE_LEN + PIXEL_COUNT * PACKET_LEN;

/// Fixed top three bits of every packet's first byte
pub const HEADER_MASK: u8 = 0xE0;

/// Low five bits of the first byte carry the brightness level
pub const LEVEL_MASK: u8 = 0x1F;

/// Highest 5-bit brightness level
pub const MAX_BRIGHTNESS_LEVEL: u8 = 31;

/// Clock pulses sent with data low to latch the frame.
///
/// Do not change: fewer pulses leave the tail of the chain unlatched.
pub const LATCH_PULSES: usize = 36;

/// Errors that can occur while encoding or decoding a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// A data bit was set before the 32-bit zero preamble completed
    InvalidPreamble,
    /// Top three bits of a packet's first byte were not `111`
    InvalidHeader,
    /// Data line went high during the latch
    Overrun,
    /// Frame ended before all packets were received
    Incomplete,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// One pixel's 32-bit packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet {
    /// Brightness level (0-31)
    pub level: u8,
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Packet {
    /// Packet for a dark pixel
    pub const OFF: Self = Self {
        level: 0,
        red: 0,
        green: 0,
        blue: 0,
    };

    /// Create a packet; the level is masked to its 5 wire bits
    pub const fn new(level: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            level: level & LEVEL_MASK,
            red,
            green,
            blue,
        }
    }

    /// Wire bytes in transmission order
    pub const fn to_bytes(&self) -> [u8; PACKET_LEN] {
        [
            HEADER_MASK | (self.level & LEVEL_MASK),
            self.blue,
            self.green,
            self.red,
        ]
    }

    /// Parse wire bytes back into a packet
    pub fn from_bytes(bytes: [u8; PACKET_LEN]) -> Result<Self, FrameError> {
        if bytes[0] & HEADER_MASK != HEADER_MASK {
            return Err(FrameError::InvalidHeader);
        }
        Ok(Self {
            level: bytes[0] & LEVEL_MASK,
            blue: bytes[1],
            green: bytes[2],
            red: bytes[3],
        })
    }
}

/// Complete chain state as sent in one transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Packets in chain order, pixel 0 first
    pub packets: [Packet; PIXEL_COUNT],
}

impl Frame {
    /// Create a frame from the packets of all pixels
    pub const fn new(packets: [Packet; PIXEL_COUNT]) -> Self {
        Self { packets }
    }

    /// Frame with every pixel dark
    pub const fn off() -> Self {
        Self {
            packets: [Packet::OFF; PIXEL_COUNT],
        }
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written. The latch pulses are not part of
    /// the byte image.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let out = buffer
            .get_mut(..FRAME_LEN)
            .ok_or(FrameError::BufferTooSmall)?;
        out.copy_from_slice(&self.to_bytes());
        Ok(FRAME_LEN)
    }

    /// Encode this frame into a fixed-size array
    pub fn to_bytes(&self) -> [u8; FRAME_LEN] {
        let mut bytes = [0u8; FRAME_LEN];
        for (packet, chunk) in self
            .packets
            .iter()
            .zip(bytes[PREAMBLE_LEN..].chunks_exact_mut(PACKET_LEN))
        {
            chunk.copy_from_slice(&packet.to_bytes());
        }
        bytes
    }
}
