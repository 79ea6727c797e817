//! Receiver-side model of the chain.
//!
//! [`FrameDecoder`] is fed the data bit seen on each rising clock edge, the
//! same way the first LED in the chain samples the line. It reassembles the
//! preamble, the pixel packets and the latch so a captured transmission can be
//! checked against the expected frame.

use heapless::Vec;

use crate::frame::{Frame, FrameError, Packet, PACKET_LEN, PIXEL_COUNT, PREAMBLE_LEN};

/// Zero bits needed before the first packet
const PREAMBLE_BITS: u16 = (PREAMBLE_LEN * 8) as u16;

/// Bits in one pixel packet
const PACKET_BITS: u8 = (PACKET_LEN * 8) as u8;

/// Result of decoding one complete transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodedFrame {
    /// Pixel packets in chain order
    pub frame: Frame,
    /// Zero bits seen before the first packet
    pub preamble_bits: u16,
    /// Clock pulses seen after the last packet
    pub latch_pulses: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    /// Counting zero bits of the preamble
    Preamble,
    /// Shifting in packet bits
    Packets,
    /// Counting latch pulses
    Latch,
}

/// State machine for decoding a sampled bit stream
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    state: DecodeState,
    preamble_bits: u16,
    shift: u32,
    bit_count: u8,
    packets: Vec<Packet, PIXEL_COUNT>,
    latch_pulses: u16,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    /// Create a new frame decoder
    pub fn new() -> Self {
        Self {
            state: DecodeState::Preamble,
            preamble_bits: 0,
            shift: 0,
            bit_count: 0,
            packets: Vec::new(),
            latch_pulses: 0,
        }
    }

    /// Reset the decoder state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of packets fully received so far
    pub fn packets_received(&self) -> usize {
        self.packets.len()
    }

    /// Feed the data bit sampled on one rising clock edge
    ///
    /// On error the decoder resets, ready for the next preamble.
    pub fn feed_bit(&mut self, bit: bool) -> Result<(), FrameError> {
        match self.state {
            DecodeState::Preamble => {
                if !bit {
                    self.preamble_bits = self.preamble_bits.saturating_add(1);
                    return Ok(());
                }
                if self.preamble_bits < PREAMBLE_BITS {
                    self.reset();
                    return Err(FrameError::InvalidPreamble);
                }
                self.state = DecodeState::Packets;
                self.shift_in(bit)
            }
            DecodeState::Packets => self.shift_in(bit),
            DecodeState::Latch => {
                if bit {
                    self.reset();
                    return Err(FrameError::Overrun);
                }
                self.latch_pulses = self.latch_pulses.saturating_add(1);
                Ok(())
            }
        }
    }

    /// Feed whole bytes, most significant bit first
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<(), FrameError> {
        for &byte in bytes {
            for i in (0..8).rev() {
                self.feed_bit(byte & (1 << i) != 0)?;
            }
        }
        Ok(())
    }

    /// Finish decoding and return the received frame
    pub fn finish(self) -> Result<DecodedFrame, FrameError> {
        if self.state != DecodeState::Latch {
            return Err(FrameError::Incomplete);
        }

        let mut packets = [Packet::OFF; PIXEL_COUNT];
        packets.copy_from_slice(&self.packets);

        Ok(DecodedFrame {
            frame: Frame::new(packets),
            preamble_bits: self.preamble_bits,
            latch_pulses: self.latch_pulses,
        })
    }

    fn shift_in(&mut self, bit: bool) -> Result<(), FrameError> {
        self.shift = (self.shift << 1) | u32::from(bit);
        self.bit_count += 1;
        if self.bit_count < PACKET_BITS {
            return Ok(());
        }

        let packet = match Packet::from_bytes(self.shift.to_be_bytes()) {
            Ok(packet) => packet,
            Err(e) => {
                self.reset();
                return Err(e);
            }
        };
        self.shift = 0;
        self.bit_count = 0;

        // Capacity matches the state transition below
        let _ = self.packets.push(packet);
        if self.packets.is_full() {
            self.state = DecodeState::Latch;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{FRAME_LEN, LATCH_PULSES};
    use proptest::prelude::*;

    fn feed_latch(decoder: &mut FrameDecoder, pulses: usize) {
        for _ in 0..pulses {
            decoder.feed_bit(false).unwrap();
        }
    }

    #[test]
    fn test_decode_full_transmission() {
        let mut packets = [Packet::OFF; PIXEL_COUNT];
        packets[3] = Packet::new(7, 10, 20, 30);
        let frame = Frame::new(packets);

        let mut decoder = FrameDecoder::new();
        decoder.feed_bytes(&frame.to_bytes()).unwrap();
        assert_eq!(decoder.packets_received(), PIXEL_COUNT);
        feed_latch(&mut decoder, LATCH_PULSES);

        let decoded = decoder.finish().unwrap();
        assert_eq!(decoded.frame, frame);
        assert_eq!(decoded.preamble_bits, 32);
        assert_eq!(decoded.latch_pulses, LATCH_PULSES as u16);
    }

    #[test]
    fn test_short_preamble_rejected() {
        let mut decoder = FrameDecoder::new();
        decoder.feed_bytes(&[0, 0, 0]).unwrap();
        assert_eq!(decoder.feed_bytes(&[0xE0]), Err(FrameError::InvalidPreamble));
        // Decoder resynchronises on the next full preamble
        decoder.feed_bytes(&Frame::off().to_bytes()).unwrap();
        assert_eq!(decoder.packets_received(), PIXEL_COUNT);
    }

    #[test]
    fn test_long_preamble_tolerated() {
        let mut decoder = FrameDecoder::new();
        decoder.feed_bytes(&[0, 0]).unwrap();
        decoder.feed_bytes(&Frame::off().to_bytes()).unwrap();

        let decoded = decoder.finish().unwrap();
        assert_eq!(decoded.preamble_bits, 48);
        assert_eq!(decoded.latch_pulses, 0);
    }

    #[test]
    fn test_bad_header_rejected() {
        let mut bytes = Frame::off().to_bytes();
        bytes[FRAME_LEN - 4] = 0x80;

        let mut decoder = FrameDecoder::new();
        assert_eq!(decoder.feed_bytes(&bytes), Err(FrameError::InvalidHeader));
        assert_eq!(decoder.packets_received(), 0);
    }

    #[test]
    fn test_data_during_latch_is_overrun() {
        let mut decoder = FrameDecoder::new();
        decoder.feed_bytes(&Frame::off().to_bytes()).unwrap();
        feed_latch(&mut decoder, 3);
        assert_eq!(decoder.feed_bit(true), Err(FrameError::Overrun));
    }

    #[test]
    fn test_truncated_frame_incomplete() {
        let bytes = Frame::off().to_bytes();
        let mut decoder = FrameDecoder::new();
        decoder.feed_bytes(&bytes[..FRAME_LEN - 1]).unwrap();
        assert_eq!(decoder.finish(), Err(FrameError::Incomplete));
    }

    proptest! {
        #[test]
        fn test_decoder_recovers_any_frame(
            raw in proptest::collection::vec((0u8..=31, any::<u8>(), any::<u8>(), any::<u8>()), PIXEL_COUNT)
        ) {
            let mut packets = [Packet::OFF; PIXEL_COUNT];
            for (packet, &(level, r, g, b)) in packets.iter_mut().zip(raw.iter()) {
                *packet = Packet::new(level, r, g, b);
            }
            let frame = Frame::new(packets);

            let mut decoder = FrameDecoder::new();
            decoder.feed_bytes(&frame.to_bytes()).unwrap();
            feed_latch(&mut decoder, LATCH_PULSES);
            let decoded = decoder.finish().unwrap();

            prop_assert_eq!(decoded.frame, frame);
        }
    }
}
