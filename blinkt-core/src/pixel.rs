//! Pixel type and argument validation

use blinkt_protocol::{Packet, MAX_BRIGHTNESS_LEVEL, PIXEL_COUNT};
use rgb::RGB8;

use crate::error::{Argument, BufferError};

/// Quantize a 0.0-1.0 brightness to a 5-bit level
///
/// Truncates rather than rounds: `floor(brightness * 31)`. The LEDs only
/// ever see the level, so this must match the wire exactly.
pub fn quantize_brightness(brightness: f32) -> Result<u8, BufferError> {
    // Also rejects NaN
    if !(0.0..=1.0).contains(&brightness) {
        return Err(BufferError::OutOfRange(Argument::Brightness));
    }
    Ok((brightness * MAX_BRIGHTNESS_LEVEL as f32) as u8)
}

/// Build a color from wide integer channels, rejecting values outside 0-255
pub fn checked_rgb(red: i32, green: i32, blue: i32) -> Result<RGB8, BufferError> {
    let channel = |value: i32, argument| {
        u8::try_from(value).map_err(|_| BufferError::OutOfRange(argument))
    };
    Ok(RGB8::new(
        channel(red, Argument::Red)?,
        channel(green, Argument::Green)?,
        channel(blue, Argument::Blue)?,
    ))
}

/// Validated position in the chain (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelIndex(u8);

impl PixelIndex {
    /// Get the index as a `usize`
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for PixelIndex {
    type Error = BufferError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < PIXEL_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(BufferError::OutOfRange(Argument::Index))
        }
    }
}

impl TryFrom<i32> for PixelIndex {
    type Error = BufferError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .map_err(|_| BufferError::OutOfRange(Argument::Index))
            .and_then(<Self as TryFrom<usize>>::try_from)
    }
}

impl From<PixelIndex> for usize {
    fn from(index: PixelIndex) -> Self {
        index.get()
    }
}

/// One chain slot: 8-bit RGB plus a 5-bit brightness level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pixel {
    red: u8,
    green: u8,
    blue: u8,
    level: u8,
}

impl Pixel {
    /// Black at zero brightness
    pub const OFF: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
        level: 0,
    };

    /// Create a pixel from a color and a 0.0-1.0 brightness
    pub fn new(color: RGB8, brightness: f32) -> Result<Self, BufferError> {
        let level = quantize_brightness(brightness)?;
        Ok(Self::with_level(color, level))
    }

    /// Create a pixel from a color and a raw level, capping the level at 31
    pub const fn with_level(color: RGB8, level: u8) -> Self {
        Self {
            red: color.r,
            green: color.g,
            blue: color.b,
            level: if level > MAX_BRIGHTNESS_LEVEL {
                MAX_BRIGHTNESS_LEVEL
            } else {
                level
            },
        }
    }

    /// Red channel
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Green channel
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Blue channel
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Color without brightness
    pub fn color(&self) -> RGB8 {
        RGB8::new(self.red, self.green, self.blue)
    }

    /// Quantized brightness level (0-31)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Brightness as sent on the wire, `level / 31`
    pub fn brightness(&self) -> f32 {
        self.level as f32 / MAX_BRIGHTNESS_LEVEL as f32
    }

    /// Check if the pixel is fully dark
    pub fn is_off(&self) -> bool {
        *self == Self::OFF
    }

    /// Wire packet for this pixel
    pub fn to_packet(&self) -> Packet {
        Packet::new(self.level, self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_truncates() {
        assert_eq!(quantize_brightness(0.0), Ok(0));
        assert_eq!(quantize_brightness(0.5), Ok(15));
        assert_eq!(quantize_brightness(0.99), Ok(30));
        assert_eq!(quantize_brightness(1.0), Ok(31));
        // 0.1 * 31 = 3.1
        assert_eq!(quantize_brightness(0.1), Ok(3));
    }

    #[test]
    fn test_quantize_rejects_out_of_range() {
        let err = Err(BufferError::OutOfRange(Argument::Brightness));
        assert_eq!(quantize_brightness(-0.01), err);
        assert_eq!(quantize_brightness(1.01), err);
        assert_eq!(quantize_brightness(f32::NAN), err);
        assert_eq!(quantize_brightness(f32::INFINITY), err);
    }

    #[test]
    fn test_checked_rgb() {
        assert_eq!(checked_rgb(0, 128, 255), Ok(RGB8::new(0, 128, 255)));
        assert_eq!(
            checked_rgb(256, 0, 0),
            Err(BufferError::OutOfRange(Argument::Red))
        );
        assert_eq!(
            checked_rgb(0, -1, 0),
            Err(BufferError::OutOfRange(Argument::Green))
        );
        assert_eq!(
            checked_rgb(0, 0, 1000),
            Err(BufferError::OutOfRange(Argument::Blue))
        );
    }

    #[test]
    fn test_pixel_index_bounds() {
        assert_eq!(PixelIndex::try_from(0usize).map(PixelIndex::get), Ok(0));
        assert_eq!(PixelIndex::try_from(7i32).map(PixelIndex::get), Ok(7));
        assert_eq!(
            PixelIndex::try_from(8usize),
            Err(BufferError::OutOfRange(Argument::Index))
        );
        assert_eq!(
            PixelIndex::try_from(-1i32),
            Err(BufferError::OutOfRange(Argument::Index))
        );
    }

    #[test]
    fn test_pixel_packet() {
        let pixel = Pixel::with_level(RGB8::new(10, 20, 30), 7);
        assert_eq!(pixel.to_packet().to_bytes(), [0xE7, 0x1E, 0x14, 0x0A]);
    }

    #[test]
    fn test_pixel_level_capped() {
        let pixel = Pixel::with_level(RGB8::new(1, 2, 3), 200);
        assert_eq!(pixel.level(), MAX_BRIGHTNESS_LEVEL);
        assert!(!pixel.is_off());
        assert!(Pixel::default().is_off());
    }
}
