//! LED state buffer
//!
//! Holds the desired color and brightness of each of the 8 chain slots. All
//! setters validate every argument before touching the buffer, so a rejected
//! call never leaves a partially applied state behind.
//!
//! The canonical operations are [`LedBuffer::set_pixel`] and
//! [`LedBuffer::set_gradient`]; the remaining setters fill in the default
//! brightness or collapse endpoints before delegating.

use blinkt_protocol::{Frame, Packet, PIXEL_COUNT};
use rgb::RGB8;

use crate::error::BufferError;
use crate::gradient;
use crate::pixel::{quantize_brightness, Pixel, PixelIndex};

/// Default brightness after construction and [`LedBuffer::reset`]
pub const FULL_BRIGHTNESS: f32 = 1.0;

/// Fixed-size buffer of the chain's pixel state
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedBuffer {
    pixels: [Pixel; PIXEL_COUNT],
    /// Brightness used by setters that omit one (0.0-1.0)
    default_brightness: f32,
}

impl Default for LedBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LedBuffer {
    /// Create a buffer with every pixel dark and full default brightness
    pub const fn new() -> Self {
        Self {
            pixels: [Pixel::OFF; PIXEL_COUNT],
            default_brightness: FULL_BRIGHTNESS,
        }
    }

    /// All pixels in chain order
    pub fn pixels(&self) -> &[Pixel; PIXEL_COUNT] {
        &self.pixels
    }

    /// Read back one pixel
    pub fn pixel(&self, index: usize) -> Result<Pixel, BufferError> {
        let index = PixelIndex::try_from(index)?;
        Ok(self.pixels[index.get()])
    }

    /// Iterate over the pixels in chain order
    pub fn iter(&self) -> impl Iterator<Item = &Pixel> {
        self.pixels.iter()
    }

    /// Set one pixel's color and brightness, replacing its previous value
    pub fn set_pixel(
        &mut self,
        index: usize,
        color: RGB8,
        brightness: f32,
    ) -> Result<(), BufferError> {
        let index = PixelIndex::try_from(index)?;
        self.pixels[index.get()] = Pixel::new(color, brightness)?;
        Ok(())
    }

    /// Set one pixel from separate channels
    pub fn set_pixel_rgb(
        &mut self,
        index: usize,
        red: u8,
        green: u8,
        blue: u8,
        brightness: f32,
    ) -> Result<(), BufferError> {
        self.set_pixel(index, RGB8::new(red, green, blue), brightness)
    }

    /// Set one pixel's color at the default brightness
    pub fn set_pixel_color(&mut self, index: usize, color: RGB8) -> Result<(), BufferError> {
        self.set_pixel(index, color, self.default_brightness)
    }

    /// Set one pixel from separate channels at the default brightness
    pub fn set_pixel_rgb_default(
        &mut self,
        index: usize,
        red: u8,
        green: u8,
        blue: u8,
    ) -> Result<(), BufferError> {
        self.set_pixel_color(index, RGB8::new(red, green, blue))
    }

    /// Turn one pixel off (black, zero brightness)
    pub fn clear_pixel(&mut self, index: usize) -> Result<(), BufferError> {
        let index = PixelIndex::try_from(index)?;
        self.pixels[index.get()] = Pixel::OFF;
        Ok(())
    }

    /// Turn every pixel off
    pub fn clear_all(&mut self) {
        self.pixels = [Pixel::OFF; PIXEL_COUNT];
    }

    /// Set every pixel to the same color and brightness
    pub fn set_all(&mut self, color: RGB8, brightness: f32) -> Result<(), BufferError> {
        let pixel = Pixel::new(color, brightness)?;
        self.pixels = [pixel; PIXEL_COUNT];
        Ok(())
    }

    /// Set every pixel to the same color at the default brightness
    pub fn set_all_color(&mut self, color: RGB8) -> Result<(), BufferError> {
        self.set_all(color, self.default_brightness)
    }

    /// Set every pixel from per-pixel colors and brightnesses
    ///
    /// Both slices must hold exactly one entry per pixel.
    pub fn set_all_pixels(
        &mut self,
        colors: &[RGB8],
        brightnesses: &[f32],
    ) -> Result<(), BufferError> {
        check_length(colors.len())?;
        check_length(brightnesses.len())?;

        let mut pixels = [Pixel::OFF; PIXEL_COUNT];
        for ((pixel, &color), &brightness) in pixels.iter_mut().zip(colors).zip(brightnesses) {
            *pixel = Pixel::new(color, brightness)?;
        }
        self.pixels = pixels;
        Ok(())
    }

    /// Set every pixel from per-pixel colors sharing one brightness
    pub fn set_all_pixels_uniform(
        &mut self,
        colors: &[RGB8],
        brightness: f32,
    ) -> Result<(), BufferError> {
        check_length(colors.len())?;
        quantize_brightness(brightness)?;

        let mut pixels = [Pixel::OFF; PIXEL_COUNT];
        for (pixel, &color) in pixels.iter_mut().zip(colors) {
            *pixel = Pixel::new(color, brightness)?;
        }
        self.pixels = pixels;
        Ok(())
    }

    /// Set every pixel from per-pixel colors at the default brightness
    pub fn set_all_pixels_color(&mut self, colors: &[RGB8]) -> Result<(), BufferError> {
        self.set_all_pixels_uniform(colors, self.default_brightness)
    }

    /// Fill the chain with a linear gradient
    ///
    /// Pixel 0 gets the start values, pixel 7 the end values.
    pub fn set_gradient(
        &mut self,
        start: RGB8,
        end: RGB8,
        start_brightness: f32,
        end_brightness: f32,
    ) -> Result<(), BufferError> {
        self.pixels = gradient::gradient(start, end, start_brightness, end_brightness)?;
        Ok(())
    }

    /// Color gradient at the default brightness
    pub fn set_gradient_color(&mut self, start: RGB8, end: RGB8) -> Result<(), BufferError> {
        let brightness = self.default_brightness;
        self.set_gradient(start, end, brightness, brightness)
    }

    /// Color gradient at one fixed brightness
    pub fn set_gradient_color_at(
        &mut self,
        start: RGB8,
        end: RGB8,
        brightness: f32,
    ) -> Result<(), BufferError> {
        self.set_gradient(start, end, brightness, brightness)
    }

    /// Brightness gradient of a single color
    pub fn set_gradient_brightness(
        &mut self,
        color: RGB8,
        start_brightness: f32,
        end_brightness: f32,
    ) -> Result<(), BufferError> {
        self.set_gradient(color, color, start_brightness, end_brightness)
    }

    /// Change the brightness used by setters that omit one
    ///
    /// Pixels already set keep their brightness.
    pub fn set_default_brightness(&mut self, brightness: f32) -> Result<(), BufferError> {
        quantize_brightness(brightness)?;
        self.default_brightness = brightness;
        Ok(())
    }

    /// Brightness used by setters that omit one
    pub fn default_brightness(&self) -> f32 {
        self.default_brightness
    }

    /// Clear every pixel and restore full default brightness
    pub fn reset(&mut self) {
        self.clear_all();
        self.default_brightness = FULL_BRIGHTNESS;
    }

    /// Snapshot the buffer as a wire frame
    pub fn to_frame(&self) -> Frame {
        let mut packets = [Packet::OFF; PIXEL_COUNT];
        for (packet, pixel) in packets.iter_mut().zip(self.pixels.iter()) {
            *packet = pixel.to_packet();
        }
        Frame::new(packets)
    }
}

fn check_length(actual: usize) -> Result<(), BufferError> {
    if actual != PIXEL_COUNT {
        return Err(BufferError::LengthMismatch {
            expected: PIXEL_COUNT,
            actual,
        });
    }
    Ok(())
}
