//! Linear gradients across the chain
//!
//! Pixel `i` sits at fraction `i / 7` between the start and end values,
//! both ends inclusive. Channels are interpolated in integers and truncated,
//! so an exact value such as `21 - 21 * 4 / 7 = 9` is never lost to float
//! error. Brightness interpolates in the 0.0-1.0 domain before quantization.
//! Both truncations are part of the wire-level output and must not become
//! rounding.

use blinkt_protocol::PIXEL_COUNT;
use rgb::RGB8;

use crate::error::BufferError;
use crate::pixel::{quantize_brightness, Pixel};

/// Position of pixel `index` along the chain (0.0 for the first, 1.0 for the last)
pub fn fraction(index: usize) -> f32 {
    index as f32 / (PIXEL_COUNT - 1) as f32
}

/// Interpolate one channel at pixel `index`, truncating the result
///
/// `index` is clamped to the last pixel.
pub fn lerp_channel(start: u8, end: u8, index: usize) -> u8 {
    const STEPS: i32 = (PIXEL_COUNT - 1) as i32;

    let index = index.min(PIXEL_COUNT - 1) as i32;
    let start = i32::from(start);
    let end = i32::from(end);
    // Numerator stays in 0..=255 * STEPS, so division is floor
    ((start * STEPS + (end - start) * index) / STEPS) as u8
}

/// Interpolate a color channel by channel at pixel `index`
pub fn lerp_color(start: RGB8, end: RGB8, index: usize) -> RGB8 {
    RGB8::new(
        lerp_channel(start.r, end.r, index),
        lerp_channel(start.g, end.g, index),
        lerp_channel(start.b, end.b, index),
    )
}

/// Interpolate a brightness, kept inside 0.0-1.0
pub fn lerp_brightness(start: f32, end: f32, t: f32) -> f32 {
    (start + (end - start) * t).clamp(0.0, 1.0)
}

/// Compute all pixels of a gradient
///
/// Both brightness endpoints are validated before anything is computed.
pub fn gradient(
    start: RGB8,
    end: RGB8,
    start_brightness: f32,
    end_brightness: f32,
) -> Result<[Pixel; PIXEL_COUNT], BufferError> {
    quantize_brightness(start_brightness)?;
    quantize_brightness(end_brightness)?;

    let mut pixels = [Pixel::OFF; PIXEL_COUNT];
    for (i, pixel) in pixels.iter_mut().enumerate() {
        let brightness = lerp_brightness(start_brightness, end_brightness, fraction(i));
        *pixel = Pixel::new(lerp_color(start, end, i), brightness)?;
    }
    Ok(pixels)
}
