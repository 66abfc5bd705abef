// THEORY:
// The `PixelBuffer` is the engine's only view of an image: a width, a height,
// and a flat RGBA byte array in row-major order with the origin at the top
// left. How those bytes came to exist (network fetch, file read, format
// decode) is entirely the `PixelSource`'s business.
//
// Key architectural principles:
// 1.  **Immutable snapshot**: The buffer is filled exactly once, before the
//     scan starts, and never mutated afterwards. The scanner can therefore
//     assume no region is ever surfaced from a half-decoded image.
// 2.  **Shape validated at the door**: The byte length either equals
//     `width * height * 4` or construction fails with a typed error. Inner
//     loops then index without re-checking.
// 3.  **Random access only**: The scanner needs `(x, y) -> Rgb` and nothing
//     else, so that is the whole read surface. The alpha byte is skipped at
//     the sampling site; matching never consults it.

use crate::core_modules::pixel::pixel::Rgb;

/// Bytes per sample in the backing array (RGBA).
const CHANNELS: usize = 4;

/// Error returned when the backing array does not match the claimed dimensions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("RGBA array of {len} bytes does not fit a {width}x{height} image")]
pub struct BufferShape {
    pub width: u32,
    pub height: u32,
    pub len: usize,
}

/// An immutable, decoded RGBA image in natural pixel space.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, BufferShape> {
        let expected = width as usize * height as usize * CHANNELS;
        if samples.len() != expected {
            return Err(BufferShape { width, height, len: samples.len() });
        }
        Ok(Self { width, height, samples })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Samples the RGB channels at `(x, y)`. Callers stay within bounds; the
    /// scanner's sweep guarantees it.
    pub fn rgb_at(&self, x: u32, y: u32) -> Rgb {
        let base = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Rgb::new(self.samples[base], self.samples[base + 1], self.samples[base + 2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_shaped_array() {
        let buffer = PixelBuffer::new(2, 2, vec![0u8; 16]).expect("2x2 RGBA");
        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 2);
    }

    #[test]
    fn rejects_a_length_mismatch() {
        let error = PixelBuffer::new(2, 2, vec![0u8; 15]).unwrap_err();
        assert_eq!(error, BufferShape { width: 2, height: 2, len: 15 });
    }

    #[test]
    fn samples_skip_the_alpha_byte() {
        // One pixel: R=1 G=2 B=3 A=4.
        let buffer = PixelBuffer::new(1, 1, vec![1, 2, 3, 4]).expect("1x1 RGBA");
        assert_eq!(buffer.rgb_at(0, 0), Rgb::new(1, 2, 3));
    }

    #[test]
    fn rows_are_major() {
        let mut samples = vec![0u8; 2 * 2 * 4];
        samples[8] = 9; // (x=0, y=1) red: (y * width + x) * 4 = 8
        let buffer = PixelBuffer::new(2, 2, samples).expect("2x2 RGBA");
        assert_eq!(buffer.rgb_at(0, 1).red, 9);
        assert_eq!(buffer.rgb_at(1, 0).red, 0);
    }
}
