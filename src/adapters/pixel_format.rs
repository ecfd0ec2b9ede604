//! Pixel format conversion for framebuffer presenters.

use thiserror::Error;

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("RGBA frame holds {actual} bytes, expected {expected}")]
pub struct FrameSizeMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// Expands an RGB8 frame into an RGBA8 framebuffer with opaque alpha.
///
/// `dst` must hold exactly one RGBA pixel per source pixel; otherwise nothing
/// is written.
pub fn copy_rgb_to_rgba(src: &PixelBuffer, dst: &mut [u8]) -> Result<(), FrameSizeMismatch> {
    let expected = src.buffer().len() / BYTES_PER_PIXEL * RGBA_BYTES_PER_PIXEL;
    if dst.len() != expected {
        return Err(FrameSizeMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (rgb, rgba) in src
        .buffer()
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        rgba[..BYTES_PER_PIXEL].copy_from_slice(rgb);
        rgba[BYTES_PER_PIXEL] = u8::MAX;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;

    fn buffer(width: u32, height: u32, data: Vec<u8>) -> PixelBuffer {
        PixelBuffer::from_data(Resolution::new(width, height).unwrap(), data).unwrap()
    }

    #[test]
    fn known_colours_gain_opaque_alpha() {
        let src = buffer(
            2,
            2,
            vec![
                255, 0, 0, // red
                0, 255, 0, // green
                0, 0, 255, // blue
                254, 249, 225, // cream
            ],
        );
        let mut dst = vec![0; 16];

        copy_rgb_to_rgba(&src, &mut dst).unwrap();

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 254, 249, 225, 255
            ]
        );
    }

    #[test]
    fn mismatched_destination_is_left_untouched() {
        let src = buffer(1, 1, vec![10, 20, 30]);
        let mut dst = vec![7; 8];

        let result = copy_rgb_to_rgba(&src, &mut dst);

        assert_eq!(
            result,
            Err(FrameSizeMismatch {
                expected: 4,
                actual: 8
            })
        );
        assert_eq!(dst, vec![7; 8]);
    }
}
