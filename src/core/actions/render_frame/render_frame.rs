use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::render_frame::ports::pixel_shader::PixelShader;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Shades every pixel of a frame in parallel using rayon's work-stealing
/// scheduler, one task per row.
///
/// For a frame that may be abandoned mid-render, use
/// [`render_frame_cancelable`].
pub fn render_frame<S: PixelShader>(resolution: Resolution, shader: &S) -> PixelBuffer {
    match render_frame_cancelable(resolution, shader, &NeverCancel) {
        Ok(buffer) => buffer,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Like [`render_frame`], but polls `cancel` at the start of each row and
/// every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
///
/// Cancellation discards the whole frame; a partially shaded buffer is never
/// returned.
pub fn render_frame_cancelable<S, C>(
    resolution: Resolution,
    shader: &S,
    cancel: &C,
) -> Result<PixelBuffer, Cancelled>
where
    S: PixelShader,
    C: CancelToken,
{
    let mut buffer = PixelBuffer::new(resolution);
    let row_stride = buffer.row_stride();

    buffer
        .buffer_mut()
        .par_chunks_mut(row_stride)
        .enumerate()
        .try_for_each(|(y, row)| {
            for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                let colour = shader.shade(Point {
                    x: x as u32,
                    y: y as u32,
                });
                pixel.copy_from_slice(&colour.to_rgb8());
            }

            Ok(())
        })?;

    Ok(buffer)
}

/// Single-threaded reference renderer. Produces the same bytes as
/// [`render_frame`] for any shader.
pub fn render_frame_serial<S: PixelShader>(resolution: Resolution, shader: &S) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(resolution);
    let row_stride = buffer.row_stride();

    for (y, row) in buffer.buffer_mut().chunks_exact_mut(row_stride).enumerate() {
        for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let colour = shader.shade(Point {
                x: x as u32,
                y: y as u32,
            });
            pixel.copy_from_slice(&colour.to_rgb8());
        }
    }

    buffer
}
