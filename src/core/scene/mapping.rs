use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Maps a pixel to its plane coordinate.
///
/// The frame is centred on `center`, one frame height spans
/// `1 / (aspect_scale * zoom)` plane units, and the vertical axis is flipped so
/// that the top row maps to the largest imaginary part. Scaling the
/// resolution and the pixel together leaves the result unchanged.
#[must_use]
pub fn pixel_to_plane(
    pixel: Point,
    resolution: Resolution,
    aspect_scale: f64,
    zoom: f64,
    center: Complex,
) -> Complex {
    let width = f64::from(resolution.width());
    let height = f64::from(resolution.height());
    let units_per_frame_height = height * aspect_scale;

    let real = (f64::from(pixel.x) - width * 0.5) / units_per_frame_height / zoom;
    let imag = (height * 0.5 - f64::from(pixel.y)) / units_per_frame_height / zoom;

    Complex::new(real, imag) + center
}
