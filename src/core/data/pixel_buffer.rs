use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 3;

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error(
        "pixel at x:{}, y:{} outside of {}x{} frame",
        pixel.x, pixel.y, resolution.width(), resolution.height()
    )]
    PixelOutsideBounds { pixel: Point, resolution: Resolution },
    #[error("resolution size {resolution_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        resolution_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB8 frame, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            buffer: vec![0; resolution_to_buffer_size(resolution)],
        }
    }

    pub fn from_data(
        resolution: Resolution,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let resolution_size = resolution_to_buffer_size(resolution);

        if resolution_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                resolution_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.resolution.width() as usize * BYTES_PER_PIXEL
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    pub fn pixel(&self, pixel: Point) -> Result<[u8; 3], PixelBufferError> {
        let index = self.index_of(pixel)?;
        Ok([
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ])
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;
        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgb8());

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.resolution.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                resolution: self.resolution,
            });
        }

        Ok(pixel.y as usize * self.row_stride() + pixel.x as usize * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Rgb;

    fn create_resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(create_resolution(10, 10));

        assert_eq!(buffer.buffer().len(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (0,1) blue
            255, 255, 0, // (1,1) yellow
        ];

        let buffer = PixelBuffer::from_data(create_resolution(2, 2), data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }).unwrap(), [0, 0, 255]);
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(create_resolution(2, 2), vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                resolution_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_set_pixel_valid() {
        let mut buffer = PixelBuffer::new(create_resolution(3, 3));
        let red = Colour::opaque(Rgb::new(1.0, 0.0, 0.0));

        buffer.set_pixel(Point { x: 1, y: 1 }, red).unwrap();

        assert_eq!(&buffer.buffer()[12..15], &[255, 0, 0]);
    }

    #[test]
    fn test_set_pixel_bottom_right_corner() {
        let mut buffer = PixelBuffer::new(create_resolution(3, 3));
        let blue = Colour::opaque(Rgb::new(0.0, 0.0, 1.0));

        buffer.set_pixel(Point { x: 2, y: 2 }, blue).unwrap();

        assert_eq!(&buffer.buffer()[24..27], &[0, 0, 255]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let resolution = create_resolution(3, 3);
        let mut buffer = PixelBuffer::new(resolution);
        let colour = Colour::opaque(Rgb::new(1.0, 0.0, 0.0));

        let result = buffer.set_pixel(Point { x: 5, y: 1 }, colour);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 5, y: 1 },
                resolution
            })
        );
    }

    #[test]
    fn test_row_stride() {
        let buffer = PixelBuffer::new(create_resolution(7, 2));

        assert_eq!(buffer.row_stride(), 21);
    }
}
