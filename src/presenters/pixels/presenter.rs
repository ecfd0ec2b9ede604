use pixels::{Pixels, SurfaceTexture, TextureError};
use tracing::{debug, warn};
use winit::window::Window;

use crate::adapters::pixel_format::copy_rgb_to_rgba;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::Resolution;

/// Presents rendered frames through a `pixels` framebuffer sized to the
/// window's inner size.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    resolution: Option<Resolution>,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            resolution: Resolution::new(size.width, size.height).ok(),
        })
    }

    /// Current framebuffer size, or `None` while the window is minimised.
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        let Ok(resolution) = Resolution::new(width, height) else {
            self.resolution = None;
            return Ok(());
        };

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.resolution = Some(resolution);

        Ok(())
    }

    /// Copies `frame` into the framebuffer and presents it. Frames rendered
    /// for a size the window no longer has are dropped.
    pub fn present(&mut self, frame: &PixelBuffer) -> Result<(), pixels::Error> {
        if self.resolution != Some(frame.resolution()) {
            debug!("dropping frame rendered for a stale window size");
            return Ok(());
        }

        if let Err(err) = copy_rgb_to_rgba(frame, self.pixels.frame_mut()) {
            warn!(%err, "framebuffer size mismatch");
            return Ok(());
        }

        self.pixels.render()
    }
}
