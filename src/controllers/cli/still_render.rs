use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame;
use crate::core::data::animation_state::AnimationState;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::{Resolution, ResolutionError};
use crate::core::scene::SceneComposer;
use crate::core::variants::{VariantConfig, VariantConfigError};

#[derive(Debug, Error)]
pub enum StillRenderError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Config(#[from] VariantConfigError),
    #[error("frame count must be greater than zero")]
    ZeroFrames,
    #[error("frame rate must be positive and finite, got {0}")]
    InvalidFrameRate(f64),
    #[error("start time must be finite, got {0}")]
    InvalidStartTime(f64),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What to render without a window: a single frame, or `frames` frames spaced
/// `1 / fps` seconds apart starting at `start_seconds`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StillRenderRequest {
    pub width: u32,
    pub height: u32,
    pub start_seconds: f64,
    pub camera_offset: Complex,
    pub frames: u32,
    pub fps: f64,
}

impl Default for StillRenderRequest {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            start_seconds: 0.0,
            camera_offset: Complex::ZERO,
            frames: 1,
            fps: 30.0,
        }
    }
}

impl StillRenderRequest {
    fn validate(&self) -> Result<Resolution, StillRenderError> {
        if self.frames == 0 {
            return Err(StillRenderError::ZeroFrames);
        }
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(StillRenderError::InvalidFrameRate(self.fps));
        }
        if !self.start_seconds.is_finite() {
            return Err(StillRenderError::InvalidStartTime(self.start_seconds));
        }

        Ok(Resolution::new(self.width, self.height)?)
    }

    #[must_use]
    pub fn frame_time(&self, index: u32) -> f64 {
        self.start_seconds + f64::from(index) / self.fps
    }
}

pub struct StillRenderController<P: FilePresenterPort> {
    presenter: P,
    composer: SceneComposer,
}

impl<P: FilePresenterPort> StillRenderController<P> {
    pub fn new(presenter: P, config: &VariantConfig) -> Result<Self, StillRenderError> {
        config.validate()?;
        let composer = SceneComposer::new(config.scene).map_err(VariantConfigError::from)?;

        Ok(Self {
            presenter,
            composer,
        })
    }

    /// Renders the requested frames and writes each one before the next is
    /// rendered. A single frame goes to `filepath` as given; a sequence goes
    /// to `<stem>_<index:05>.<ext>` beside it.
    ///
    /// Stops at the first write failure.
    pub fn render_sequence(
        &self,
        request: &StillRenderRequest,
        filepath: &Path,
    ) -> Result<Vec<PathBuf>, StillRenderError> {
        let resolution = request.validate()?;

        info!(
            width = resolution.width(),
            height = resolution.height(),
            frames = request.frames,
            max_iterations = self.composer.config().max_iterations,
            "rendering"
        );

        let start = Instant::now();
        let mut written = Vec::with_capacity(request.frames as usize);

        for index in 0..request.frames {
            let path = if request.frames == 1 {
                filepath.to_path_buf()
            } else {
                sequence_path(filepath, index, self.presenter.extension())
            };

            let frame = self.render_one(request, resolution, index);
            self.presenter
                .present(&frame, &path)
                .map_err(|source| StillRenderError::Write {
                    path: path.clone(),
                    source,
                })?;

            debug!(frame = index, path = %path.display(), "frame written");
            written.push(path);
        }

        info!(duration = ?start.elapsed(), "render finished");

        Ok(written)
    }

    fn render_one(
        &self,
        request: &StillRenderRequest,
        resolution: Resolution,
        index: u32,
    ) -> PixelBuffer {
        let state = AnimationState::new(request.frame_time(index), resolution)
            .with_camera_offset(request.camera_offset);
        let shader = self.composer.frame(&state);

        debug!(
            frame = index,
            t = state.elapsed_seconds,
            zoom = shader.zoom(),
            center_re = shader.center().real,
            center_im = shader.center().imag,
            "shading frame"
        );

        render_frame(resolution, &shader)
    }
}

fn sequence_path(filepath: &Path, index: u32, default_extension: &str) -> PathBuf {
    let stem = filepath
        .file_stem()
        .map_or_else(|| "frame".into(), |stem| stem.to_string_lossy());
    let extension = filepath
        .extension()
        .map_or_else(|| default_extension.into(), |ext| ext.to_string_lossy());

    filepath.with_file_name(format!("{stem}_{index:05}.{extension}"))
}
