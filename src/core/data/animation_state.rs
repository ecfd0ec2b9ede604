use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;

/// Per-frame broadcast input, produced by the host frame loop and read-only
/// for every pixel of that frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationState {
    pub elapsed_seconds: f64,
    pub resolution: Resolution,
    /// User pan accumulated from held arrow keys, added to the camera center.
    pub camera_offset: Complex,
}

impl AnimationState {
    #[must_use]
    pub fn new(elapsed_seconds: f64, resolution: Resolution) -> Self {
        Self {
            elapsed_seconds,
            resolution,
            camera_offset: Complex::ZERO,
        }
    }

    #[must_use]
    pub fn with_camera_offset(self, camera_offset: Complex) -> Self {
        Self {
            camera_offset,
            ..self
        }
    }
}
