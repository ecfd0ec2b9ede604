use crate::core::animation::lissajous::Lissajous;
use crate::core::data::complex::Complex;

/// Where the camera looks at a given time, before any user pan is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPath {
    pub base_center: Complex,
    pub drift: Option<Lissajous>,
}

impl CameraPath {
    #[must_use]
    pub const fn fixed(base_center: Complex) -> Self {
        Self {
            base_center,
            drift: None,
        }
    }

    #[must_use]
    pub fn center(&self, elapsed_seconds: f64, user_offset: Complex) -> Complex {
        let drift = self
            .drift
            .map_or(Complex::ZERO, |drift| drift.offset(elapsed_seconds));

        self.base_center + drift + user_offset
    }
}

/// Directional keys held during the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanControlsSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Accumulated user pan. Owned by the host frame loop and handed to the
/// composer as part of each frame's immutable `AnimationState`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanState {
    offset: Complex,
}

impl PanState {
    #[must_use]
    pub fn offset(&self) -> Complex {
        self.offset
    }

    /// Moves the offset by `step` along every held direction. Opposing keys
    /// cancel out.
    pub fn step(&mut self, controls: PanControlsSnapshot, step: f64) {
        if controls.left {
            self.offset.real -= step;
        }
        if controls.right {
            self.offset.real += step;
        }
        if controls.up {
            self.offset.imag += step;
        }
        if controls.down {
            self.offset.imag -= step;
        }
    }
}
