use crate::core::scene::SceneConfigError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VariantConfigError {
    #[error("invalid scene: {0}")]
    Scene(#[from] SceneConfigError),
    #[error("pan step must be positive and finite, got {0}")]
    InvalidPanStep(f64),
    #[error("auto-quit timeout must be greater than zero")]
    ZeroAutoQuit,
    #[error("window size must be positive: {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },
    #[error("unknown variant '{0}', expected one of: mandelbrot, julia, blend")]
    UnknownVariant(String),
}
