use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneConfigError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("aspect scale must be positive and finite, got {0}")]
    InvalidAspectScale(f64),
    #[error("zoom factors must be positive and finite, got {0}")]
    InvalidZoom(f64),
    #[error("zoom rate must be finite, got {0}")]
    InvalidZoomRate(f64),
    #[error(
        "eased zoom cycle durations must be positive, got period {period}s, in {zoom_in}s, out {zoom_out}s"
    )]
    InvalidZoomCycle {
        period: f64,
        zoom_in: f64,
        zoom_out: f64,
    },
}
