use thiserror::Error;

use crate::core::variants::VariantConfigError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error(transparent)]
    Config(#[from] VariantConfigError),
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create pixel surface: {0}")]
    Surface(#[from] pixels::Error),
    #[error("failed to resize pixel surface: {0}")]
    Resize(#[from] pixels::TextureError),
}
