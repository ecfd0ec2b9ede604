//! Windowed frame loop built on winit for the window and keyboard and pixels
//! for the framebuffer.

mod app;
mod errors;
mod keys;

pub use app::run_gui;
pub use errors::GuiError;
