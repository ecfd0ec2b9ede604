pub mod ports;
#[allow(clippy::module_inception)]
pub mod render_frame;

pub use ports::pixel_shader::PixelShader;
pub use render_frame::{render_frame, render_frame_cancelable, render_frame_serial};
