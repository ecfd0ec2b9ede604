pub mod blend;
pub mod camera;
pub mod lissajous;
pub mod zoom;

pub use blend::{BlendOscillator, lerp};
pub use camera::{CameraPath, PanControlsSnapshot, PanState};
pub use lissajous::{JuliaConstant, Lissajous};
pub use zoom::{ZoomAnimation, smooth_ease_in_out};
