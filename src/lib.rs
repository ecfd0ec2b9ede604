//! Animated escape-time fractal demos: an animated Mandelbrot zoom, an
//! orbiting Julia set, and a blend of the two with keyboard panning.
//!
//! The core shades frames on the CPU; the headless binary writes them as PPM
//! files and the `gui` feature presents them in a window.

mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod logging;
mod presenters;

pub use crate::adapters::pixel_format::{FrameSizeMismatch, copy_rgb_to_rgba};
pub use crate::controllers::cli::{StillRenderController, StillRenderError, StillRenderRequest};
pub use crate::controllers::interactive::{FrameDecision, FrameLoop};
pub use crate::controllers::ports::FilePresenterPort;
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, Deadline, NeverCancel};
pub use crate::core::actions::render_frame::{
    PixelShader, render_frame, render_frame_cancelable, render_frame_serial,
};
pub use crate::core::animation::{
    BlendOscillator, CameraPath, JuliaConstant, Lissajous, PanControlsSnapshot, PanState,
    ZoomAnimation,
};
pub use crate::core::data::animation_state::AnimationState;
pub use crate::core::data::colour::{Colour, Rgb};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::resolution::{Resolution, ResolutionError};
pub use crate::core::fractals::{FractalMap, escape};
pub use crate::core::palette::Palette;
pub use crate::core::scene::{
    Composition, FractalSelection, FrameShader, InteriorDecoration, SceneComposer, SceneConfig,
    SceneConfigError,
};
pub use crate::core::variants::{DemoVariant, DisplayMode, VariantConfig, VariantConfigError};
#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, run_gui};
pub use crate::logging::init_logging;
pub use crate::presenters::file::PpmFilePresenter;
