//! Scene composition: pixel to plane coordinate, escape evaluation, palette
//! lookup and optional interior decoration.

pub mod composer;
pub mod config;
pub mod decoration;
pub mod errors;
pub mod mapping;

pub use composer::{FrameComposition, FrameShader, SceneComposer};
pub use config::{Composition, FractalSelection, SceneConfig};
pub use decoration::{DecorationLayer, InteriorDecoration};
pub use errors::SceneConfigError;
pub use mapping::pixel_to_plane;
