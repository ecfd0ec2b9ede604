pub mod still_render;

pub use still_render::{StillRenderController, StillRenderError, StillRenderRequest};
