use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Per-pixel colour function. Implementations hold only per-frame immutable
/// state, so one shader can be shared across worker threads.
pub trait PixelShader: Sync {
    fn shade(&self, pixel: Point) -> Colour;
}
