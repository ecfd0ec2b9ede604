pub mod escape_time;
pub mod fractal_map;

pub use escape_time::{ESCAPE_RADIUS, escape, escape_iterations};
pub use fractal_map::FractalMap;
