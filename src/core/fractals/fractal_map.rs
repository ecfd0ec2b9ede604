use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape;

/// Which iterated map a pixel's plane coordinate feeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalMap {
    /// The plane coordinate is both the seed and the added constant.
    Mandelbrot,
    /// The plane coordinate is the seed; the constant is frame-global.
    Julia { constant: Complex },
}

impl FractalMap {
    #[must_use]
    pub fn evaluate(&self, point: Complex, max_iterations: u32) -> f64 {
        match self {
            Self::Mandelbrot => escape(point, point, max_iterations),
            Self::Julia { constant } => escape(point, *constant, max_iterations),
        }
    }

    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }
}
