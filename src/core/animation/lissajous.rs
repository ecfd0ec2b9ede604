use crate::core::data::complex::Complex;

/// Small periodic offset `amplitude * (sin(t * fx), cos(t * fy))`.
///
/// Drives both the camera drift and the orbiting Julia constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lissajous {
    pub amplitude: f64,
    pub frequency_real: f64,
    pub frequency_imag: f64,
}

impl Lissajous {
    #[must_use]
    pub fn offset(&self, elapsed_seconds: f64) -> Complex {
        Complex::new(
            (elapsed_seconds * self.frequency_real).sin(),
            (elapsed_seconds * self.frequency_imag).cos(),
        )
        .scale(self.amplitude)
    }
}

/// Iterated-map constant for the Julia map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JuliaConstant {
    Fixed(Complex),
    Orbiting { base: Complex, orbit: Lissajous },
}

impl JuliaConstant {
    #[must_use]
    pub fn at(&self, elapsed_seconds: f64) -> Complex {
        match self {
            Self::Fixed(constant) => *constant,
            Self::Orbiting { base, orbit } => *base + orbit.offset(elapsed_seconds),
        }
    }
}
