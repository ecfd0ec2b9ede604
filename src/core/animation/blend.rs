/// Weight of the Julia value in the Mandelbrot/Julia blend,
/// `(sin(t * rate) + 1) * scale`. With `scale = 0.4` it sweeps `[0, 0.8]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendOscillator {
    pub rate: f64,
    pub scale: f64,
}

impl BlendOscillator {
    #[must_use]
    pub fn factor_at(&self, elapsed_seconds: f64) -> f64 {
        ((elapsed_seconds * self.rate).sin() + 1.0) * self.scale
    }
}

#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}
