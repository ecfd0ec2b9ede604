/// Cubic ease `x²(3 − 2x)` on `[0, 1]`.
#[must_use]
pub fn smooth_ease_in_out(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

/// Zoom factor as a function of elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomAnimation {
    Fixed(f64),
    /// `exp(t * rate)`: a steady dive into the set.
    Exponential { rate: f64 },
    /// Repeating cycle of `period` seconds: ease from `base` to `max` over
    /// `zoom_in` seconds, then back to `base` over `zoom_out` seconds.
    EasedCycle {
        period: f64,
        zoom_in: f64,
        zoom_out: f64,
        base: f64,
        max: f64,
    },
}

impl ZoomAnimation {
    #[must_use]
    pub fn zoom_at(&self, elapsed_seconds: f64) -> f64 {
        match *self {
            Self::Fixed(zoom) => zoom,
            Self::Exponential { rate } => (elapsed_seconds * rate).exp(),
            Self::EasedCycle {
                period,
                zoom_in,
                zoom_out,
                base,
                max,
            } => {
                let phase = elapsed_seconds.rem_euclid(period) / period;
                let zoom_in_fraction = zoom_in / period;

                if phase < zoom_in_fraction {
                    let progress = smooth_ease_in_out(phase / zoom_in_fraction);
                    base + progress * (max - base)
                } else {
                    let progress =
                        smooth_ease_in_out((phase - zoom_in_fraction) / (zoom_out / period));
                    max - progress * (max - base)
                }
            }
        }
    }
}
