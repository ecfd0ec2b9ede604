use crate::core::data::colour::Rgb;

pub const BAND_COUNT: usize = 4;
const BAND_WIDTH: f64 = 1.0 / BAND_COUNT as f64;

/// Piecewise-linear colour ramp over four anchors.
///
/// The unit interval is split into four equal bands. Band `k` fades from
/// anchor `k` to anchor `k + 1`; the last band wraps back to the first anchor,
/// so `sample(1.0)` returns the first anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    anchors: [Rgb; BAND_COUNT],
}

impl Palette {
    #[must_use]
    pub const fn new(anchors: [Rgb; BAND_COUNT]) -> Self {
        Self { anchors }
    }

    /// Cream, sand, crimson, maroon (#FEF9E1, #E5D0AC, #A31D1D, #6D2323).
    #[must_use]
    pub const fn color_hunt() -> Self {
        Self::new([
            Rgb::new(0.996, 0.976, 0.882),
            Rgb::new(0.898, 0.816, 0.675),
            Rgb::new(0.639, 0.114, 0.114),
            Rgb::new(0.427, 0.137, 0.137),
        ])
    }

    /// Same ramp as [`Palette::color_hunt`] but starting from near-black red,
    /// so fast-escaping Julia exteriors read dark.
    #[must_use]
    pub const fn ember() -> Self {
        Self::new([
            Rgb::new(0.11, 0.0, 0.0),
            Rgb::new(0.898, 0.816, 0.675),
            Rgb::new(0.639, 0.114, 0.114),
            Rgb::new(0.427, 0.137, 0.137),
        ])
    }

    #[must_use]
    pub fn anchors(&self) -> &[Rgb; BAND_COUNT] {
        &self.anchors
    }

    #[must_use]
    pub fn sample(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let band = if t < BAND_WIDTH {
            0
        } else if t < 2.0 * BAND_WIDTH {
            1
        } else if t < 3.0 * BAND_WIDTH {
            2
        } else {
            3
        };

        let local = (t - band as f64 * BAND_WIDTH) * BAND_COUNT as f64;
        let from = self.anchors[band];
        let to = self.anchors[(band + 1) % BAND_COUNT];

        from.mix(to, local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_rgb_approx_eq(actual: Rgb, expected: Rgb) {
        assert!(
            (actual.r - expected.r).abs() <= EPSILON
                && (actual.g - expected.g).abs() <= EPSILON
                && (actual.b - expected.b).abs() <= EPSILON,
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }

    #[test]
    fn zero_maps_to_first_anchor() {
        let palette = Palette::color_hunt();

        assert_eq!(palette.sample(0.0), palette.anchors()[0]);
    }

    #[test]
    fn band_starts_are_exact_anchors() {
        let palette = Palette::color_hunt();
        let anchors = palette.anchors();

        assert_eq!(palette.sample(0.25), anchors[1]);
        assert_eq!(palette.sample(0.5), anchors[2]);
        assert_eq!(palette.sample(0.75), anchors[3]);
    }

    #[test]
    fn palette_is_continuous_at_band_edges() {
        let palette = Palette::color_hunt();
        let just_below = 1e-12;

        for edge in [0.25, 0.5, 0.75] {
            assert_rgb_approx_eq(palette.sample(edge - just_below), palette.sample(edge));
        }
    }

    #[test]
    fn last_band_wraps_to_first_anchor() {
        let palette = Palette::ember();

        assert_rgb_approx_eq(palette.sample(1.0), palette.anchors()[0]);
        assert_rgb_approx_eq(palette.sample(1.0 - 1e-12), palette.anchors()[0]);
    }

    #[test]
    fn band_midpoint_is_average_of_anchors() {
        let palette = Palette::color_hunt();
        let anchors = palette.anchors();
        let expected = Rgb::new(
            (anchors[1].r + anchors[2].r) / 2.0,
            (anchors[1].g + anchors[2].g) / 2.0,
            (anchors[1].b + anchors[2].b) / 2.0,
        );

        assert_rgb_approx_eq(palette.sample(0.375), expected);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        let palette = Palette::color_hunt();

        assert_eq!(palette.sample(-3.0), palette.sample(0.0));
        assert_eq!(palette.sample(7.0), palette.sample(1.0));
        assert_eq!(palette.sample(f64::NAN), palette.sample(0.0));
    }

    #[test]
    fn samples_stay_in_unit_cube() {
        for palette in [Palette::color_hunt(), Palette::ember()] {
            for step in 0..=1000 {
                let colour = palette.sample(f64::from(step) / 1000.0);

                for channel in [colour.r, colour.g, colour.b] {
                    assert!((0.0..=1.0).contains(&channel));
                }
            }
        }
    }
}
