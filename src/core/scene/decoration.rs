use crate::core::data::colour::Rgb;
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_map::FractalMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorationLayer {
    pub scale: f64,
    pub weight: f64,
}

/// Decorative banding painted over pixels that never escaped.
///
/// The same map is re-evaluated at a fixed list of scaled copies of the plane
/// coordinate; the weighted sum is folded into repeating bands that pick a
/// colour between `dark` and `light`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteriorDecoration {
    pub threshold: f64,
    pub base_scale: f64,
    pub layers: &'static [DecorationLayer],
    pub outline_bands: f64,
    pub dark: Rgb,
    pub light: Rgb,
    pub mix_weight: f64,
}

impl InteriorDecoration {
    #[must_use]
    pub fn applies_to(&self, escape_value: f64) -> bool {
        escape_value > self.threshold
    }

    #[must_use]
    pub fn layered_value(&self, map: &FractalMap, point: Complex, max_iterations: u32) -> f64 {
        self.layers
            .iter()
            .map(|layer| {
                let scaled = point.scale(self.base_scale * layer.scale);
                map.evaluate(scaled, max_iterations) * layer.weight
            })
            .sum()
    }

    /// Fractional part of `value * outline_bands`, always in `[0, 1)`.
    #[must_use]
    pub fn outline_factor(&self, value: f64) -> f64 {
        (value * self.outline_bands).rem_euclid(1.0)
    }

    #[must_use]
    pub fn decorate(
        &self,
        base: Rgb,
        map: &FractalMap,
        point: Complex,
        max_iterations: u32,
    ) -> Rgb {
        let outline = self.outline_factor(self.layered_value(map, point, max_iterations));
        let inner = self.dark.mix(self.light, outline);

        base.mix(inner, self.mix_weight)
    }
}
