use crate::core::animation::{BlendOscillator, CameraPath, JuliaConstant, ZoomAnimation};
use crate::core::fractals::fractal_map::FractalMap;
use crate::core::palette::Palette;
use crate::core::scene::decoration::InteriorDecoration;
use crate::core::scene::errors::SceneConfigError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalSelection {
    Mandelbrot,
    Julia(JuliaConstant),
}

impl FractalSelection {
    #[must_use]
    pub fn map_at(&self, elapsed_seconds: f64) -> FractalMap {
        match self {
            Self::Mandelbrot => FractalMap::Mandelbrot,
            Self::Julia(constant) => FractalMap::Julia {
                constant: constant.at(elapsed_seconds),
            },
        }
    }
}

/// How escape values are produced for a pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Composition {
    /// One map, optionally with interior decoration.
    Single {
        fractal: FractalSelection,
        decoration: Option<InteriorDecoration>,
    },
    /// Mandelbrot and Julia evaluated at the same coordinate and mixed.
    Blend {
        julia: JuliaConstant,
        oscillator: BlendOscillator,
    },
}

/// Everything the composer needs besides the per-frame animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub max_iterations: u32,
    /// Fraction of the frame height that spans one plane unit at zoom 1.
    pub aspect_scale: f64,
    pub zoom: ZoomAnimation,
    pub camera: CameraPath,
    pub composition: Composition,
    pub palette: Palette,
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), SceneConfigError> {
        if self.max_iterations == 0 {
            return Err(SceneConfigError::ZeroMaxIterations);
        }

        if !(self.aspect_scale.is_finite() && self.aspect_scale > 0.0) {
            return Err(SceneConfigError::InvalidAspectScale(self.aspect_scale));
        }

        validate_zoom(&self.zoom)
    }
}

fn validate_zoom(zoom: &ZoomAnimation) -> Result<(), SceneConfigError> {
    let check_factor = |factor: f64| {
        if factor.is_finite() && factor > 0.0 {
            Ok(())
        } else {
            Err(SceneConfigError::InvalidZoom(factor))
        }
    };

    match *zoom {
        ZoomAnimation::Fixed(factor) => check_factor(factor),
        ZoomAnimation::Exponential { rate } => {
            if rate.is_finite() {
                Ok(())
            } else {
                Err(SceneConfigError::InvalidZoomRate(rate))
            }
        }
        ZoomAnimation::EasedCycle {
            period,
            zoom_in,
            zoom_out,
            base,
            max,
        } => {
            if !(period > 0.0 && zoom_in > 0.0 && zoom_out > 0.0) {
                return Err(SceneConfigError::InvalidZoomCycle {
                    period,
                    zoom_in,
                    zoom_out,
                });
            }
            check_factor(base)?;
            check_factor(max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn valid_config() -> SceneConfig {
        SceneConfig {
            max_iterations: 100,
            aspect_scale: 1.0,
            zoom: ZoomAnimation::Fixed(1.0),
            camera: CameraPath::fixed(Complex::ZERO),
            composition: Composition::Single {
                fractal: FractalSelection::Mandelbrot,
                decoration: None,
            },
            palette: Palette::color_hunt(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert_eq!(valid_config().validate(), Ok(()));
    }

    #[test]
    fn max_iterations_must_be_greater_than_zero() {
        let config = SceneConfig {
            max_iterations: 0,
            ..valid_config()
        };

        assert_eq!(config.validate(), Err(SceneConfigError::ZeroMaxIterations));
    }

    #[test]
    fn aspect_scale_must_be_positive() {
        for aspect_scale in [0.0, -1.0, f64::INFINITY] {
            let config = SceneConfig {
                aspect_scale,
                ..valid_config()
            };

            assert_eq!(
                config.validate(),
                Err(SceneConfigError::InvalidAspectScale(aspect_scale))
            );
        }
    }

    #[test]
    fn zoom_factors_must_be_positive() {
        let config = SceneConfig {
            zoom: ZoomAnimation::Fixed(0.0),
            ..valid_config()
        };

        assert_eq!(config.validate(), Err(SceneConfigError::InvalidZoom(0.0)));
    }

    #[test]
    fn zoom_cycle_durations_must_be_positive() {
        let config = SceneConfig {
            zoom: ZoomAnimation::EasedCycle {
                period: 125.0,
                zoom_in: 0.0,
                zoom_out: 45.0,
                base: 0.5,
                max: 10.0,
            },
            ..valid_config()
        };

        assert!(matches!(
            config.validate(),
            Err(SceneConfigError::InvalidZoomCycle { .. })
        ));
    }

    #[test]
    fn zoom_rate_must_be_finite() {
        let config = SceneConfig {
            zoom: ZoomAnimation::Exponential { rate: f64::NAN },
            ..valid_config()
        };

        assert!(matches!(
            config.validate(),
            Err(SceneConfigError::InvalidZoomRate(_))
        ));
    }

    #[test]
    fn julia_selection_resolves_constant_for_frame() {
        let constant = Complex::new(-0.8, 0.156);
        let selection = FractalSelection::Julia(JuliaConstant::Fixed(constant));

        assert_eq!(selection.map_at(3.0), FractalMap::Julia { constant });
        assert_eq!(
            FractalSelection::Mandelbrot.map_at(3.0),
            FractalMap::Mandelbrot
        );
    }
}
