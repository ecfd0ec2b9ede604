use crate::core::actions::render_frame::ports::pixel_shader::PixelShader;
use crate::core::animation::lerp;
use crate::core::data::animation_state::AnimationState;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::fractal_map::FractalMap;
use crate::core::palette::Palette;
use crate::core::scene::config::{Composition, SceneConfig};
use crate::core::scene::decoration::InteriorDecoration;
use crate::core::scene::errors::SceneConfigError;
use crate::core::scene::mapping::pixel_to_plane;

/// Turns a scene description plus a frame's animation state into colours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneComposer {
    config: SceneConfig,
}

impl SceneComposer {
    pub fn new(config: SceneConfig) -> Result<Self, SceneConfigError> {
        config.validate()?;

        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Resolves the frame-global values (zoom, camera center, Julia constant,
    /// blend factor) once, so per-pixel work is only mapping and evaluation.
    #[must_use]
    pub fn frame(&self, state: &AnimationState) -> FrameShader {
        let t = state.elapsed_seconds;
        let composition = match self.config.composition {
            Composition::Single {
                fractal,
                decoration,
            } => FrameComposition::Single {
                map: fractal.map_at(t),
                decoration,
            },
            Composition::Blend { julia, oscillator } => FrameComposition::Blend {
                julia: FractalMap::Julia {
                    constant: julia.at(t),
                },
                factor: oscillator.factor_at(t),
            },
        };

        FrameShader {
            resolution: state.resolution,
            max_iterations: self.config.max_iterations,
            aspect_scale: self.config.aspect_scale,
            zoom: self.config.zoom.zoom_at(t),
            center: self.config.camera.center(t, state.camera_offset),
            composition,
            palette: self.config.palette,
        }
    }

    /// Colour of one pixel for the given frame state.
    #[must_use]
    pub fn shade(&self, pixel: Point, state: &AnimationState) -> Colour {
        self.frame(state).shade(pixel)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameComposition {
    Single {
        map: FractalMap,
        decoration: Option<InteriorDecoration>,
    },
    Blend {
        julia: FractalMap,
        factor: f64,
    },
}

/// Immutable per-frame snapshot of the scene, shared by every pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameShader {
    resolution: Resolution,
    max_iterations: u32,
    aspect_scale: f64,
    zoom: f64,
    center: Complex,
    composition: FrameComposition,
    palette: Palette,
}

impl FrameShader {
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn composition(&self) -> &FrameComposition {
        &self.composition
    }

    #[must_use]
    pub fn plane_coordinate(&self, pixel: Point) -> Complex {
        pixel_to_plane(
            pixel,
            self.resolution,
            self.aspect_scale,
            self.zoom,
            self.center,
        )
    }
}

impl PixelShader for FrameShader {
    fn shade(&self, pixel: Point) -> Colour {
        let point = self.plane_coordinate(pixel);

        let rgb = match &self.composition {
            FrameComposition::Single { map, decoration } => {
                let value = map.evaluate(point, self.max_iterations);
                let base = self.palette.sample(value);

                match decoration {
                    Some(decoration) if decoration.applies_to(value) => {
                        decoration.decorate(base, map, point, self.max_iterations)
                    }
                    _ => base,
                }
            }
            FrameComposition::Blend { julia, factor } => {
                let mandelbrot = FractalMap::Mandelbrot.evaluate(point, self.max_iterations);
                let julia = julia.evaluate(point, self.max_iterations);

                self.palette.sample(lerp(mandelbrot, julia, *factor))
            }
        };

        Colour::opaque(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::animation::{BlendOscillator, CameraPath, JuliaConstant, ZoomAnimation};
    use crate::core::data::colour::Rgb;
    use crate::core::scene::config::FractalSelection;
    use crate::core::scene::decoration::DecorationLayer;

    const LAYERS: &[DecorationLayer] = &[DecorationLayer {
        scale: 1.0,
        weight: 0.5,
    }];

    fn resolution() -> Resolution {
        Resolution::new(80, 60).unwrap()
    }

    fn mandelbrot_config(decoration: Option<InteriorDecoration>) -> SceneConfig {
        SceneConfig {
            max_iterations: 64,
            aspect_scale: 1.0,
            zoom: ZoomAnimation::Fixed(1.0),
            camera: CameraPath::fixed(Complex::ZERO),
            composition: Composition::Single {
                fractal: FractalSelection::Mandelbrot,
                decoration,
            },
            palette: Palette::color_hunt(),
        }
    }

    fn decoration() -> InteriorDecoration {
        InteriorDecoration {
            threshold: 0.98,
            base_scale: 1.0,
            layers: LAYERS,
            outline_bands: 15.0,
            dark: Rgb::new(0.0, 0.0, 0.0),
            light: Rgb::new(1.0, 1.0, 1.0),
            mix_weight: 1.0,
        }
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = SceneConfig {
            max_iterations: 0,
            ..mandelbrot_config(None)
        };

        assert_eq!(
            SceneComposer::new(config),
            Err(SceneConfigError::ZeroMaxIterations)
        );
    }

    #[test]
    fn center_pixel_inside_set_uses_wrapped_palette_colour() {
        let composer = SceneComposer::new(mandelbrot_config(None)).unwrap();
        let state = AnimationState::new(0.0, resolution());

        // Centre maps to the origin, which never escapes: palette(1.0) is anchor 1
        let colour = composer.shade(Point { x: 40, y: 30 }, &state);

        assert_eq!(colour, Colour::opaque(Palette::color_hunt().sample(1.0)));
        assert_eq!(colour.a, 1.0);
    }

    #[test]
    fn decoration_recolours_interior_pixels() {
        let composer = SceneComposer::new(mandelbrot_config(Some(decoration()))).unwrap();
        let state = AnimationState::new(0.0, resolution());

        // layered value 0.5 -> outline fract(7.5) = 0.5 -> mid grey, fully mixed
        let colour = composer.shade(Point { x: 40, y: 30 }, &state);

        assert_eq!(colour, Colour::opaque(Rgb::new(0.5, 0.5, 0.5)));
    }

    #[test]
    fn decoration_leaves_exterior_pixels_alone() {
        let plain = SceneComposer::new(mandelbrot_config(None)).unwrap();
        let decorated = SceneComposer::new(mandelbrot_config(Some(decoration()))).unwrap();
        let state = AnimationState::new(0.0, resolution());

        // Top-left corner maps to (-2/3, 0.5), outside the set
        let pixel = Point { x: 0, y: 0 };

        assert_eq!(plain.shade(pixel, &state), decorated.shade(pixel, &state));
    }

    #[test]
    fn camera_offset_shifts_the_view() {
        let composer = SceneComposer::new(mandelbrot_config(None)).unwrap();
        let state = AnimationState::new(0.0, resolution())
            .with_camera_offset(Complex::new(0.25, -0.5));

        let frame = composer.frame(&state);

        assert_eq!(frame.center(), Complex::new(0.25, -0.5));
        assert_eq!(frame.plane_coordinate(Point { x: 40, y: 30 }), frame.center());
    }

    #[test]
    fn frame_resolves_animated_values() {
        let config = SceneConfig {
            zoom: ZoomAnimation::Exponential { rate: 0.5 },
            composition: Composition::Blend {
                julia: JuliaConstant::Fixed(Complex::new(-0.8, 0.156)),
                oscillator: BlendOscillator {
                    rate: 0.2,
                    scale: 0.4,
                },
            },
            ..mandelbrot_config(None)
        };
        let composer = SceneComposer::new(config).unwrap();
        let frame = composer.frame(&AnimationState::new(2.0, resolution()));

        assert_eq!(frame.zoom(), 1.0_f64.exp());
        match frame.composition() {
            FrameComposition::Blend { julia, factor } => {
                assert_eq!(
                    *julia,
                    FractalMap::Julia {
                        constant: Complex::new(-0.8, 0.156)
                    }
                );
                assert_eq!(*factor, ((0.4_f64).sin() + 1.0) * 0.4);
            }
            other => panic!("expected blend composition, got {:?}", other),
        }
    }

    #[test]
    fn blend_with_zero_factor_matches_plain_mandelbrot() {
        let blend = SceneConfig {
            composition: Composition::Blend {
                julia: JuliaConstant::Fixed(Complex::new(-0.8, 0.156)),
                oscillator: BlendOscillator {
                    rate: 0.0,
                    scale: 0.0,
                },
            },
            ..mandelbrot_config(None)
        };
        let blend = SceneComposer::new(blend).unwrap();
        let plain = SceneComposer::new(mandelbrot_config(None)).unwrap();
        let state = AnimationState::new(5.0, resolution());

        for pixel in [Point { x: 0, y: 0 }, Point { x: 17, y: 44 }, Point { x: 40, y: 30 }] {
            assert_eq!(blend.shade(pixel, &state), plain.shade(pixel, &state));
        }
    }

    #[test]
    fn shade_matches_frame_shader() {
        let composer = SceneComposer::new(mandelbrot_config(Some(decoration()))).unwrap();
        let state = AnimationState::new(1.5, resolution());
        let frame = composer.frame(&state);

        for y in (0..60).step_by(7) {
            for x in (0..80).step_by(9) {
                let pixel = Point { x, y };
                assert_eq!(composer.shade(pixel, &state), frame.shade(pixel));
            }
        }
    }
}
