//! The three demo presets. Each is an independent parameter set; the
//! differences in iteration cap, aspect scale and palette between them are
//! intentional and not derived from one another.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::core::animation::{
    BlendOscillator, CameraPath, JuliaConstant, Lissajous, ZoomAnimation,
};
use crate::core::data::colour::Rgb;
use crate::core::data::complex::Complex;
use crate::core::palette::Palette;
use crate::core::scene::{
    Composition, DecorationLayer, FractalSelection, InteriorDecoration, SceneConfig,
};
use crate::core::variants::errors::VariantConfigError;

const MAROON: Rgb = Rgb::new(0.427, 0.137, 0.137);
const CREAM: Rgb = Rgb::new(0.996, 0.976, 0.882);

const MANDELBROT_LAYERS: &[DecorationLayer] = &[
    DecorationLayer { scale: 1.0, weight: 0.95 },
    DecorationLayer { scale: 2.0, weight: 0.8 },
    DecorationLayer { scale: 4.0, weight: 0.6 },
    DecorationLayer { scale: 6.0, weight: 0.4 },
    DecorationLayer { scale: 8.0, weight: 0.3 },
    DecorationLayer { scale: 10.0, weight: 0.1 },
];

const JULIA_LAYERS: &[DecorationLayer] = &[
    DecorationLayer { scale: 1.0, weight: 0.8 },
    DecorationLayer { scale: 2.0, weight: 0.5 },
    DecorationLayer { scale: 4.0, weight: 0.3 },
    DecorationLayer { scale: 6.0, weight: 0.1 },
];

const JULIA_BASE_CONSTANT: Complex = Complex::new(-0.8, 0.156);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DemoVariant {
    #[default]
    Mandelbrot,
    Julia,
    Blend,
}

impl DemoVariant {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia, Self::Blend];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::Blend => "blend",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot Renderer",
            Self::Julia => "Julia Set Renderer",
            Self::Blend => "Fractal Renderer",
        }
    }

    #[must_use]
    pub fn config(self) -> VariantConfig {
        match self {
            Self::Mandelbrot => mandelbrot(),
            Self::Julia => julia(),
            Self::Blend => blend(),
        }
    }
}

impl fmt::Display for DemoVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoVariant {
    type Err = VariantConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| VariantConfigError::UnknownVariant(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Fullscreen,
    Windowed { width: u32, height: u32 },
}

/// A scene plus the host-side behaviour that goes with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantConfig {
    pub variant: DemoVariant,
    pub scene: SceneConfig,
    /// Plane units moved per frame while an arrow key is held; `None`
    /// disables panning.
    pub pan_step: Option<f64>,
    /// Quit automatically after this much wall time.
    pub auto_quit: Option<Duration>,
    pub display: DisplayMode,
}

impl VariantConfig {
    pub fn validate(&self) -> Result<(), VariantConfigError> {
        self.scene.validate()?;

        if let Some(step) = self.pan_step {
            if !(step.is_finite() && step > 0.0) {
                return Err(VariantConfigError::InvalidPanStep(step));
            }
        }

        if self.auto_quit.is_some_and(|timeout| timeout.is_zero()) {
            return Err(VariantConfigError::ZeroAutoQuit);
        }

        match self.display {
            DisplayMode::Windowed { width, height } if width == 0 || height == 0 => {
                Err(VariantConfigError::InvalidWindowSize { width, height })
            }
            _ => Ok(()),
        }
    }
}

fn mandelbrot() -> VariantConfig {
    VariantConfig {
        variant: DemoVariant::Mandelbrot,
        scene: SceneConfig {
            max_iterations: 300,
            aspect_scale: 0.2,
            zoom: ZoomAnimation::Exponential { rate: 0.13 },
            camera: CameraPath {
                base_center: Complex::new(-0.745428, 0.131825),
                drift: Some(Lissajous {
                    amplitude: 0.01,
                    frequency_real: 0.15,
                    frequency_imag: 0.1,
                }),
            },
            composition: Composition::Single {
                fractal: FractalSelection::Mandelbrot,
                decoration: Some(interior_decoration(MANDELBROT_LAYERS)),
            },
            palette: Palette::color_hunt(),
        },
        pan_step: None,
        auto_quit: None,
        display: DisplayMode::Fullscreen,
    }
}

fn julia() -> VariantConfig {
    VariantConfig {
        variant: DemoVariant::Julia,
        scene: SceneConfig {
            max_iterations: 300,
            aspect_scale: 1.0,
            zoom: ZoomAnimation::Exponential { rate: 0.09 },
            camera: CameraPath::fixed(Complex::ZERO),
            composition: Composition::Single {
                fractal: FractalSelection::Julia(JuliaConstant::Orbiting {
                    base: JULIA_BASE_CONSTANT,
                    orbit: Lissajous {
                        amplitude: 0.02,
                        frequency_real: 0.15,
                        frequency_imag: 0.1,
                    },
                }),
                decoration: Some(interior_decoration(JULIA_LAYERS)),
            },
            palette: Palette::ember(),
        },
        pan_step: None,
        auto_quit: None,
        display: DisplayMode::Fullscreen,
    }
}

fn blend() -> VariantConfig {
    VariantConfig {
        variant: DemoVariant::Blend,
        scene: SceneConfig {
            max_iterations: 256,
            aspect_scale: 1.0,
            zoom: ZoomAnimation::EasedCycle {
                period: 125.0,
                zoom_in: 80.0,
                zoom_out: 45.0,
                base: 0.5,
                max: 10.0,
            },
            camera: CameraPath::fixed(Complex::new(0.15, 0.0)),
            composition: Composition::Blend {
                julia: JuliaConstant::Fixed(JULIA_BASE_CONSTANT),
                oscillator: BlendOscillator {
                    rate: 0.2,
                    scale: 0.4,
                },
            },
            palette: Palette::color_hunt(),
        },
        pan_step: Some(0.01),
        auto_quit: Some(Duration::from_secs(125)),
        display: DisplayMode::Windowed {
            width: 1920,
            height: 1080,
        },
    }
}

fn interior_decoration(layers: &'static [DecorationLayer]) -> InteriorDecoration {
    InteriorDecoration {
        threshold: 0.98,
        base_scale: 2.0,
        layers,
        outline_bands: 15.0,
        dark: MAROON,
        light: CREAM,
        mix_weight: 0.95,
    }
}
