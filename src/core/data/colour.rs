/// Linear RGB triple with components nominally in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation `self * (1 - t) + other * t`, the same blend a
    /// shading language `mix` performs. `t == 0` returns `self` exactly.
    #[must_use]
    pub fn mix(self, other: Self, t: f64) -> Self {
        let s = 1.0 - t;
        Self {
            r: self.r * s + other.r * t,
            g: self.g * s + other.g * t,
            b: self.b * s + other.b * t,
        }
    }
}

/// Final per-pixel output. Alpha is always `1.0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Colour {
    #[must_use]
    pub fn opaque(rgb: Rgb) -> Self {
        Self {
            r: rgb.r.clamp(0.0, 1.0),
            g: rgb.g.clamp(0.0, 1.0),
            b: rgb.b.clamp(0.0, 1.0),
            a: 1.0,
        }
    }

    #[must_use]
    pub fn to_rgb8(self) -> [u8; 3] {
        [to_channel(self.r), to_channel(self.g), to_channel(self.b)]
    }
}

fn to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
