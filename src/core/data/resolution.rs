use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("resolution must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("{width}x{height} scaled by {factor} overflows")]
    Overflow { width: u32, height: u32, factor: u32 },
}

/// Viewport size in pixels. Both dimensions are always positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ResolutionError> {
        if width == 0 || height == 0 {
            return Err(ResolutionError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Scales both dimensions by `factor`. Used by tests and benches to check
    /// that the plane mapping does not depend on absolute window size.
    pub fn scaled(&self, factor: u32) -> Result<Self, ResolutionError> {
        let overflow = ResolutionError::Overflow {
            width: self.width,
            height: self.height,
            factor,
        };
        let width = self.width.checked_mul(factor).ok_or(overflow)?;
        let height = self.height.checked_mul(factor).ok_or(overflow)?;

        Self::new(width, height)
    }
}
