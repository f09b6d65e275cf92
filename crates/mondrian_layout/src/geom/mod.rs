//! Geometric value types shared across the pipeline.
//!
//! This module defines the viewport, rectangles and the proximity predicate,
//! rays and line segments, and grid snapping. Everything here is an immutable
//! value; the pipeline builds geometry once and only reads it afterwards.
use glam::Vec2;
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod rect;
pub mod segment;
pub mod snap;

pub use rect::{too_near, Rect};
pub use segment::{Direction, LineSegment, Ray};
pub use snap::GridSnapper;

use crate::error::{Error, Result};

/// The rectangular drawing surface, fixed for one composition run.
///
/// Coordinates span `[0, width] x [0, height]` with y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Validates the viewport, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(Error::InvalidConfig(
                "viewport must be > 0 in both dimensions".into(),
            ));
        }
        Ok(())
    }

    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// The four corners in reading order.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::ZERO,
            Vec2::new(self.width, 0.0),
            Vec2::new(0.0, self.height),
            Vec2::new(self.width, self.height),
        ]
    }

    /// Whether a point lies on or inside the viewport.
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

impl From<Vector2<f32>> for Viewport {
    fn from(extent: Vector2<f32>) -> Self {
        Self::new(extent.x, extent.y)
    }
}

impl From<Viewport> for Vector2<f32> {
    fn from(viewport: Viewport) -> Self {
        Vector2 {
            x: viewport.width,
            y: viewport.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_non_positive_dimensions() {
        assert!(Viewport::new(800.0, 600.0).validate().is_ok());
        assert!(Viewport::new(0.0, 600.0).validate().is_err());
        assert!(Viewport::new(800.0, -1.0).validate().is_err());
        assert!(Viewport::new(f32::NAN, 600.0).validate().is_err());
    }

    #[test]
    fn corners_cover_the_surface_in_reading_order() {
        let corners = Viewport::new(800.0, 600.0).corners();
        assert_eq!(corners[0], Vec2::ZERO);
        assert_eq!(corners[3], Vec2::new(800.0, 600.0));
    }

    #[test]
    fn mint_roundtrip_preserves_extent() {
        let viewport = Viewport::from(Vector2 { x: 640.0, y: 480.0 });
        assert_eq!(viewport.extent(), Vec2::new(640.0, 480.0));
        let back: Vector2<f32> = viewport.into();
        assert_eq!(back.x, 640.0);
        assert_eq!(back.y, 480.0);
    }

    #[test]
    fn contains_includes_the_border() {
        let viewport = Viewport::new(800.0, 600.0);
        assert!(viewport.contains(Vec2::ZERO));
        assert!(viewport.contains(Vec2::new(800.0, 600.0)));
        assert!(!viewport.contains(Vec2::new(800.1, 0.0)));
    }
}
