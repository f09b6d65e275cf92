//! Rays, line segments, and segment intersection.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geom::Viewport;

/// Tolerance for the segment-parameter range so endpoint touches count.
const PARAM_EPSILON: f32 = 1e-4;

/// Cardinal ray directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions in casting order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

/// A cardinal ray anchored at a rectangle corner, infinite until clipped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ray {
    pub origin: Vec2,
    pub direction: Direction,
}

impl Ray {
    pub fn new(origin: Vec2, direction: Direction) -> Self {
        Self { origin, direction }
    }

    /// The full-length realization of this ray: origin to the viewport edge.
    ///
    /// Fails with [`Error::DegenerateGeometry`] when the origin already sits
    /// on the target edge.
    pub fn to_border(&self, viewport: &Viewport) -> Result<LineSegment> {
        let end = match self.direction {
            Direction::Left => Vec2::new(0.0, self.origin.y),
            Direction::Right => Vec2::new(viewport.width, self.origin.y),
            Direction::Up => Vec2::new(self.origin.x, 0.0),
            Direction::Down => Vec2::new(self.origin.x, viewport.height),
        };
        LineSegment::try_new(self.origin, end)
    }
}

/// An immutable line segment: a clipped ray or a canvas-border edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineSegment {
    pub from: Vec2,
    pub to: Vec2,
}

impl LineSegment {
    /// Create a segment, assuming finite and distinct endpoints.
    pub fn new(from: Vec2, to: Vec2) -> Self {
        debug_assert!(from.is_finite() && to.is_finite(), "endpoints must be finite");
        debug_assert!(from != to, "endpoints must be distinct");
        Self { from, to }
    }

    /// Create a segment, validating the endpoints.
    pub fn try_new(from: Vec2, to: Vec2) -> Result<Self> {
        if !from.is_finite() || !to.is_finite() {
            return Err(Error::DegenerateGeometry(format!(
                "non-finite endpoints {from:?} -> {to:?}"
            )));
        }
        if from == to {
            return Err(Error::DegenerateGeometry(format!(
                "zero-length segment at {from:?}"
            )));
        }
        Ok(Self { from, to })
    }

    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }

    /// Intersection point of two segments, if any.
    ///
    /// Two non-collinear segments meet in at most one point; parallel and
    /// collinear pairs yield none. Endpoint touches count as intersections.
    pub fn intersection(&self, other: &LineSegment) -> Option<Vec2> {
        let r = self.to - self.from;
        let s = other.to - other.from;
        let denom = r.perp_dot(s);
        if denom.abs() <= f32::EPSILON {
            return None;
        }

        let offset = other.from - self.from;
        let t = offset.perp_dot(s) / denom;
        let u = offset.perp_dot(r) / denom;
        let range = -PARAM_EPSILON..=1.0 + PARAM_EPSILON;
        if !range.contains(&t) || !range.contains(&u) {
            return None;
        }

        Some(self.from + r * t.clamp(0.0, 1.0))
    }
}
