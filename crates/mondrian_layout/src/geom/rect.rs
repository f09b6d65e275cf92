//! Axis-aligned rectangle value type and the proximity predicate.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::segment::LineSegment;

/// An axis-aligned rectangle in canvas coordinates (y grows downward).
///
/// `position` is the top-left corner; `size` is strictly positive in both
/// components for every rectangle the pipeline accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Top-left corner.
    pub position: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Top-left corner (anchor for left/up rays).
    pub fn top_left(&self) -> Vec2 {
        self.position
    }

    /// Bottom-right corner (anchor for right/down rays).
    pub fn bottom_right(&self) -> Vec2 {
        self.position + self.size
    }

    /// Grow the rectangle by `amount` on all four sides.
    pub fn inflate(&self, amount: f32) -> Rect {
        Rect {
            position: self.position - Vec2::splat(amount),
            size: self.size + Vec2::splat(2.0 * amount),
        }
    }

    /// Closed-interval overlap test; edge touching counts as overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        let a_max = self.bottom_right();
        let b_max = other.bottom_right();
        self.position.x <= b_max.x
            && other.position.x <= a_max.x
            && self.position.y <= b_max.y
            && other.position.y <= a_max.y
    }

    /// Whether `other` lies entirely inside this rectangle (borders included).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        let a_max = self.bottom_right();
        let b_max = other.bottom_right();
        self.position.x <= other.position.x
            && self.position.y <= other.position.y
            && b_max.x <= a_max.x
            && b_max.y <= a_max.y
    }

    /// The four boundary edges, clockwise from the top edge.
    pub fn edges(&self) -> [LineSegment; 4] {
        let min = self.position;
        let max = self.bottom_right();
        let top_right = Vec2::new(max.x, min.y);
        let bottom_left = Vec2::new(min.x, max.y);
        [
            LineSegment::new(min, top_right),
            LineSegment::new(top_right, max),
            LineSegment::new(max, bottom_left),
            LineSegment::new(bottom_left, min),
        ]
    }
}

/// Proximity predicate gating rectangle acceptance during placement.
///
/// True when either rectangle contains the other, or when one inflated by
/// `padding` overlaps the other.
pub fn too_near(a: &Rect, b: &Rect, padding: f32) -> bool {
    a.contains_rect(b)
        || b.contains_rect(a)
        || a.inflate(padding).intersects(b)
        || b.inflate(padding).intersects(a)
}
