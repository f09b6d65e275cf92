//! Ray casting from rectangle anchor corners and clipping against obstacles.
//!
//! Every rectangle emits four cardinal rays from its top-left corner and four
//! from its bottom-right corner. A ray runs to the viewport edge unless it
//! hits another rectangle's boundary first, in which case it is clipped at
//! the hit nearest its origin.
use glam::Vec2;
use tracing::warn;

use crate::geom::{Direction, LineSegment, Ray, Rect, Viewport};

/// Cast and clip the eight anchor rays of `rect` against every other
/// rectangle in `collection`.
///
/// Degenerate rays (an anchor already sitting on the viewport border, or an
/// obstacle edge touching the anchor) are discarded with a warning, so the
/// result holds up to eight segments.
pub fn cast_and_clip(rect: &Rect, collection: &[Rect], viewport: &Viewport) -> Vec<LineSegment> {
    let mut segments = Vec::with_capacity(8);
    for anchor in [rect.top_left(), rect.bottom_right()] {
        for direction in Direction::ALL {
            let ray = Ray::new(anchor, direction);
            match clip_ray(&ray, rect, collection, viewport) {
                Ok(segment) => segments.push(segment),
                Err(err) => warn!("discarding {direction:?} ray from {anchor}: {err}"),
            }
        }
    }
    segments
}

/// The four canvas-border edges, always part of the line network.
pub fn border_segments(viewport: &Viewport) -> [LineSegment; 4] {
    let [top_left, top_right, bottom_left, bottom_right] = viewport.corners();
    [
        LineSegment::new(top_left, top_right),
        LineSegment::new(top_right, bottom_right),
        LineSegment::new(bottom_right, bottom_left),
        LineSegment::new(bottom_left, top_left),
    ]
}

fn clip_ray(
    ray: &Ray,
    source: &Rect,
    collection: &[Rect],
    viewport: &Viewport,
) -> crate::error::Result<LineSegment> {
    let full = ray.to_border(viewport)?;

    let mut nearest: Option<Vec2> = None;
    let mut best = f32::INFINITY;
    for obstacle in collection {
        if obstacle == source {
            continue;
        }
        for edge in obstacle.edges() {
            if let Some(hit) = full.intersection(&edge) {
                let distance = ray.origin.distance(hit);
                if distance < best {
                    best = distance;
                    nearest = Some(hit);
                }
            }
        }
    }

    match nearest {
        None => Ok(full),
        Some(hit) => LineSegment::try_new(ray.origin, hit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn unobstructed_rays_reach_the_canvas_edges() {
        let only = rect(96.0, 96.0, 96.0, 96.0);
        let collection = vec![only];
        let segments = cast_and_clip(&collection[0], &collection, &viewport());
        assert_eq!(segments.len(), 8);

        // top-left anchor, cast left and down
        assert!(segments.contains(&LineSegment::new(
            Vec2::new(96.0, 96.0),
            Vec2::new(0.0, 96.0)
        )));
        assert!(segments.contains(&LineSegment::new(
            Vec2::new(96.0, 96.0),
            Vec2::new(96.0, 600.0)
        )));
        // bottom-right anchor, cast right
        assert!(segments.contains(&LineSegment::new(
            Vec2::new(192.0, 192.0),
            Vec2::new(800.0, 192.0)
        )));
    }

    #[test]
    fn rays_stop_at_the_first_obstacle() {
        let collection = vec![rect(96.0, 96.0, 96.0, 96.0), rect(400.0, 96.0, 96.0, 96.0)];
        let segments = cast_and_clip(&collection[0], &collection, &viewport());

        // right ray from the top-left anchor stops at the obstacle's left edge
        assert!(segments.contains(&LineSegment::new(
            Vec2::new(96.0, 96.0),
            Vec2::new(400.0, 96.0)
        )));
        // and the reverse ray from the obstacle stops at the source
        let reverse = cast_and_clip(&collection[1], &collection, &viewport());
        assert!(reverse.contains(&LineSegment::new(
            Vec2::new(400.0, 96.0),
            Vec2::new(192.0, 96.0)
        )));
    }

    #[test]
    fn nearest_of_several_obstacles_wins() {
        let collection = vec![
            rect(48.0, 240.0, 48.0, 48.0),
            rect(192.0, 240.0, 48.0, 48.0),
            rect(480.0, 240.0, 48.0, 48.0),
        ];
        let segments = cast_and_clip(&collection[0], &collection, &viewport());

        // right ray from the bottom-right anchor crosses both obstacles'
        // x-ranges; the nearer one clips it
        assert!(segments.contains(&LineSegment::new(
            Vec2::new(96.0, 288.0),
            Vec2::new(192.0, 288.0)
        )));
    }

    #[test]
    fn border_anchor_drops_the_degenerate_ray() {
        let collection = vec![rect(0.0, 96.0, 96.0, 96.0)];
        let segments = cast_and_clip(&collection[0], &collection, &viewport());
        // the left ray from the top-left anchor has zero length
        assert_eq!(segments.len(), 7);
    }

    #[test]
    fn border_segments_trace_the_viewport() {
        let border = border_segments(&viewport());
        assert_eq!(border[0].from, Vec2::ZERO);
        assert_eq!(border[0].to, Vec2::new(800.0, 0.0));
        assert_eq!(border[3].to, Vec2::ZERO);
        for segment in &border {
            assert!(segment.length() > 0.0);
        }
    }
}
