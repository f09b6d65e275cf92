//! Rectangle placement by bounded rejection sampling.
//!
//! Candidates are drawn uniformly (width, height, x, y, in that order, so
//! the draw stream stays reproducible), snapped to the grid, and accepted
//! only when they keep their distance from every rectangle accepted before
//! them. The first candidate is accepted unconditionally.
use glam::Vec2;
use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geom::{too_near, GridSnapper, Rect, Viewport};
use crate::rng::rand_range;

/// Default per-rectangle candidate budget.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Place `count` mutually non-near rectangles inside the viewport.
///
/// Each rectangle gets at most `max_attempts` candidate draws; exhausting the
/// budget fails with [`Error::PlacementInfeasible`] instead of looping
/// forever.
pub fn place_rectangles(
    viewport: &Viewport,
    count: usize,
    size_fraction_range: (f32, f32),
    padding: f32,
    snapper: &GridSnapper,
    max_attempts: usize,
    rng: &mut dyn Rng,
) -> Result<Vec<Rect>> {
    let mut accepted: Vec<Rect> = Vec::with_capacity(count);

    for index in 0..count {
        let mut attempts = 0usize;
        let rect = loop {
            if attempts == max_attempts {
                return Err(Error::PlacementInfeasible {
                    placed: accepted.len(),
                    requested: count,
                    attempts,
                });
            }
            attempts += 1;

            let candidate = sample_candidate(viewport, size_fraction_range, snapper, rng);
            if !viewport.contains(candidate.bottom_right()) {
                // Snapping can push an oversized candidate past the edge.
                continue;
            }
            if accepted
                .iter()
                .all(|placed| !too_near(placed, &candidate, padding))
            {
                break candidate;
            }
        };

        if attempts > 1 {
            debug!("rectangle {index} accepted after {attempts} attempts");
        }
        accepted.push(rect);
    }

    Ok(accepted)
}

fn sample_candidate(
    viewport: &Viewport,
    (min_frac, max_frac): (f32, f32),
    snapper: &GridSnapper,
    rng: &mut dyn Rng,
) -> Rect {
    let width = snapper.snap(rand_range(
        rng,
        min_frac * viewport.width,
        max_frac * viewport.width,
    ));
    let height = snapper.snap(rand_range(
        rng,
        min_frac * viewport.height,
        max_frac * viewport.height,
    ));
    let x = snapper.snap(rand_range(rng, 0.0, viewport.width - width));
    let y = snapper.snap(rand_range(rng, 0.0, viewport.height - height));
    Rect::new(Vec2::new(x, y), Vec2::new(width, height))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    fn snapper() -> GridSnapper {
        GridSnapper::from_percent(&viewport(), 0.03)
    }

    fn place(seed: u64, count: usize, padding: f32) -> Result<Vec<Rect>> {
        let mut rng = StdRng::seed_from_u64(seed);
        place_rectangles(
            &viewport(),
            count,
            (0.2, 0.4),
            padding,
            &snapper(),
            DEFAULT_MAX_ATTEMPTS,
            &mut rng,
        )
    }

    #[test]
    fn places_the_requested_count() {
        let rects = place(1, 4, 60.0).expect("feasible placement");
        assert_eq!(rects.len(), 4);
    }

    #[test]
    fn accepted_rectangles_are_pairwise_distant() {
        let rects = place(2, 4, 60.0).expect("feasible placement");
        for i in 0..rects.len() {
            for j in (i + 1)..rects.len() {
                assert!(!too_near(&rects[i], &rects[j], 60.0));
            }
        }
    }

    #[test]
    fn sizes_and_positions_sit_on_the_grid() {
        let rects = place(3, 4, 60.0).expect("feasible placement");
        for rect in &rects {
            for value in [rect.position.x, rect.position.y, rect.size.x, rect.size.y] {
                assert_eq!(value % 24.0, 0.0, "{value} is not grid-aligned");
            }
            // fraction range (0.2, 0.4), snapped down by at most one cell
            assert!(rect.size.x >= 160.0 - 24.0 && rect.size.x <= 320.0);
            assert!(rect.size.y >= 120.0 - 24.0 && rect.size.y <= 240.0);
            assert!(viewport().contains(rect.bottom_right()));
        }
    }

    #[test]
    fn identical_seeds_place_identically() {
        let a = place(42, 4, 60.0).expect("feasible placement");
        let b = place(42, 4, 60.0).expect("feasible placement");
        assert_eq!(a, b);
    }

    #[test]
    fn overconstrained_placement_fails_with_typed_error() {
        let mut rng = StdRng::seed_from_u64(4);
        let tight = Viewport::new(200.0, 200.0);
        let result = place_rectangles(
            &tight,
            5,
            (0.4, 0.5),
            400.0,
            &GridSnapper::from_percent(&tight, 0.03),
            50,
            &mut rng,
        );
        assert!(matches!(
            result,
            Err(Error::PlacementInfeasible { attempts: 50, .. })
        ));
    }
}
