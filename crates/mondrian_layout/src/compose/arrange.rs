//! Planar point arrangement built from segment intersections.
//!
//! Every pairwise segment intersection is pixel-snapped to integers and
//! deduplicated, then indexed into a sparse grid: `xs`/`ys` hold the sorted
//! unique coordinate values and each point knows its column and row within
//! them. Not every `(col, row)` pair is occupied; the reconstructor treats
//! missing candidates as gaps, not errors.
use std::collections::{HashMap, HashSet};

use glam::IVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::geom::{LineSegment, Viewport};

/// A deduplicated intersection point with its sparse-grid indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArrangementPoint {
    /// Pixel-snapped position.
    pub position: IVec2,
    /// Index of `position.x` within the sorted unique x-values.
    pub col: usize,
    /// Index of `position.y` within the sorted unique y-values.
    pub row: usize,
}

/// The point arrangement of a line network.
#[derive(Debug, Clone)]
pub struct Arrangement {
    /// Ascending unique x-values across all points.
    pub xs: Vec<i32>,
    /// Ascending unique y-values across all points.
    pub ys: Vec<i32>,
    points: Vec<ArrangementPoint>,
    rows: Vec<Vec<usize>>,
    cols: Vec<Vec<usize>>,
    by_index: HashMap<(usize, usize), usize>,
}

impl Arrangement {
    /// Build the arrangement of `segments` within `viewport`.
    ///
    /// The viewport's four corners are always part of the point set. Each
    /// unordered segment pair contributes at most one intersection; points
    /// are deduplicated by their snapped position, first occurrence winning.
    pub fn build(segments: &[LineSegment], viewport: &Viewport) -> Self {
        let mut seen: HashSet<IVec2> = HashSet::new();
        let mut positions: Vec<IVec2> = Vec::new();

        for corner in viewport.corners() {
            let snapped = IVec2::new(corner.x.round() as i32, corner.y.round() as i32);
            if seen.insert(snapped) {
                positions.push(snapped);
            }
        }

        for (i, segment) in segments.iter().enumerate() {
            for other in &segments[i + 1..] {
                let Some(point) = segment.intersection(other) else {
                    continue;
                };
                if !point.is_finite() {
                    warn!("discarding non-finite intersection of {segment:?} and {other:?}");
                    continue;
                }
                let snapped = IVec2::new(point.x.round() as i32, point.y.round() as i32);
                if seen.insert(snapped) {
                    positions.push(snapped);
                }
            }
        }

        let mut xs: Vec<i32> = positions.iter().map(|p| p.x).collect();
        xs.sort_unstable();
        xs.dedup();
        let mut ys: Vec<i32> = positions.iter().map(|p| p.y).collect();
        ys.sort_unstable();
        ys.dedup();

        let mut points: Vec<ArrangementPoint> = positions
            .into_iter()
            .map(|position| ArrangementPoint {
                position,
                col: xs
                    .binary_search(&position.x)
                    .expect("x-value indexed during construction"),
                row: ys
                    .binary_search(&position.y)
                    .expect("y-value indexed during construction"),
            })
            .collect();
        points.sort_by_key(|p| (p.row, p.col));

        let mut rows: Vec<Vec<usize>> = vec![Vec::new(); ys.len()];
        let mut cols: Vec<Vec<usize>> = vec![Vec::new(); xs.len()];
        let mut by_index = HashMap::with_capacity(points.len());
        for (index, point) in points.iter().enumerate() {
            rows[point.row].push(index);
            cols[point.col].push(index);
            by_index.insert((point.col, point.row), index);
        }

        Self {
            xs,
            ys,
            points,
            rows,
            cols,
            by_index,
        }
    }

    /// All points in reading order: by row, then by column.
    pub fn points(&self) -> &[ArrangementPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point occupying `(col, row)`, if any.
    pub fn point_at(&self, col: usize, row: usize) -> Option<&ArrangementPoint> {
        self.by_index.get(&(col, row)).map(|&i| &self.points[i])
    }

    /// The next point to the right of `point` within its row.
    pub fn next_in_row(&self, point: &ArrangementPoint) -> Option<&ArrangementPoint> {
        let group = &self.rows[point.row];
        let position = group
            .binary_search_by_key(&point.col, |&i| self.points[i].col)
            .ok()?;
        group.get(position + 1).map(|&i| &self.points[i])
    }

    /// The next point below `point` within its column.
    pub fn next_in_col(&self, point: &ArrangementPoint) -> Option<&ArrangementPoint> {
        let group = &self.cols[point.col];
        let position = group
            .binary_search_by_key(&point.row, |&i| self.points[i].row)
            .ok()?;
        group.get(position + 1).map(|&i| &self.points[i])
    }
}
