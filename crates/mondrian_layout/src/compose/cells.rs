//! Cell reconstruction from the arrangement index.
//!
//! The walk is index-based rather than a full planar-face search: for each
//! point, the immediate row and column successors' combined index names the
//! candidate opposite corner. When no point occupies that index the cell is
//! simply not emitted; sparse grids legitimately leave gaps.
use glam::IVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::compose::arrange::Arrangement;
use crate::compose::palette::Rgb;

/// A closed rectangular cell of the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub top_left: IVec2,
    pub bottom_right: IVec2,
    /// `None` renders as an unfilled cell.
    pub fill: Option<Rgb>,
}

impl Cell {
    pub fn new(top_left: IVec2, bottom_right: IVec2) -> Self {
        debug_assert!(
            top_left.x < bottom_right.x && top_left.y < bottom_right.y,
            "cell corners must be ordered"
        );
        Self {
            top_left,
            bottom_right,
            fill: None,
        }
    }

    /// Set the fill and return the cell.
    pub fn with_fill(mut self, fill: Option<Rgb>) -> Self {
        self.fill = fill;
        self
    }

    pub fn size(&self) -> IVec2 {
        self.bottom_right - self.top_left
    }
}

/// Emit every provably closed cell of the arrangement, unfilled.
///
/// Cells are produced in the reading order of their opening (top-left)
/// points; consumers must not rely on that order.
pub fn reconstruct(arrangement: &Arrangement) -> Vec<Cell> {
    if arrangement.xs.is_empty() || arrangement.ys.is_empty() {
        return Vec::new();
    }
    let last_col = arrangement.xs.len() - 1;
    let last_row = arrangement.ys.len() - 1;

    let mut cells = Vec::new();
    for point in arrangement.points() {
        if point.col == last_col || point.row == last_row {
            continue;
        }
        let Some(next_in_row) = arrangement.next_in_row(point) else {
            continue;
        };
        let Some(next_in_col) = arrangement.next_in_col(point) else {
            continue;
        };

        let candidate = (
            next_in_row.col.max(next_in_col.col),
            next_in_row.row.max(next_in_col.row),
        );
        let Some(opposite) = arrangement.point_at(candidate.0, candidate.1) else {
            continue;
        };

        cells.push(Cell::new(point.position, opposite.position));
    }
    cells
}
