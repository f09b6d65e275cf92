#![forbid(unsafe_code)]
//! mondrian_layout: Mondrian-style composition layout with seeded placement,
//! ray clipping, and cell reconstruction.
//!
//! Modules:
//! - geom: viewport, rectangles and the proximity predicate, rays, segments, grid snapping
//! - compose: the pipeline (placement, ray network, arrangement, cells, palette)
//! - rng: string-seed derivation for the canonical generator
//!
//! For examples and docs, see README and docs.rs.
pub mod compose;
pub mod error;
pub mod geom;
pub mod rng;

/// Convenient re-exports for common types. Import with `use mondrian_layout::prelude::*;`.
pub mod prelude {
    pub use crate::compose::arrange::{Arrangement, ArrangementPoint};
    pub use crate::compose::cells::{reconstruct, Cell};
    pub use crate::compose::palette::{PaletteEntry, Rgb, WeightedPalette};
    pub use crate::compose::place::{place_rectangles, DEFAULT_MAX_ATTEMPTS};
    pub use crate::compose::rays::{border_segments, cast_and_clip};
    pub use crate::compose::{
        compose, compose_seeded, Composer, Composition, CompositionConfig,
    };
    pub use crate::error::{Error, Result};
    pub use crate::geom::{
        too_near, Direction, GridSnapper, LineSegment, Ray, Rect, Viewport,
    };
    pub use crate::rng::seed_from_str;
}
