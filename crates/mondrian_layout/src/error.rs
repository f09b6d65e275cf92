//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, an exhausted placement retry budget, and degenerate
//! geometry handed to validated constructors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("placement infeasible: placed {placed} of {requested} rectangles within {attempts} attempts")]
    PlacementInfeasible {
        placed: usize,
        requested: usize,
        attempts: usize,
    },

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}
