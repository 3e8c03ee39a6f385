//! Error types for the routing engine.
//!
//! Ordinary unreachability is **not** an error: `find_path` returns `None`
//! for it. Errors are reserved for malformed input rejected at the API
//! boundary before any search runs.

use thiserror::Error;

/// Result type alias using [`RouteError`].
pub type Result<T> = std::result::Result<T, RouteError>;

/// Top-level error type for routing engine construction.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Grid cell size must be a positive, finite number.
    #[error("Grid size must be positive and finite, got {0}")]
    InvalidGridSize(f64),

    /// Footprint size must be a non-negative, finite number.
    #[error("Footprint size must be non-negative and finite, got {0}")]
    InvalidFootprint(f64),

    /// A corridor with zero or negative area cannot be walked.
    #[error("Corridor '{id}' has degenerate geometry: {width} x {height}")]
    DegenerateCorridor {
        /// Offending corridor id.
        id: String,
        /// Corridor width.
        width: f64,
        /// Corridor height.
        height: f64,
    },

    /// A wall with zero or negative area blocks nothing and indicates
    /// corrupt editor data.
    #[error("Wall '{id}' has degenerate geometry: {width} x {height}")]
    DegenerateWall {
        /// Offending wall id.
        id: String,
        /// Wall width.
        width: f64,
        /// Wall height.
        height: f64,
    },

    /// With no corridors there is no walkable space to rasterize.
    #[error("Map contains no corridors")]
    NoCorridors,
}
