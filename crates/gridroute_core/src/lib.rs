//! # Gridroute Core
//!
//! Footprint-aware orthogonal pathfinding over rectangular corridor maps.
//!
//! This crate contains **only** deterministic logic:
//! - No rendering
//! - No IO
//! - No system randomness
//!
//! Given a set of rectangular (optionally rotated) corridors, axis-aligned
//! blocking walls and named waypoints, the engine rasterizes the world into
//! a walkability grid sized to a square agent footprint, runs an A* search
//! over it, simplifies and smooths the result, and falls back to a
//! breadth-first search over paired teleport portals when no direct route
//! exists.
//!
//! The same inputs always produce a bit-identical route, which makes the
//! engine suitable for reproducible tests and for caching by the embedding
//! editor or runtime.
//!
//! ## Crate Structure
//!
//! - [`map`] - Corridor, wall and waypoint data types
//! - [`geometry`] - Containment and overlap tests shared by all stages
//! - [`grid`] - Walkability rasterization
//! - [`search`] - Grid-space A* search
//! - [`refine`] - Collinear-point removal and visibility smoothing
//! - [`portal`] - Teleport-graph fallback search
//! - [`placement`] - Nearest valid placement for off-corridor waypoints
//! - [`pathfinder`] - The engine facade tying the stages together

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod error;
pub mod geometry;
pub mod grid;
pub mod map;
pub mod math;
pub mod pathfinder;
pub mod placement;
pub mod portal;
pub mod refine;
pub mod route;
pub mod search;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Result, RouteError};
    pub use crate::grid::Grid;
    pub use crate::map::{Corridor, Rect, Wall, Waypoint, WaypointKind};
    pub use crate::math::Vec2;
    pub use crate::pathfinder::Pathfinder;
    pub use crate::route::Route;
}
