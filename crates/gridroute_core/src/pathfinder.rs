//! The engine facade.
//!
//! A [`Pathfinder`] owns one validated snapshot of the world geometry and
//! the walkability grid rasterized from it. Construction validates inputs
//! and rasterizes; queries are read-only after that, so one instance can
//! serve any number of `find_path` calls and always produce bit-identical
//! results for identical arguments.

use crate::error::{Result, RouteError};
use crate::geometry::can_place_at;
use crate::grid::Grid;
use crate::map::{Corridor, Wall, Waypoint};
use crate::math::Vec2;
use crate::placement::nearest_corridor_position;
use crate::portal::find_portal_route;
use crate::refine;
use crate::route::Route;
use crate::search::shortest_cell_path;

/// Footprint-aware pathfinder over a fixed geometry snapshot.
#[derive(Debug, Clone)]
pub struct Pathfinder {
    corridors: Vec<Corridor>,
    walls: Vec<Wall>,
    footprint: f64,
    grid: Grid,
}

impl Pathfinder {
    /// Build a pathfinder for a geometry snapshot.
    ///
    /// Rasterizes the walkability grid once, up front. Geometry changes in
    /// the editor require constructing a new instance.
    ///
    /// # Errors
    ///
    /// Fails fast on malformed input: non-positive or non-finite grid
    /// size, negative or non-finite footprint, zero-area corridors or
    /// walls, or an empty corridor set.
    pub fn new(
        corridors: Vec<Corridor>,
        walls: Vec<Wall>,
        grid_size: f64,
        footprint: f64,
    ) -> Result<Self> {
        if !(grid_size.is_finite() && grid_size > 0.0) {
            return Err(RouteError::InvalidGridSize(grid_size));
        }
        if !(footprint.is_finite() && footprint >= 0.0) {
            return Err(RouteError::InvalidFootprint(footprint));
        }
        for corridor in &corridors {
            if !corridor.rect.has_area() {
                return Err(RouteError::DegenerateCorridor {
                    id: corridor.id.clone(),
                    width: corridor.rect.width,
                    height: corridor.rect.height,
                });
            }
        }
        for wall in &walls {
            if !wall.rect.has_area() {
                return Err(RouteError::DegenerateWall {
                    id: wall.id.clone(),
                    width: wall.rect.width,
                    height: wall.rect.height,
                });
            }
        }

        let grid = Grid::build(&corridors, &walls, grid_size, footprint)
            .ok_or(RouteError::NoCorridors)?;

        Ok(Self {
            corridors,
            walls,
            footprint,
            grid,
        })
    }

    /// The rasterized walkability grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Agent footprint edge length.
    #[must_use]
    pub const fn footprint(&self) -> f64 {
        self.footprint
    }

    /// Whether the agent footprint can occupy a world position.
    #[must_use]
    pub fn can_place_at(&self, pos: Vec2) -> bool {
        can_place_at(pos.x, pos.y, self.footprint, &self.corridors, &self.walls)
    }

    /// Find a direct walkable route between two world positions.
    ///
    /// Returns `None` when either endpoint is not placeable, maps to a
    /// non-walkable cell, or the search exhausts without reaching the
    /// goal. Unreachability is an ordinary outcome, never an error.
    #[must_use]
    pub fn find_path(&self, from: Vec2, to: Vec2) -> Option<Route> {
        if !self.can_place_at(from) || !self.can_place_at(to) {
            tracing::debug!(?from, ?to, "Endpoint not placeable, no direct route");
            return None;
        }

        let start = self.grid.world_to_grid(from)?;
        let goal = self.grid.world_to_grid(to)?;
        if !self.grid.is_walkable(i64::from(start.0), i64::from(start.1))
            || !self.grid.is_walkable(i64::from(goal.0), i64::from(goal.1))
        {
            // Placement succeeded but the covering cell is blocked: the
            // cell center sits less favorably than the query point.
            tracing::debug!(?start, ?goal, "Endpoint cell not walkable");
            return None;
        }

        let raw = shortest_cell_path(&self.grid, start, goal)?;
        let optimized = refine::optimize(&raw);
        let smoothed = refine::smooth(&optimized, self.footprint, &self.corridors, &self.walls);
        Some(Route::direct(smoothed))
    }

    /// Find a route that may traverse linked portals.
    ///
    /// Only useful when [`Self::find_path`] fails; tries the direct route
    /// first and then fans out over the portal graph.
    #[must_use]
    pub fn find_path_via_portals(
        &self,
        from: Vec2,
        to: Vec2,
        waypoints: &[Waypoint],
    ) -> Option<Route> {
        find_portal_route(self, from, to, waypoints)
    }

    /// Route between two positions the way the editor requests paths.
    ///
    /// Endpoints that fail the placement test are first projected onto the
    /// nearest valid corridor edge; the direct search runs on the adjusted
    /// endpoints, and the portal search is the fallback when it fails.
    #[must_use]
    pub fn route(&self, from: Vec2, to: Vec2, waypoints: &[Waypoint]) -> Option<Route> {
        let from = self.snap_endpoint(from);
        let to = self.snap_endpoint(to);

        if let Some(route) = self.find_path(from, to) {
            return Some(route);
        }
        self.find_path_via_portals(from, to, waypoints)
    }

    fn snap_endpoint(&self, pos: Vec2) -> Vec2 {
        if self.can_place_at(pos) {
            pos
        } else {
            nearest_corridor_position(pos, &self.corridors, &self.walls, self.footprint)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Corridor;

    fn open_map() -> Pathfinder {
        let corridors = vec![Corridor::new("c", 0.0, 0.0, 400.0, 40.0)];
        Pathfinder::new(corridors, Vec::new(), 5.0, 5.0).unwrap()
    }

    #[test]
    fn test_rejects_invalid_grid_size() {
        let corridors = vec![Corridor::new("c", 0.0, 0.0, 100.0, 100.0)];
        assert!(matches!(
            Pathfinder::new(corridors.clone(), Vec::new(), 0.0, 5.0),
            Err(RouteError::InvalidGridSize(_))
        ));
        assert!(matches!(
            Pathfinder::new(corridors, Vec::new(), f64::NAN, 5.0),
            Err(RouteError::InvalidGridSize(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_footprint() {
        let corridors = vec![Corridor::new("c", 0.0, 0.0, 100.0, 100.0)];
        assert!(matches!(
            Pathfinder::new(corridors, Vec::new(), 5.0, -1.0),
            Err(RouteError::InvalidFootprint(_))
        ));
    }

    #[test]
    fn test_rejects_degenerate_corridor() {
        let corridors = vec![Corridor::new("bad", 0.0, 0.0, 0.0, 100.0)];
        assert!(matches!(
            Pathfinder::new(corridors, Vec::new(), 5.0, 5.0),
            Err(RouteError::DegenerateCorridor { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_map() {
        assert!(matches!(
            Pathfinder::new(Vec::new(), Vec::new(), 5.0, 5.0),
            Err(RouteError::NoCorridors)
        ));
    }

    #[test]
    fn test_direct_path_along_corridor() {
        let pathfinder = open_map();
        let route = pathfinder
            .find_path(Vec2::new(20.0, 20.0), Vec2::new(380.0, 20.0))
            .unwrap();
        assert!(route.len() >= 2);
        assert!(route.teleport_segments.is_empty());
        // Smoothing collapses a straight corridor run to its endpoints.
        assert_eq!(route.len(), 2);
    }

    #[test]
    fn test_no_path_for_unplaceable_endpoint() {
        let pathfinder = open_map();
        // Off the corridor entirely.
        assert!(pathfinder
            .find_path(Vec2::new(20.0, 20.0), Vec2::new(380.0, 300.0))
            .is_none());
    }

    #[test]
    fn test_route_snaps_unplaceable_endpoint() {
        let pathfinder = open_map();
        // Endpoint slightly above the corridor snaps to its top edge.
        let route = pathfinder
            .route(Vec2::new(200.0, -30.0), Vec2::new(20.0, 20.0), &[])
            .unwrap();
        assert!(!route.is_empty());
        let first = route.points[0];
        assert!(pathfinder.can_place_at(first));
    }

    #[test]
    fn test_find_path_is_deterministic() {
        let corridors = vec![
            Corridor::new("h", 0.0, 0.0, 400.0, 40.0),
            Corridor::new("v", 360.0, 0.0, 40.0, 400.0),
        ];
        let walls = vec![crate::map::Wall::new("w", 100.0, 0.0, 10.0, 25.0)];
        let pathfinder = Pathfinder::new(corridors, walls, 5.0, 5.0).unwrap();

        let from = Vec2::new(20.0, 20.0);
        let to = Vec2::new(380.0, 380.0);
        let first = pathfinder.find_path(from, to).unwrap();
        for _ in 0..5 {
            assert_eq!(pathfinder.find_path(from, to).unwrap(), first);
        }
    }
}
