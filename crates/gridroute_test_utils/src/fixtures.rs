//! Canonical map fixtures.
//!
//! Small, hand-checked worlds used across unit, integration and property
//! tests so every crate exercises the same geometry.

use gridroute_core::map::{Corridor, Wall, Waypoint};
use gridroute_core::math::Vec2;
use gridroute_core::pathfinder::Pathfinder;

/// Two 400x20 corridors joined in an L: one running east, one running
/// south from the east end.
#[must_use]
pub fn l_shaped_corridors() -> Vec<Corridor> {
    vec![
        Corridor::new("horizontal", 0.0, 0.0, 400.0, 20.0),
        Corridor::new("vertical", 380.0, 0.0, 20.0, 400.0),
    ]
}

/// Endpoints deep in each arm of [`l_shaped_corridors`].
#[must_use]
pub fn l_shaped_endpoints() -> (Vec2, Vec2) {
    (Vec2::new(10.0, 10.0), Vec2::new(390.0, 390.0))
}

/// A single corridor with a wall spanning its full width.
#[must_use]
pub fn blocked_corridor() -> (Vec<Corridor>, Vec<Wall>) {
    let corridors = vec![Corridor::new("main", 0.0, 0.0, 400.0, 40.0)];
    let walls = vec![Wall::new("barrier", 190.0, 0.0, 20.0, 40.0)];
    (corridors, walls)
}

/// Two disconnected corridor islands bridged by a portal pair sharing
/// group `"P1"`.
#[must_use]
pub fn portal_islands() -> (Vec<Corridor>, Vec<Waypoint>) {
    let corridors = vec![
        Corridor::new("west", 0.0, 0.0, 200.0, 40.0),
        Corridor::new("east", 1000.0, 0.0, 200.0, 40.0),
    ];
    let waypoints = vec![
        Waypoint::portal("p_west", "West Portal", 150.0, 20.0, "P1"),
        Waypoint::portal("p_east", "East Portal", 1050.0, 20.0, "P1"),
    ];
    (corridors, waypoints)
}

/// A corridor too narrow for the given footprint once the edge margin is
/// taken into account.
#[must_use]
pub fn narrow_corridor() -> Vec<Corridor> {
    vec![Corridor::new("squeeze", 0.0, 0.0, 400.0, 12.0)]
}

/// Pathfinder over the L-shaped map with the scenario's canonical
/// parameters (footprint 5, grid size 5).
#[must_use]
pub fn l_shaped_pathfinder() -> Pathfinder {
    Pathfinder::new(l_shaped_corridors(), Vec::new(), 5.0, 5.0)
        .expect("fixture geometry is valid")
}
