//! Nearest valid placement for off-corridor waypoints.
//!
//! Waypoints are editor objects and routinely sit on corridor borders or
//! inside walls where the agent footprint cannot stand. Before giving up,
//! the caller projects such a waypoint onto the nearest placeable position
//! along a corridor edge.

use crate::geometry::can_place_at;
use crate::map::{Corridor, Wall};
use crate::math::Vec2;

/// Margin kept between a projected position and the corridor edge.
fn edge_margin(footprint: f64) -> f64 {
    footprint + (footprint * 0.5).max(footprint * 0.3)
}

/// Project a point onto the nearest placeable position along a corridor
/// edge.
///
/// Corridors too small to hold the footprint plus margin are skipped. Each
/// remaining corridor contributes four candidates: the point clamped onto
/// the top, bottom, left and right inner edges. The closest candidate that
/// passes the placement test wins. When nothing qualifies the original
/// point is returned unchanged and the subsequent pathfinding failure is
/// the caller's to handle.
#[must_use]
pub fn nearest_corridor_position(
    point: Vec2,
    corridors: &[Corridor],
    walls: &[Wall],
    footprint: f64,
) -> Vec2 {
    if corridors.is_empty() {
        return point;
    }

    let margin = edge_margin(footprint);
    let mut nearest = point;
    let mut min_distance = f64::INFINITY;

    for corridor in corridors {
        let rect = &corridor.rect;
        if rect.width < margin * 2.0 || rect.height < margin * 2.0 {
            continue;
        }

        let clamped_x = point.x.clamp(rect.x + margin, rect.x + rect.width - margin);
        let clamped_y = point.y.clamp(rect.y + margin, rect.y + rect.height - margin);
        let candidates = [
            Vec2::new(clamped_x, rect.y + margin),
            Vec2::new(clamped_x, rect.y + rect.height - margin),
            Vec2::new(rect.x + margin, clamped_y),
            Vec2::new(rect.x + rect.width - margin, clamped_y),
        ];

        for candidate in candidates {
            if !can_place_at(candidate.x, candidate.y, footprint, corridors, walls) {
                continue;
            }
            let distance = point.distance(candidate);
            if distance < min_distance {
                min_distance = distance;
                nearest = candidate;
            }
        }
    }

    nearest
}
