//! Containment and overlap tests shared by every routing stage.
//!
//! All tests are pure functions of the geometry passed in: the rasterizer,
//! the refiner and the placement finder must agree on walkability, so they
//! all call through here.

use crate::map::{Corridor, Rect, Wall};
use crate::math::Aabb;

/// Footprints smaller than this are tested at their center only; larger
/// footprints are tested at their four corners.
pub const CENTER_ONLY_FOOTPRINT: f64 = 5.0;

/// World bounds are padded by at least this much on every side so searches
/// can route around the outermost geometry.
pub const MIN_BOUNDS_PADDING: f64 = 50.0;

/// Test whether a point lies inside a rectangle, honoring its rotation.
///
/// For a rotated rectangle the point is rotated by the inverse angle about
/// the rectangle's center and tested against the unrotated bounds.
/// Containment is inclusive on all edges.
#[must_use]
pub fn point_in_rotated_rect(px: f64, py: f64, rect: &Rect) -> bool {
    if rect.rotation == 0.0 {
        return px >= rect.x && px <= rect.x + rect.width && py >= rect.y && py <= rect.y + rect.height;
    }

    let center = rect.center();
    let angle = -rect.rotation.to_radians();
    let (sin, cos) = angle.sin_cos();

    let local_x = (px - center.x) * cos - (py - center.y) * sin + center.x;
    let local_y = (px - center.x) * sin + (py - center.y) * cos + center.y;

    local_x >= rect.x
        && local_x <= rect.x + rect.width
        && local_y >= rect.y
        && local_y <= rect.y + rect.height
}

/// Test whether a point lies inside at least one corridor.
#[must_use]
pub fn point_in_any_corridor(px: f64, py: f64, corridors: &[Corridor]) -> bool {
    corridors
        .iter()
        .any(|c| point_in_rotated_rect(px, py, &c.rect))
}

/// Test whether an agent footprint centered at the given point overlaps no
/// wall.
///
/// Walls never rotate, so this is a strict AABB overlap test: footprints
/// touching a wall edge exactly do not collide.
#[must_use]
pub fn footprint_clear_of_walls(cx: f64, cy: f64, footprint: f64, walls: &[Wall]) -> bool {
    let half = footprint / 2.0;
    let left = cx - half;
    let right = cx + half;
    let top = cy - half;
    let bottom = cy + half;

    !walls.iter().any(|wall| {
        left < wall.rect.x + wall.rect.width
            && right > wall.rect.x
            && top < wall.rect.y + wall.rect.height
            && bottom > wall.rect.y
    })
}

/// Test whether an agent footprint can occupy a position.
///
/// The footprint must be clear of every wall, and its test points must each
/// lie inside *some* corridor (not necessarily the same one, so footprints
/// may straddle corridor joints). Footprints under
/// [`CENTER_ONLY_FOOTPRINT`] test only the center; larger footprints test
/// the four corners.
#[must_use]
pub fn can_place_at(
    cx: f64,
    cy: f64,
    footprint: f64,
    corridors: &[Corridor],
    walls: &[Wall],
) -> bool {
    if !footprint_clear_of_walls(cx, cy, footprint, walls) {
        return false;
    }

    let half = footprint / 2.0;
    if footprint < CENTER_ONLY_FOOTPRINT {
        return point_in_any_corridor(cx, cy, corridors);
    }

    let corners = [
        (cx - half, cy - half),
        (cx + half, cy - half),
        (cx - half, cy + half),
        (cx + half, cy + half),
    ];
    corners
        .iter()
        .all(|&(px, py)| point_in_any_corridor(px, py, corridors))
}

/// Compute the padded world bounds enclosing all corridors and walls.
///
/// Rotated corridor corners are swept into world space; wall corners enter
/// directly. The result is inflated by `padding` on every side. Returns
/// `None` when there is no geometry at all.
#[must_use]
pub fn world_bounds(corridors: &[Corridor], walls: &[Wall], padding: f64) -> Option<Aabb> {
    let mut bounds = Aabb::EMPTY;

    for corridor in corridors {
        let rect = &corridor.rect;
        if rect.rotation == 0.0 {
            bounds.extend(rect.x, rect.y);
            bounds.extend(rect.x + rect.width, rect.y + rect.height);
        } else {
            let center = rect.center();
            let (sin, cos) = rect.rotation.to_radians().sin_cos();
            for corner in rect.corners() {
                let rx = center.x + (corner.x - center.x) * cos - (corner.y - center.y) * sin;
                let ry = center.y + (corner.x - center.x) * sin + (corner.y - center.y) * cos;
                bounds.extend(rx, ry);
            }
        }
    }

    for wall in walls {
        bounds.extend(wall.rect.x, wall.rect.y);
        bounds.extend(
            wall.rect.x + wall.rect.width,
            wall.rect.y + wall.rect.height,
        );
    }

    bounds.is_valid().then(|| bounds.inflate(padding))
}

/// Bounds padding for a given footprint: twice the footprint, at least
/// [`MIN_BOUNDS_PADDING`].
#[must_use]
pub fn bounds_padding(footprint: f64) -> f64 {
    (footprint * 2.0).max(MIN_BOUNDS_PADDING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Corridor, Wall};

    #[test]
    fn test_point_in_axis_aligned_rect() {
        let rect = Rect::new(10.0, 10.0, 20.0, 10.0);
        assert!(point_in_rotated_rect(15.0, 15.0, &rect));
        // Edges are inclusive
        assert!(point_in_rotated_rect(10.0, 10.0, &rect));
        assert!(point_in_rotated_rect(30.0, 20.0, &rect));
        assert!(!point_in_rotated_rect(30.1, 15.0, &rect));
        assert!(!point_in_rotated_rect(15.0, 9.9, &rect));
    }

    #[test]
    fn test_point_in_rotated_rect() {
        // 20x10 rect centered at (20, 15), rotated 90 degrees: occupies
        // roughly x in [15, 25], y in [5, 25] in world space.
        let rect = Rect::new(10.0, 10.0, 20.0, 10.0).with_rotation(90.0);
        assert!(point_in_rotated_rect(20.0, 15.0, &rect));
        assert!(point_in_rotated_rect(16.0, 6.0, &rect));
        assert!(point_in_rotated_rect(24.0, 24.0, &rect));
        // Inside the unrotated rect but outside the rotated one
        assert!(!point_in_rotated_rect(11.0, 11.0, &rect));
        assert!(!point_in_rotated_rect(29.0, 19.0, &rect));
    }

    #[test]
    fn test_point_in_rect_rotated_45() {
        let rect = Rect::new(-10.0, -10.0, 20.0, 20.0).with_rotation(45.0);
        // Center is invariant under rotation
        assert!(point_in_rotated_rect(0.0, 0.0, &rect));
        // The rotated square's vertex reaches sqrt(200) ~ 14.14 along the axes
        assert!(point_in_rotated_rect(14.0, 0.0, &rect));
        // The unrotated corner is now outside
        assert!(!point_in_rotated_rect(9.9, 9.9, &rect));
    }

    #[test]
    fn test_footprint_clear_of_walls() {
        let walls = vec![Wall::new("w", 50.0, 50.0, 20.0, 20.0)];
        assert!(footprint_clear_of_walls(20.0, 20.0, 10.0, &walls));
        assert!(!footprint_clear_of_walls(55.0, 55.0, 10.0, &walls));
        // Overlapping by any amount fails
        assert!(!footprint_clear_of_walls(46.0, 55.0, 10.0, &walls));
        // Exactly touching the wall edge passes (strict inequality)
        assert!(footprint_clear_of_walls(45.0, 55.0, 10.0, &walls));
    }

    #[test]
    fn test_can_place_small_footprint_uses_center() {
        let corridors = vec![Corridor::new("c", 0.0, 0.0, 100.0, 10.0)];
        // Footprint 4 tests only the center, which fits even near the edge
        assert!(can_place_at(50.0, 9.0, 4.0, &corridors, &[]));
        // Footprint 10 tests corners; at y=9 the bottom corners leave the
        // corridor
        assert!(!can_place_at(50.0, 9.0, 10.0, &corridors, &[]));
        assert!(can_place_at(50.0, 5.0, 10.0, &corridors, &[]));
    }

    #[test]
    fn test_can_place_straddles_corridor_joint() {
        // Two abutting corridors; a footprint centered on the seam has
        // corners in different corridors and must still be placeable.
        let corridors = vec![
            Corridor::new("a", 0.0, 0.0, 50.0, 20.0),
            Corridor::new("b", 50.0, 0.0, 50.0, 20.0),
        ];
        assert!(can_place_at(50.0, 10.0, 10.0, &corridors, &[]));
    }

    #[test]
    fn test_can_place_rejects_wall_overlap() {
        let corridors = vec![Corridor::new("c", 0.0, 0.0, 100.0, 100.0)];
        let walls = vec![Wall::new("w", 40.0, 40.0, 20.0, 20.0)];
        assert!(can_place_at(20.0, 20.0, 10.0, &corridors, &walls));
        assert!(!can_place_at(50.0, 50.0, 10.0, &corridors, &walls));
    }

    #[test]
    fn test_world_bounds_includes_rotated_corners() {
        // A long thin corridor rotated 45 degrees sweeps well outside its
        // unrotated box.
        let corridors = vec![Corridor::new("c", 0.0, 0.0, 100.0, 10.0).with_rotation(45.0)];
        let bounds = world_bounds(&corridors, &[], 0.0).unwrap();
        // Unrotated the corridor spans y in [0, 10]; at 45 degrees it sweeps
        // roughly y in [-34, 44] around its center.
        assert!(bounds.max_y > 40.0);
        assert!(bounds.min_y < -30.0);
        assert!(bounds.min_x > 10.0);
    }

    #[test]
    fn test_world_bounds_empty() {
        assert!(world_bounds(&[], &[], 10.0).is_none());
    }

    #[test]
    fn test_bounds_padding_floor() {
        assert_eq!(bounds_padding(5.0), 50.0);
        assert_eq!(bounds_padding(0.0), 50.0);
        assert_eq!(bounds_padding(40.0), 80.0);
    }

    #[test]
    fn test_placement_is_pure() {
        let corridors = vec![Corridor::new("c", 0.0, 0.0, 100.0, 20.0).with_rotation(17.5)];
        let walls = vec![Wall::new("w", 30.0, 0.0, 5.0, 40.0)];
        let first = can_place_at(12.0, 8.0, 6.0, &corridors, &walls);
        for _ in 0..10 {
            assert_eq!(first, can_place_at(12.0, 8.0, 6.0, &corridors, &walls));
        }
    }
}
