//! Path simplification and smoothing.
//!
//! Raw A* output walks cell centers one step at a time. [`optimize`] drops
//! the interior points of straight runs; [`smooth`] then shortcuts across
//! grid staircases wherever a straight segment keeps the full footprint
//! inside corridors and clear of walls. Both passes re-validate against the
//! same geometry tests the rasterizer used, never against the grid.

use crate::geometry::{footprint_clear_of_walls, point_in_any_corridor};
use crate::map::{Corridor, Wall};
use crate::math::Vec2;

/// Number of evenly spaced sampling steps along a candidate segment.
///
/// Fixed (not adaptive) so segment validation, and therefore the final
/// route, is deterministic for testability.
const LINE_SAMPLE_STEPS: u32 = 50;

/// Sign of a step delta as -1, 0 or 1.
///
/// `f64::signum` returns 1.0 for +0.0, which would treat "no movement" as
/// an eastward step, so the comparison is explicit.
#[inline]
fn step_sign(d: f64) -> i8 {
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}

/// Remove interior points whose incoming and outgoing step directions
/// match.
///
/// A single left-to-right pass over the grid-aligned polyline; first and
/// last points are always kept. Idempotent: a second pass removes nothing.
#[must_use]
pub fn optimize(path: &[Vec2]) -> Vec<Vec2> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut simplified = vec![path[0]];
    for i in 1..path.len() - 1 {
        let prev = path[i - 1];
        let curr = path[i];
        let next = path[i + 1];

        let dir_in = (step_sign(curr.x - prev.x), step_sign(curr.y - prev.y));
        let dir_out = (step_sign(next.x - curr.x), step_sign(next.y - curr.y));

        if dir_in != dir_out {
            simplified.push(curr);
        }
    }
    simplified.push(path[path.len() - 1]);
    simplified
}

/// Test whether an agent can traverse a straight segment.
///
/// Samples [`LINE_SAMPLE_STEPS`] + 1 evenly spaced points along the
/// segment; at each sample the footprint center and four corners must lie
/// inside some corridor and the footprint box must be clear of every wall.
/// Any failing sample invalidates the whole segment.
#[must_use]
pub fn can_draw_direct_line(
    from: Vec2,
    to: Vec2,
    footprint: f64,
    corridors: &[Corridor],
    walls: &[Wall],
) -> bool {
    let half = footprint / 2.0;

    for step in 0..=LINE_SAMPLE_STEPS {
        let t = f64::from(step) / f64::from(LINE_SAMPLE_STEPS);
        let sample = from.lerp(to, t);

        if !footprint_clear_of_walls(sample.x, sample.y, footprint, walls) {
            return false;
        }

        let test_points = [
            (sample.x, sample.y),
            (sample.x - half, sample.y - half),
            (sample.x + half, sample.y - half),
            (sample.x - half, sample.y + half),
            (sample.x + half, sample.y + half),
        ];
        if test_points
            .iter()
            .any(|&(px, py)| !point_in_any_corridor(px, py, corridors))
        {
            return false;
        }
    }
    true
}

/// Greedy visibility shortcutting.
///
/// From each anchor, first try to connect straight to the final point;
/// otherwise scan backward from the end for the furthest point reachable by
/// a valid straight segment and jump there. Never increases the point
/// count.
#[must_use]
pub fn smooth(
    path: &[Vec2],
    footprint: f64,
    corridors: &[Corridor],
    walls: &[Wall],
) -> Vec<Vec2> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let last = path.len() - 1;
    let mut smoothed = vec![path[0]];
    let mut current = 0;

    while current < last {
        if current < last - 1
            && can_draw_direct_line(path[current], path[last], footprint, corridors, walls)
        {
            smoothed.push(path[last]);
            break;
        }

        let mut furthest = current + 1;
        for i in (current + 2..=last).rev() {
            if can_draw_direct_line(path[current], path[i], footprint, corridors, walls) {
                furthest = i;
                break;
            }
        }

        smoothed.push(path[furthest]);
        current = furthest;
    }

    smoothed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Corridor;

    fn p(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn test_optimize_collapses_straight_run() {
        let path = vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0)];
        assert_eq!(optimize(&path), vec![p(0.0, 0.0), p(3.0, 0.0)]);
    }

    #[test]
    fn test_optimize_keeps_turns() {
        let path = vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(2.0, 2.0),
        ];
        assert_eq!(
            optimize(&path),
            vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0)]
        );
    }

    #[test]
    fn test_optimize_collapses_diagonal_run() {
        let path = vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0), p(3.0, 3.0)];
        assert_eq!(optimize(&path), vec![p(0.0, 0.0), p(3.0, 3.0)]);
    }

    #[test]
    fn test_optimize_is_idempotent() {
        let path = vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 1.0),
            p(3.0, 2.0),
            p(3.0, 3.0),
            p(3.0, 4.0),
        ];
        let once = optimize(&path);
        assert_eq!(optimize(&once), once);
    }

    #[test]
    fn test_optimize_short_paths_untouched() {
        let path = vec![p(0.0, 0.0), p(5.0, 5.0)];
        assert_eq!(optimize(&path), path);
        assert_eq!(optimize(&[]), Vec::<Vec2>::new());
    }

    #[test]
    fn test_direct_line_inside_corridor() {
        let corridors = vec![Corridor::new("c", 0.0, 0.0, 100.0, 20.0)];
        assert!(can_draw_direct_line(
            p(5.0, 10.0),
            p(95.0, 10.0),
            8.0,
            &corridors,
            &[]
        ));
        // Segment leaving the corridor fails
        assert!(!can_draw_direct_line(
            p(5.0, 10.0),
            p(95.0, 30.0),
            8.0,
            &corridors,
            &[]
        ));
    }

    #[test]
    fn test_direct_line_blocked_by_wall() {
        let corridors = vec![Corridor::new("c", 0.0, 0.0, 100.0, 20.0)];
        let walls = vec![crate::map::Wall::new("w", 45.0, 0.0, 10.0, 20.0)];
        assert!(!can_draw_direct_line(
            p(5.0, 10.0),
            p(95.0, 10.0),
            8.0,
            &corridors,
            &walls
        ));
    }

    #[test]
    fn test_direct_line_respects_footprint_corners() {
        let corridors = vec![Corridor::new("c", 0.0, 0.0, 100.0, 20.0)];
        // Footprint 18 barely fits at center height, fails near the edge
        assert!(can_draw_direct_line(
            p(10.0, 10.0),
            p(90.0, 10.0),
            18.0,
            &corridors,
            &[]
        ));
        assert!(!can_draw_direct_line(
            p(10.0, 6.0),
            p(90.0, 6.0),
            18.0,
            &corridors,
            &[]
        ));
    }

    #[test]
    fn test_smooth_shortcuts_staircase() {
        let corridors = vec![Corridor::new("c", 0.0, 0.0, 100.0, 100.0)];
        // A grid staircase from corner to corner in open space smooths to
        // its endpoints.
        let path = vec![
            p(10.0, 10.0),
            p(20.0, 10.0),
            p(30.0, 20.0),
            p(40.0, 30.0),
            p(50.0, 30.0),
            p(60.0, 40.0),
        ];
        let smoothed = smooth(&path, 8.0, &corridors, &[]);
        assert_eq!(smoothed, vec![p(10.0, 10.0), p(60.0, 40.0)]);
    }

    #[test]
    fn test_smooth_never_adds_points() {
        let corridors = vec![
            Corridor::new("a", 0.0, 0.0, 100.0, 20.0),
            Corridor::new("b", 80.0, 0.0, 20.0, 100.0),
        ];
        let path = vec![
            p(10.0, 10.0),
            p(40.0, 10.0),
            p(70.0, 10.0),
            p(90.0, 10.0),
            p(90.0, 50.0),
            p(90.0, 90.0),
        ];
        let smoothed = smooth(&path, 8.0, &corridors, &[]);
        assert!(smoothed.len() <= path.len());
        assert_eq!(smoothed.first(), path.first());
        assert_eq!(smoothed.last(), path.last());
    }

    #[test]
    fn test_smooth_around_wall_keeps_detour() {
        let corridors = vec![Corridor::new("c", 0.0, 0.0, 100.0, 100.0)];
        let walls = vec![crate::map::Wall::new("w", 45.0, 0.0, 10.0, 60.0)];
        // Detour below the wall: the straight from-to line is blocked, so
        // the midpoint survives smoothing.
        let path = vec![p(10.0, 10.0), p(50.0, 80.0), p(90.0, 10.0)];
        let smoothed = smooth(&path, 8.0, &corridors, &walls);
        assert_eq!(smoothed.len(), 3);
    }
}
