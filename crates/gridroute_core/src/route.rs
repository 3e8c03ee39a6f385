//! The routing result type.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// An ordered sequence of world points for an agent to follow.
///
/// `teleport_segments` holds the indices `i` where the segment from
/// `points[i]` to `points[i + 1]` is a portal jump rather than a walkable
/// line; a renderer must not draw a connecting line there. Routes are
/// immutable once returned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Route {
    /// Waypoints in traversal order.
    pub points: Vec<Vec2>,
    /// Indices of segments that are portal jumps.
    pub teleport_segments: Vec<usize>,
}

impl Route {
    /// A route with no teleport jumps.
    #[must_use]
    pub fn direct(points: Vec<Vec2>) -> Self {
        Self {
            points,
            teleport_segments: Vec::new(),
        }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the route has no points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the segment starting at `index` is a portal jump.
    #[must_use]
    pub fn is_teleport_segment(&self, index: usize) -> bool {
        self.teleport_segments.contains(&index)
    }

    /// Total walked distance, excluding teleport jumps.
    #[must_use]
    pub fn walk_length(&self) -> f64 {
        self.points
            .windows(2)
            .enumerate()
            .filter(|(i, _)| !self.is_teleport_segment(*i))
            .map(|(_, pair)| pair[0].distance(pair[1]))
            .sum()
    }
}
