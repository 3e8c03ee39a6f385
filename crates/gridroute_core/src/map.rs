//! Map object data types.
//!
//! Pure data structures describing the world the engine routes through.
//! All types are serde-derived so the embedding editor or runtime can
//! snapshot its object store into them (RON, JSON, ...).
//!
//! **Note:** This module contains no IO - file loading lives in the tools
//! crate.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// A rectangle in world units, optionally rotated about its center.
///
/// `rotation` is in degrees and defaults to 0 when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge (before rotation).
    pub x: f64,
    /// Top edge (before rotation).
    pub y: f64,
    /// Width in world units.
    pub width: f64,
    /// Height in world units.
    pub height: f64,
    /// Rotation about the center, in degrees.
    #[serde(default)]
    pub rotation: f64,
}

impl Rect {
    /// Create an axis-aligned rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
        }
    }

    /// Set the rotation in degrees.
    #[must_use]
    pub const fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Center of the rectangle (the rotation pivot).
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The four corners in local (unrotated) space, clockwise from top-left.
    #[must_use]
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
            Vec2::new(self.x, self.y + self.height),
        ]
    }

    /// Whether the rectangle encloses any area at all.
    #[must_use]
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// A walkable rectangular region. May be rotated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corridor {
    /// Stable object identifier assigned by the editor.
    pub id: String,
    /// Corridor geometry.
    pub rect: Rect,
}

impl Corridor {
    /// Create an axis-aligned corridor.
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            rect: Rect::new(x, y, width, height),
        }
    }

    /// Set the corridor rotation in degrees.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rect.rotation = degrees;
        self
    }
}

/// A blocking rectangular region. Walls never rotate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Stable object identifier assigned by the editor.
    pub id: String,
    /// Wall geometry. `rotation` is ignored for walls.
    pub rect: Rect,
}

impl Wall {
    /// Create a wall.
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            rect: Rect::new(x, y, width, height),
        }
    }
}

/// What role a named point plays during routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WaypointKind {
    /// An ordinary named point, usable as a route endpoint.
    #[default]
    Waypoint,
    /// A teleport endpoint. Portals sharing a group id are linked.
    Portal,
}

/// A named point in world space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Stable object identifier assigned by the editor.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// World position.
    pub position: Vec2,
    /// Waypoint role.
    #[serde(default)]
    pub kind: WaypointKind,
    /// Link id shared by paired portals. `None` for plain waypoints.
    #[serde(default)]
    pub portal_group: Option<String>,
}

impl Waypoint {
    /// Create a plain waypoint.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position: Vec2::new(x, y),
            kind: WaypointKind::Waypoint,
            portal_group: None,
        }
    }

    /// Create a portal waypoint belonging to a link group.
    #[must_use]
    pub fn portal(
        id: impl Into<String>,
        label: impl Into<String>,
        x: f64,
        y: f64,
        group: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position: Vec2::new(x, y),
            kind: WaypointKind::Portal,
            portal_group: Some(group.into()),
        }
    }

    /// Whether this waypoint is a linked teleport endpoint.
    #[must_use]
    pub fn is_portal(&self) -> bool {
        self.kind == WaypointKind::Portal && self.portal_group.is_some()
    }
}
