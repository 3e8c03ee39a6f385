//! Scenario loading and configuration.
//!
//! Scenarios define a complete routing setup for offline testing: the map
//! geometry, the agent parameters and the route queries to run against
//! them. Stored as RON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gridroute_core::map::{Corridor, Wall, Waypoint};
use gridroute_core::math::Vec2;

/// Error type for scenario operations.
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// File not found.
    #[error("Scenario file not found: {0}")]
    FileNotFound(String),
    /// Failed to read file.
    #[error("Failed to read scenario file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse RON.
    #[error("Failed to parse scenario: {0}")]
    ParseError(#[from] ron::error::SpannedError),
}

/// A routing query to run against the scenario map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteQuery {
    /// Start position.
    pub from: Vec2,
    /// Destination position.
    pub to: Vec2,
}

impl RouteQuery {
    /// Create a query between two points.
    #[must_use]
    pub fn new(from_x: f64, from_y: f64, to_x: f64, to_y: f64) -> Self {
        Self {
            from: Vec2::new(from_x, from_y),
            to: Vec2::new(to_x, to_y),
        }
    }
}

/// A complete scenario configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Grid cell size in world units. The runner may shrink it per
    /// [`crate::grid_size::adaptive_grid_size`].
    pub grid_size: f64,
    /// Agent footprint edge length in world units.
    pub footprint_size: f64,
    /// Walkable regions.
    pub corridors: Vec<Corridor>,
    /// Blocking regions.
    #[serde(default)]
    pub walls: Vec<Wall>,
    /// Named points, including portals.
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
    /// Queries to route.
    #[serde(default)]
    pub queries: Vec<RouteQuery>,
}

impl Scenario {
    /// Load a scenario from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScenarioError::FileNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        let scenario: Scenario = ron::from_str(&contents)?;
        Ok(scenario)
    }

    /// Load from a RON string (useful for embedded scenarios).
    pub fn from_ron_str(ron: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = ron::from_str(ron)?;
        Ok(scenario)
    }

    /// The built-in demo map: a main corridor with a side branch, a wall
    /// partially covering the main run, and a start/end waypoint pair.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            name: "Demo Map".to_string(),
            description: "Main corridor with side branch and partial wall".to_string(),
            grid_size: 5.0,
            footprint_size: 5.0,
            corridors: vec![
                Corridor::new("main_corridor", 200.0, 100.0, 400.0, 20.0),
                Corridor::new("side_corridor", 200.0, 100.0, 20.0, 200.0),
            ],
            walls: vec![Wall::new("wall1", 300.0, 80.0, 100.0, 20.0)],
            waypoints: vec![
                Waypoint::new("start", "Start", 250.0, 110.0),
                Waypoint::new("end", "End", 550.0, 110.0),
            ],
            queries: vec![RouteQuery::new(250.0, 110.0, 550.0, 110.0)],
        }
    }

    /// Largest corridor rotation magnitude, in degrees.
    #[must_use]
    pub fn max_rotation(&self) -> f64 {
        self.corridors
            .iter()
            .map(|c| c.rect.rotation.abs())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_scenario() {
        let scenario = Scenario::sample();
        assert_eq!(scenario.corridors.len(), 2);
        assert_eq!(scenario.queries.len(), 1);
        assert_eq!(scenario.max_rotation(), 0.0);
    }

    #[test]
    fn test_parse_from_ron() {
        let ron = r#"
            Scenario(
                name: "Test",
                description: "Minimal parse check",
                grid_size: 5.0,
                footprint_size: 4.0,
                corridors: [
                    Corridor(
                        id: "c1",
                        rect: Rect(x: 0.0, y: 0.0, width: 100.0, height: 20.0),
                    ),
                ],
            )
        "#;
        let scenario = Scenario::from_ron_str(ron).unwrap();
        assert_eq!(scenario.name, "Test");
        assert_eq!(scenario.corridors[0].rect.rotation, 0.0);
        assert!(scenario.walls.is_empty());
        assert!(scenario.queries.is_empty());
    }

    #[test]
    fn test_roundtrip_through_ron() {
        let scenario = Scenario::sample();
        let text = ron::to_string(&scenario).unwrap();
        let parsed = Scenario::from_ron_str(&text).unwrap();
        assert_eq!(parsed.corridors.len(), scenario.corridors.len());
        assert_eq!(parsed.waypoints.len(), scenario.waypoints.len());
    }

    #[test]
    fn test_max_rotation_over_rotated_corridors() {
        let mut scenario = Scenario::sample();
        scenario.corridors.push(
            Corridor::new("ramp", 0.0, 0.0, 100.0, 20.0).with_rotation(-35.0),
        );
        assert_eq!(scenario.max_rotation(), 35.0);
    }
}
