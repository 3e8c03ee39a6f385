//! Route determinism utilities.
//!
//! The engine promises bit-identical routes for identical inputs. These
//! helpers hash routes (via the exact f64 bit patterns of every point) and
//! compare repeated runs.
//!
//! Sources of non-determinism the engine guards against:
//!
//! - **Hash iteration order**: open/closed bookkeeping is index-based;
//!   tie-breaking is explicit (f, then h, then insertion order).
//! - **Ambient state**: a `Pathfinder` is a pure function of its
//!   construction arguments; repeated queries share nothing mutable.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use gridroute_core::route::Route;

/// Result of a repeated-run determinism check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDeterminism {
    /// Whether all runs produced identical hashes.
    pub is_deterministic: bool,
    /// Hash from each run. `None` marks a run that returned no route.
    pub hashes: Vec<Option<u64>>,
}

impl RouteDeterminism {
    /// Assert that all runs matched, with a detailed error message.
    ///
    /// # Panics
    ///
    /// Panics if any run produced a different route.
    pub fn assert_deterministic(&self) {
        assert!(
            self.is_deterministic,
            "Routing is non-deterministic!\nRuns: {}\nHashes: {:?}",
            self.hashes.len(),
            self.hashes
        );
    }
}

/// Hash a route through the exact bit patterns of its points.
#[must_use]
pub fn route_hash(route: &Route) -> u64 {
    let mut hasher = DefaultHasher::new();
    for point in &route.points {
        point.x.to_bits().hash(&mut hasher);
        point.y.to_bits().hash(&mut hasher);
    }
    route.teleport_segments.hash(&mut hasher);
    hasher.finish()
}

/// Run a routing query multiple times and verify the results are
/// bit-identical.
pub fn verify_route_determinism<F>(runs: usize, query: F) -> RouteDeterminism
where
    F: Fn() -> Option<Route>,
{
    let hashes: Vec<Option<u64>> = (0..runs).map(|_| query().as_ref().map(route_hash)).collect();
    let is_deterministic = hashes.windows(2).all(|w| w[0] == w[1]);
    RouteDeterminism {
        is_deterministic,
        hashes,
    }
}

/// Proptest strategies for routing inputs.
pub mod strategies {
    use gridroute_core::math::Vec2;
    use proptest::prelude::*;

    /// World coordinates in a typical editor range.
    pub fn arb_position() -> impl Strategy<Value = Vec2> {
        (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Vec2::new(x, y))
    }

    /// Footprint sizes from point-like to oversized.
    pub fn arb_footprint() -> impl Strategy<Value = f64> {
        0.0f64..40.0
    }

    /// Grid sizes across the adaptive-policy range.
    pub fn arb_grid_size() -> impl Strategy<Value = f64> {
        prop_oneof![Just(5.0), Just(7.0), Just(8.0), Just(10.0), Just(20.0)]
    }

    /// Corridor rotations the editor allows.
    pub fn arb_rotation() -> impl Strategy<Value = f64> {
        -60.0f64..60.0
    }
}
