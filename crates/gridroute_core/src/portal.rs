//! Teleport-graph fallback search.
//!
//! When no direct route exists, portals (waypoints sharing a portal group
//! id) can bridge disconnected corridor islands. The search is a
//! breadth-first fan-out over `(position, accumulated path, visited
//! portals)` states: from each position it first attempts a direct
//! sub-route to the destination, then enqueues every reachable portal's
//! partners as new positions.
//!
//! The search is best-effort, not shortest-route: reachable portals are
//! tried nearest-first as an ordering heuristic, cycles are prevented only
//! by the per-branch visited-portal set, and the first complete route wins.

use std::collections::{HashSet, VecDeque};

use crate::map::Waypoint;
use crate::math::Vec2;
use crate::pathfinder::Pathfinder;
use crate::route::Route;

struct SearchState {
    pos: Vec2,
    path: Vec<Vec2>,
    visited_portals: HashSet<String>,
    teleport_segments: Vec<usize>,
}

/// Exact-position key for arrival-state dedupe.
fn state_key(pos: Vec2) -> (u64, u64) {
    (pos.x.to_bits(), pos.y.to_bits())
}

/// Search for a route from `from` to `to` that may traverse portals.
///
/// Returns `None` when the queue exhausts without reaching the
/// destination. Each teleport jump is recorded as a segment index in the
/// returned route.
#[must_use]
pub fn find_portal_route(
    pathfinder: &Pathfinder,
    from: Vec2,
    to: Vec2,
    waypoints: &[Waypoint],
) -> Option<Route> {
    let mut queue = VecDeque::new();
    let mut seen_arrivals: HashSet<(u64, u64)> = HashSet::new();

    queue.push_back(SearchState {
        pos: from,
        path: Vec::new(),
        visited_portals: HashSet::new(),
        teleport_segments: Vec::new(),
    });

    while let Some(state) = queue.pop_front() {
        if let Some(direct) = pathfinder.find_path(state.pos, to) {
            let mut points = state.path;
            points.extend(direct.points);
            return Some(Route {
                points,
                teleport_segments: state.teleport_segments,
            });
        }

        // Portals reachable from this position, nearest first.
        let mut reachable: Vec<(&Waypoint, Vec<Vec2>)> = waypoints
            .iter()
            .filter(|w| w.is_portal() && !state.visited_portals.contains(&w.id))
            .filter_map(|w| {
                pathfinder
                    .find_path(state.pos, w.position)
                    .map(|route| (w, route.points))
            })
            .collect();
        reachable.sort_by(|(a, _), (b, _)| {
            state
                .pos
                .distance_squared(a.position)
                .total_cmp(&state.pos.distance_squared(b.position))
        });

        for (entry, path_to_entry) in &reachable {
            let partners = waypoints.iter().filter(|w| {
                w.is_portal()
                    && w.portal_group == entry.portal_group
                    && w.id != entry.id
                    && !state.visited_portals.contains(&w.id)
            });

            for exit in partners {
                let mut visited = state.visited_portals.clone();
                visited.insert(entry.id.clone());
                visited.insert(exit.id.clone());

                let mut path = state.path.clone();
                path.extend(path_to_entry.iter().copied());
                path.push(exit.position);

                let mut teleports = state.teleport_segments.clone();
                teleports.push(path.len() - 2);

                let key = state_key(exit.position);
                if seen_arrivals.insert(key) {
                    queue.push_back(SearchState {
                        pos: exit.position,
                        path,
                        visited_portals: visited,
                        teleport_segments: teleports,
                    });
                }
            }
        }
    }

    None
}
