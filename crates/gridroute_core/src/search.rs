//! Grid-space A* search.
//!
//! 8-connected search over the walkability raster with a Euclidean
//! heuristic on cell indices. Diagonal steps cost sqrt(2) and are rejected
//! when either bridging orthogonal cell is blocked, so the path never cuts
//! through a corner formed by two blocking cells.
//!
//! Selection order is exact: smallest `f`, then smallest `h`, then earliest
//! insertion. The insertion counter reproduces the FIFO behavior of a
//! linear minimum scan, keeping tie-breaking independent of heap internals
//! and the output bit-identical across calls.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid::Grid;
use crate::math::Vec2;

/// Direction offsets for 8-directional movement.
const DIRECTIONS: [(i64, i64); 8] = [
    (-1, 0), // West
    (1, 0),  // East
    (0, -1), // North
    (0, 1),  // South
    (-1, -1), // Northwest
    (1, -1),  // Northeast
    (-1, 1),  // Southwest
    (1, 1),   // Southeast
];

/// Cost multiplier applied when a step moves toward the goal on either
/// axis. Biases the search toward direct-looking paths among equal-cost
/// options without meaningfully changing optimality.
const GOAL_BIAS: f64 = 0.99;

/// A node in the A* open set priority queue.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OpenEntry {
    /// f = g + h (negated ordering for min-heap behavior).
    f: f64,
    /// Heuristic distance to the goal, the first tie-breaker.
    h: f64,
    /// Insertion sequence number, the final tie-breaker.
    seq: u64,
    /// g cost at the time of insertion; stale entries are skipped on pop.
    g: f64,
    /// Flat cell index.
    index: usize,
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so comparisons are reversed for
        // min-heap behavior. Never NaN: costs are sums of finite constants.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-cell search scratch, reset for every call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum CellStatus {
    #[default]
    Unvisited,
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, Default)]
struct CellState {
    status: CellStatus,
    g: f64,
    parent: Option<u32>,
}

/// Euclidean heuristic on grid indices.
#[inline]
fn heuristic(x1: u32, y1: u32, x2: u32, y2: u32) -> f64 {
    let dx = f64::from(x1.abs_diff(x2));
    let dy = f64::from(y1.abs_diff(y2));
    dx.hypot(dy)
}

/// Check if a diagonal move is valid (no corner cutting through blocked
/// cells): both bridging orthogonal cells must be walkable.
#[inline]
fn is_diagonal_valid(grid: &Grid, x: i64, y: i64, dx: i64, dy: i64) -> bool {
    if dx != 0 && dy != 0 {
        grid.is_walkable(x + dx, y) && grid.is_walkable(x, y + dy)
    } else {
        true
    }
}

/// Find the cheapest cell path between two walkable cells.
///
/// Returns the sequence of world-space cell centers from start to goal, or
/// `None` when the open set exhausts without reaching the goal. Search
/// state is a per-call arena keyed by cell index; nothing leaks between
/// calls.
#[must_use]
pub fn shortest_cell_path(
    grid: &Grid,
    start: (u32, u32),
    goal: (u32, u32),
) -> Option<Vec<Vec2>> {
    let (start_x, start_y) = start;
    let (goal_x, goal_y) = goal;

    let mut cells: Vec<CellState> = vec![CellState::default(); grid.cell_count()];
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;

    let start_index = grid.index(start_x, start_y);
    let start_h = heuristic(start_x, start_y, goal_x, goal_y);
    cells[start_index] = CellState {
        status: CellStatus::Open,
        g: 0.0,
        parent: None,
    };
    open.push(OpenEntry {
        f: start_h,
        h: start_h,
        seq,
        g: 0.0,
        index: start_index,
    });

    let cols = i64::from(grid.cols());
    let goal_index = grid.index(goal_x, goal_y);

    while let Some(current) = open.pop() {
        let state = cells[current.index];
        if state.status == CellStatus::Closed || current.g > state.g {
            // Superseded by a cheaper re-insertion.
            continue;
        }
        cells[current.index].status = CellStatus::Closed;

        if current.index == goal_index {
            return Some(reconstruct(grid, &cells, goal_index));
        }

        #[allow(clippy::cast_possible_truncation)]
        let cx = (current.index as i64) % cols;
        #[allow(clippy::cast_possible_truncation)]
        let cy = (current.index as i64) / cols;

        for &(dx, dy) in &DIRECTIONS {
            let nx = cx + dx;
            let ny = cy + dy;
            if !grid.is_walkable(nx, ny) {
                continue;
            }
            if !is_diagonal_valid(grid, cx, cy, dx, dy) {
                continue;
            }

            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            let neighbor_index = grid.index(nx as u32, ny as u32);
            if cells[neighbor_index].status == CellStatus::Closed {
                continue;
            }

            let mut move_cost = if dx != 0 && dy != 0 {
                std::f64::consts::SQRT_2
            } else {
                1.0
            };

            // Bias steps whose direction matches the goal direction on
            // either axis.
            let to_goal_x = i64::from(goal_x) - cx;
            let to_goal_y = i64::from(goal_y) - cy;
            if (to_goal_x > 0 && dx > 0)
                || (to_goal_x < 0 && dx < 0)
                || (to_goal_y > 0 && dy > 0)
                || (to_goal_y < 0 && dy < 0)
            {
                move_cost *= GOAL_BIAS;
            }

            let tentative_g = current.g + move_cost;
            if cells[neighbor_index].status == CellStatus::Open
                && tentative_g >= cells[neighbor_index].g
            {
                continue;
            }

            #[allow(clippy::cast_possible_truncation)]
            let parent = Some(current.index as u32);
            cells[neighbor_index] = CellState {
                status: CellStatus::Open,
                g: tentative_g,
                parent,
            };

            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            let h = heuristic(nx as u32, ny as u32, goal_x, goal_y);
            seq += 1;
            open.push(OpenEntry {
                f: tentative_g + h,
                h,
                seq,
                g: tentative_g,
                index: neighbor_index,
            });
        }
    }

    None
}

/// Walk parent pointers from the goal back to the start and reverse.
fn reconstruct(grid: &Grid, cells: &[CellState], goal_index: usize) -> Vec<Vec2> {
    let cols = grid.cols();
    let mut path = Vec::new();
    let mut current = goal_index;

    loop {
        #[allow(clippy::cast_possible_truncation)]
        let gx = (current as u32) % cols;
        #[allow(clippy::cast_possible_truncation)]
        let gy = (current as u32) / cols;
        path.push(grid.cell_center(gx, gy));

        match cells[current].parent {
            Some(parent) => current = parent as usize,
            None => break,
        }
    }

    path.reverse();
    path
}
