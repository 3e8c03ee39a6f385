//! ASCII rendering of the walkability grid.
//!
//! Renders the rasterized grid as terminal art for quick inspection:
//! `.` walkable, `#` blocked, `o` route points, `S`/`E` endpoints.

use gridroute_core::grid::Grid;
use gridroute_core::route::Route;

/// Render the walkability raster, one character per cell.
#[must_use]
pub fn render_grid(grid: &Grid) -> String {
    render(grid, None)
}

/// Render the walkability raster with a route overlaid.
#[must_use]
pub fn render_grid_with_route(grid: &Grid, route: &Route) -> String {
    render(grid, Some(route))
}

fn render(grid: &Grid, route: Option<&Route>) -> String {
    let cols = grid.cols() as usize;
    let rows = grid.rows() as usize;
    let mut cells = vec![vec![' '; cols]; rows];

    for gy in 0..grid.rows() {
        for gx in 0..grid.cols() {
            cells[gy as usize][gx as usize] = if grid.is_walkable(i64::from(gx), i64::from(gy)) {
                '.'
            } else {
                '#'
            };
        }
    }

    if let Some(route) = route {
        let last = route.len().saturating_sub(1);
        for (i, point) in route.points.iter().enumerate() {
            if let Some((gx, gy)) = grid.world_to_grid(*point) {
                let glyph = if i == 0 {
                    'S'
                } else if i == last {
                    'E'
                } else {
                    'o'
                };
                cells[gy as usize][gx as usize] = glyph;
            }
        }
    }

    let mut out = String::with_capacity(rows * (cols + 1));
    for row in cells {
        out.extend(row);
        out.push('\n');
    }
    out
}
