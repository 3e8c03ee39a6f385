//! Walkability rasterization.
//!
//! The grid is rebuilt from scratch for every engine construction and is
//! immutable afterwards: a cell's walkability is sampled once, at its world
//! center, through [`geometry::can_place_at`]. Search scratch state lives
//! in the searcher, never here, so a built grid can be shared or cached
//! freely.

use crate::geometry::{self, bounds_padding, can_place_at};
use crate::map::{Corridor, Wall};
use crate::math::Vec2;

/// An immutable raster of walkability flags over the padded world bounds.
#[derive(Debug, Clone)]
pub struct Grid {
    cols: u32,
    rows: u32,
    cell_size: f64,
    min_x: f64,
    min_y: f64,
    walkable: Vec<bool>,
}

impl Grid {
    /// Rasterize the world into a walkability grid.
    ///
    /// Cell walkability is the placement test for an agent footprint
    /// centered on the cell's world center. Returns `None` when the map has
    /// no geometry to derive bounds from.
    #[must_use]
    pub fn build(
        corridors: &[Corridor],
        walls: &[Wall],
        cell_size: f64,
        footprint: f64,
    ) -> Option<Self> {
        let bounds = geometry::world_bounds(corridors, walls, bounds_padding(footprint))?;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cols = (bounds.width() / cell_size).ceil() as u32;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rows = (bounds.height() / cell_size).ceil() as u32;

        let mut walkable = Vec::with_capacity((cols as usize) * (rows as usize));
        for gy in 0..rows {
            for gx in 0..cols {
                let center_x = bounds.min_x + f64::from(gx) * cell_size + cell_size / 2.0;
                let center_y = bounds.min_y + f64::from(gy) * cell_size + cell_size / 2.0;
                walkable.push(can_place_at(center_x, center_y, footprint, corridors, walls));
            }
        }

        let grid = Self {
            cols,
            rows,
            cell_size,
            min_x: bounds.min_x,
            min_y: bounds.min_y,
            walkable,
        };
        tracing::debug!(
            cols,
            rows,
            walkable = grid.walkable_count(),
            total = grid.cell_count(),
            "Rasterized walkability grid"
        );
        Some(grid)
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Cell edge length in world units.
    #[must_use]
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.walkable.len()
    }

    /// Number of walkable cells.
    #[must_use]
    pub fn walkable_count(&self) -> usize {
        self.walkable.iter().filter(|&&w| w).count()
    }

    /// Convert (x, y) cell coordinates to a flat index.
    #[inline]
    pub(crate) fn index(&self, gx: u32, gy: u32) -> usize {
        (gy as usize) * (self.cols as usize) + (gx as usize)
    }

    /// Check if cell coordinates are within grid bounds.
    #[must_use]
    pub fn in_bounds(&self, gx: i64, gy: i64) -> bool {
        gx >= 0 && gy >= 0 && gx < i64::from(self.cols) && gy < i64::from(self.rows)
    }

    /// Check if a cell exists and is walkable.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn is_walkable(&self, gx: i64, gy: i64) -> bool {
        if self.in_bounds(gx, gy) {
            self.walkable[self.index(gx as u32, gy as u32)]
        } else {
            false
        }
    }

    /// World-space center of a cell.
    #[must_use]
    pub fn cell_center(&self, gx: u32, gy: u32) -> Vec2 {
        Vec2::new(
            self.min_x + f64::from(gx) * self.cell_size + self.cell_size / 2.0,
            self.min_y + f64::from(gy) * self.cell_size + self.cell_size / 2.0,
        )
    }

    /// Map a world position to the cell containing it.
    ///
    /// The exact inverse of [`Self::cell_center`]: a cell's center always
    /// maps back to that cell. Returns `None` outside the grid.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn world_to_grid(&self, pos: Vec2) -> Option<(u32, u32)> {
        let gx = ((pos.x - self.min_x) / self.cell_size).floor() as i64;
        let gy = ((pos.y - self.min_y) / self.cell_size).floor() as i64;

        if self.in_bounds(gx, gy) {
            Some((gx as u32, gy as u32))
        } else {
            None
        }
    }
}
