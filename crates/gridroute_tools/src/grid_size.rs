//! Caller-side grid sizing policy.
//!
//! Rotated corridors lose accuracy under axis-aligned rasterization, so
//! callers shrink the cell size as the steepest corridor rotation grows.
//! This is policy, not an engine requirement: the engine behaves correctly
//! for any positive grid size.

/// Pick a grid size for a map given its steepest corridor rotation.
///
/// Returns the base size for near-axis-aligned maps and progressively
/// finer cells past 15, 30 and 40 degrees.
#[must_use]
pub fn adaptive_grid_size(base: f64, max_rotation_degrees: f64) -> f64 {
    let rotation = max_rotation_degrees.abs();
    if rotation > 40.0 {
        base.min(7.0)
    } else if rotation > 30.0 {
        base.min(8.0)
    } else if rotation > 15.0 {
        base.min(10.0)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_aligned_keeps_base() {
        assert_eq!(adaptive_grid_size(20.0, 0.0), 20.0);
        assert_eq!(adaptive_grid_size(20.0, 15.0), 20.0);
    }

    #[test]
    fn test_steeper_rotation_means_finer_grid() {
        assert_eq!(adaptive_grid_size(20.0, 16.0), 10.0);
        assert_eq!(adaptive_grid_size(20.0, 31.0), 8.0);
        assert_eq!(adaptive_grid_size(20.0, 45.0), 7.0);
        assert_eq!(adaptive_grid_size(20.0, -45.0), 7.0);
    }

    #[test]
    fn test_never_coarsens_a_fine_base() {
        assert_eq!(adaptive_grid_size(5.0, 45.0), 5.0);
        assert_eq!(adaptive_grid_size(5.0, 20.0), 5.0);
    }
}
