//! # Polygon Base
//!
//! Generates the vertices of the regular polygon under the pyramid.

use crate::error::{GeometryError, GeometryResult};
use glam::DVec3;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Creates the vertices of a regular polygon in the y = 0 plane.
///
/// Vertex `i` sits at angle `2π·i/n − π/2` on a circle of `radius` around
/// the origin, with `x = r·cos` and `z = r·sin`. Vertex 0 therefore starts
/// at the top of the circle in the XZ projection and the angle increases
/// monotonically, giving a consistent winding.
///
/// # Arguments
///
/// * `sides` - Number of vertices (at least 3)
/// * `radius` - Circumradius (positive)
///
/// # Example
///
/// ```rust
/// use limas_geometry::primitives::regular_polygon;
///
/// let square = regular_polygon(4, 1.5).unwrap();
/// assert_eq!(square.len(), 4);
/// assert!((square[0].z + 1.5).abs() < 1e-12);
/// ```
pub fn regular_polygon(sides: u32, radius: f64) -> GeometryResult<Vec<DVec3>> {
    if sides < 3 {
        return Err(GeometryError::degenerate(format!(
            "Polygon needs at least 3 sides, got {sides}"
        )));
    }

    if !(radius.is_finite() && radius > 0.0) {
        return Err(GeometryError::degenerate(format!(
            "Polygon radius must be positive: {radius}"
        )));
    }

    let vertices = (0..sides)
        .map(|i| {
            let angle = TAU * f64::from(i) / f64::from(sides) - FRAC_PI_2;
            DVec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
        })
        .collect();

    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_polygon_vertex_count() {
        for n in 3..=6 {
            let vertices = regular_polygon(n, 1.5).unwrap();
            assert_eq!(vertices.len(), n as usize);
        }
    }

    #[test]
    fn test_polygon_vertices_on_circle() {
        for n in 3..=6 {
            for v in regular_polygon(n, 1.5).unwrap() {
                assert_abs_diff_eq!(v.length(), 1.5, epsilon = 1e-12);
                assert_eq!(v.y, 0.0);
            }
        }
    }

    #[test]
    fn test_polygon_even_angular_spacing() {
        for n in 3..=6 {
            let vertices = regular_polygon(n, 2.0).unwrap();
            let step = TAU / f64::from(n);
            for i in 0..vertices.len() {
                let a = vertices[i];
                let b = vertices[(i + 1) % vertices.len()];
                let angle = (a.dot(b) / (a.length() * b.length())).clamp(-1.0, 1.0).acos();
                assert_abs_diff_eq!(angle, step, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_polygon_starts_at_top() {
        let vertices = regular_polygon(5, 1.0).unwrap();
        assert_abs_diff_eq!(vertices[0].x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(vertices[0].z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_polygon_consistent_winding() {
        // Signed area in the XZ plane keeps the same sign for every edge
        let vertices = regular_polygon(6, 1.0).unwrap();
        for i in 0..vertices.len() {
            let a = vertices[i];
            let b = vertices[(i + 1) % vertices.len()];
            assert!(a.x * b.z - a.z * b.x > 0.0);
        }
    }

    #[test]
    fn test_polygon_rejects_too_few_sides() {
        assert!(matches!(
            regular_polygon(2, 1.0),
            Err(GeometryError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn test_polygon_rejects_bad_radius() {
        assert!(regular_polygon(4, 0.0).is_err());
        assert!(regular_polygon(4, f64::NAN).is_err());
    }
}
