//! # Net Unfolding
//!
//! Computes where each lateral face lies once the pyramid is opened into
//! its net. The base edge stays in place and the tip is pushed outward
//! from the edge midpoint by the base circumradius. That distance is not
//! the true slant height, so the flat triangles are a visual approximation
//! of the net rather than a dimensionally exact one.

use glam::DVec3;

/// Flattens lateral faces into the base plane.
///
/// # Example
///
/// ```rust
/// use limas_geometry::NetUnfolder;
/// use glam::DVec3;
///
/// let unfolder = NetUnfolder::new(DVec3::ZERO, 1.0);
/// let v1 = DVec3::new(-1.0, 0.0, -1.0);
/// let v2 = DVec3::new(1.0, 0.0, -1.0);
/// let [_, _, tip] = unfolder.open_form(v1, v2);
/// assert!((tip - DVec3::new(0.0, 0.0, -2.0)).length() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetUnfolder {
    center: DVec3,
    radius: f64,
}

impl NetUnfolder {
    /// Creates an unfolder around the base center with the tip distance.
    pub fn new(center: DVec3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns the base center.
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Returns the distance the tip extends past the edge midpoint.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the flattened tip for base edge `(v1, v2)`.
    pub fn open_tip(&self, v1: DVec3, v2: DVec3) -> DVec3 {
        let mid = (v1 + v2) * 0.5;
        let dir = (mid - self.center).normalize_or_zero();
        let tip = mid + dir * self.radius;
        DVec3::new(tip.x, 0.0, tip.z)
    }

    /// Returns the open-form corners `(v1, v2, tip)`, all at y = 0.
    pub fn open_form(&self, v1: DVec3, v2: DVec3) -> [DVec3; 3] {
        [
            DVec3::new(v1.x, 0.0, v1.z),
            DVec3::new(v2.x, 0.0, v2.z),
            self.open_tip(v1, v2),
        ]
    }

    /// Returns the closed-form corners `(v1, v2, apex)`.
    pub fn closed_form(&self, v1: DVec3, v2: DVec3, apex: DVec3) -> [DVec3; 3] {
        [v1, v2, apex]
    }
}
