//! # Camera
//!
//! Perspective camera mirrored from the front end's orbit controls. Used to
//! project label anchors and to cast picking rays.

use config::constants::{
    approx_zero, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_POSITION, CAMERA_TARGET,
};
use glam::{DMat4, DVec2, DVec3};
use serde::Serialize;

/// A ray with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ray {
    /// Starting point.
    pub origin: DVec3,
    /// Unit direction.
    pub direction: DVec3,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

/// Perspective camera looking at an orbit target.
///
/// # Example
///
/// ```rust
/// use limas_view::Camera;
/// use glam::DVec3;
///
/// let camera = Camera::default();
/// let ndc = camera.project(DVec3::ZERO);
/// assert!(ndc.x.abs() < 1e-9 && ndc.y.abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    /// Eye position.
    pub position: DVec3,
    /// Point the camera looks at.
    pub target: DVec3,
    /// World up direction.
    pub up: DVec3,
    /// Vertical field of view in radians.
    pub fov_y_radians: f64,
    /// Width divided by height.
    pub aspect_ratio: f64,
    /// Near clipping plane distance.
    pub near: f64,
    /// Far clipping plane distance.
    pub far: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: DVec3::from_array(CAMERA_POSITION),
            target: DVec3::from_array(CAMERA_TARGET),
            up: DVec3::Y,
            fov_y_radians: CAMERA_FOV_DEGREES.to_radians(),
            aspect_ratio: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// World → view transform.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.target, self.view_up())
    }

    /// Up direction used for the view basis.
    ///
    /// Falls back to `+Z` when the view direction is parallel to `up`, as
    /// when looking straight down onto the base plane.
    pub fn view_up(&self) -> DVec3 {
        let direction = (self.target - self.position).normalize_or_zero();
        if approx_zero(direction.cross(self.up.normalize_or_zero()).length()) {
            DVec3::Z
        } else {
            self.up
        }
    }

    /// View → clip transform (OpenGL depth range).
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_y_radians, self.aspect_ratio, self.near, self.far)
    }

    /// World → clip transform.
    pub fn view_projection(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Projects a world point to normalized device coordinates.
    pub fn project(&self, point: DVec3) -> DVec3 {
        self.view_projection().project_point3(point)
    }

    /// Maps normalized device coordinates back to world space.
    pub fn unproject(&self, ndc: DVec3) -> DVec3 {
        self.view_projection().inverse().project_point3(ndc)
    }

    /// Casts a ray from the eye through a pointer position in NDC.
    pub fn ray_from_ndc(&self, ndc: DVec2) -> Ray {
        let through = self.unproject(ndc.extend(0.5));
        Ray::new(self.position, through - self.position)
    }
}
