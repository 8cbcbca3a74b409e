//! # Picking
//!
//! Ray casting against the current face geometry. Hit testing is a pure
//! function of the pointer, the camera and the faces; the viewer decides
//! what to do with the result.

use crate::camera::{Camera, Ray};
use config::constants::RAY_EPSILON;
use glam::{DVec2, DVec3};
use limas_geometry::{Face, FaceKind};
use serde::Serialize;

/// Nearest face hit by a ray.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PickHit {
    /// Index of the face in the viewer's face list.
    pub face: usize,
    /// Kind of the face that was hit.
    pub kind: FaceKind,
    /// Distance from the ray origin.
    pub distance: f64,
    /// World position of the hit.
    pub point: DVec3,
}

/// Möller–Trumbore ray-triangle intersection.
///
/// Returns the distance along the ray to the hit, testing both sides of
/// the triangle. Rays parallel to the triangle plane and hits at or behind
/// the origin are misses.
///
/// ## Reference
///
/// Möller, T., & Trumbore, B. (1997). Fast, minimum storage ray-triangle intersection.
pub fn ray_triangle_intersect(ray: &Ray, [v0, v1, v2]: [DVec3; 3]) -> Option<f64> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray parallel to triangle
    if a.abs() < RAY_EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    (t > RAY_EPSILON).then_some(t)
}

/// Slab test of a ray against an axis-aligned box.
pub fn ray_hits_aabb(ray: &Ray, min: DVec3, max: DVec3) -> bool {
    let mut t_near = f64::NEG_INFINITY;
    let mut t_far = f64::INFINITY;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.direction[axis];
        if dir.abs() < RAY_EPSILON {
            if origin < min[axis] || origin > max[axis] {
                return false;
            }
            continue;
        }
        let t1 = (min[axis] - origin) / dir;
        let t2 = (max[axis] - origin) / dir;
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));
    }

    t_near <= t_far && t_far >= 0.0
}

/// Returns the nearest face hit by `ray`, if any.
pub fn pick(ray: &Ray, faces: &[Face]) -> Option<PickHit> {
    let mut nearest: Option<PickHit> = None;

    for (index, face) in faces.iter().enumerate() {
        let mesh = face.mesh();
        let (min, max) = mesh.bounding_box();
        // Flat faces have a zero-thickness box; pad it so the slab test holds
        let pad = DVec3::splat(RAY_EPSILON);
        if !ray_hits_aabb(ray, min - pad, max + pad) {
            continue;
        }

        for triangle in mesh.triangle_positions() {
            let Some(distance) = ray_triangle_intersect(ray, triangle) else {
                continue;
            };
            if nearest.map_or(true, |hit| distance < hit.distance) {
                nearest = Some(PickHit {
                    face: index,
                    kind: face.kind(),
                    distance,
                    point: ray.at(distance),
                });
            }
        }
    }

    nearest
}

/// Picks the nearest face under a pointer given in NDC.
///
/// # Example
///
/// ```rust
/// use limas_geometry::Pyramid;
/// use limas_view::{picking::pick_ndc, Camera};
/// use glam::DVec2;
///
/// let pyramid = Pyramid::build(4, 1.5, 2.0).unwrap();
/// let camera = Camera::default();
/// assert!(pick_ndc(DVec2::ZERO, &camera, pyramid.faces()).is_some());
/// assert!(pick_ndc(DVec2::new(0.95, 0.95), &camera, pyramid.faces()).is_none());
/// ```
pub fn pick_ndc(ndc: DVec2, camera: &Camera, faces: &[Face]) -> Option<PickHit> {
    pick(&camera.ray_from_ndc(ndc), faces)
}
