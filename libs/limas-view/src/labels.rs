//! # Labels
//!
//! Projects the base vertices and the apex into pixel space so the front
//! end can position its overlay text. Base vertices are named `A`, `B`, …
//! in angular order; the apex is `P`.

use crate::camera::Camera;
use crate::error::{ViewError, ViewResult};
use glam::DVec3;
use serde::Serialize;

/// Name of the apex label.
pub const APEX_LABEL: &str = "P";

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport, rejecting empty or non-finite sizes.
    pub fn new(width: f64, height: f64) -> ViewResult<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !(valid(width) && valid(height)) {
            return Err(ViewError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
        }
    }
}

/// A pixel position, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenPoint {
    /// Pixels from the left edge.
    pub x: f64,
    /// Pixels from the top edge.
    pub y: f64,
}

/// A named label anchored to a projected point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    /// Display text.
    pub name: String,
    /// World anchor.
    pub anchor: DVec3,
    /// Projected pixel position.
    pub screen: ScreenPoint,
}

/// Projects a world point to pixel coordinates.
///
/// `x = (ndc.x + 1) / 2 · width`, `y = (1 − ndc.y) / 2 · height`.
///
/// # Example
///
/// ```rust
/// use limas_view::{labels::{project_to_screen, Viewport}, Camera};
///
/// let camera = Camera::default();
/// let viewport = Viewport::new(640.0, 480.0).unwrap();
/// let p = project_to_screen(camera.target, &camera, &viewport);
/// assert!((p.x - 320.0).abs() < 1e-6);
/// assert!((p.y - 240.0).abs() < 1e-6);
/// ```
pub fn project_to_screen(point: DVec3, camera: &Camera, viewport: &Viewport) -> ScreenPoint {
    let ndc = camera.project(point);
    ScreenPoint {
        x: (ndc.x + 1.0) / 2.0 * viewport.width,
        y: (1.0 - ndc.y) / 2.0 * viewport.height,
    }
}

/// Name of base vertex `index`: `A`, `B`, `C`, …
pub fn vertex_label(index: usize) -> String {
    let offset = u8::try_from(index % 26).unwrap_or(0);
    char::from(b'A' + offset).to_string()
}

/// Projects every base vertex label followed by the apex label.
pub fn project_labels(
    base_vertices: &[DVec3],
    apex: DVec3,
    camera: &Camera,
    viewport: &Viewport,
) -> Vec<Label> {
    base_vertices
        .iter()
        .enumerate()
        .map(|(i, &anchor)| (vertex_label(i), anchor))
        .chain(std::iter::once((APEX_LABEL.to_string(), apex)))
        .map(|(name, anchor)| Label {
            name,
            anchor,
            screen: project_to_screen(anchor, camera, viewport),
        })
        .collect()
}
