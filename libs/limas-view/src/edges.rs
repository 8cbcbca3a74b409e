//! # Edges
//!
//! Border lines and the height indicator. Both are derived from the
//! pyramid's shared points and follow the closed solid; they are rebuilt
//! with the faces but never morph.

use config::constants::HEIGHT_MARKER_RADIUS;
use glam::DVec3;
use limas_geometry::{Pyramid, VertexRef};
use serde::Serialize;

/// A line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeSegment {
    /// First end.
    pub start: DVec3,
    /// Second end.
    pub end: DVec3,
}

/// Apex-to-center line with a marker at the base center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeightIndicator {
    /// Line from apex to base center.
    pub line: EdgeSegment,
    /// Marker position.
    pub marker: DVec3,
    /// Marker sphere radius.
    pub marker_radius: f64,
}

/// Returns base edge `i` followed by lateral edge `i` for every base vertex.
///
/// # Example
///
/// ```rust
/// use limas_geometry::Pyramid;
/// use limas_view::edges::edge_segments;
///
/// let pyramid = Pyramid::build(5, 1.5, 2.0).unwrap();
/// assert_eq!(edge_segments(&pyramid).len(), 10);
/// ```
pub fn edge_segments(pyramid: &Pyramid) -> Vec<EdgeSegment> {
    pyramid
        .lateral_faces()
        .flat_map(|face| {
            let [a, b, apex] = face.corners();
            [(a, b), (a, apex)]
        })
        .map(|(start, end): (VertexRef, VertexRef)| EdgeSegment {
            start: pyramid.vertex(start),
            end: pyramid.vertex(end),
        })
        .collect()
}

/// Height indicator for the pyramid.
pub fn height_indicator(pyramid: &Pyramid) -> HeightIndicator {
    HeightIndicator {
        line: EdgeSegment {
            start: pyramid.apex(),
            end: pyramid.center(),
        },
        marker: pyramid.center(),
        marker_radius: HEIGHT_MARKER_RADIUS,
    }
}
