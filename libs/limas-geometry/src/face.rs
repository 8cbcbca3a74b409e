//! # Faces
//!
//! The pyramid has one base face (a triangle fan around the base center)
//! and one lateral face per base edge. Faces reference the shared base
//! vertices through [`VertexRef`] indices; their position buffers are
//! derived from those references when the solid is built.

use crate::mesh::Mesh;
use glam::DVec3;
use serde::Serialize;

/// Reference to one of the pyramid's shared points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VertexRef {
    /// Center of the base polygon.
    Center,
    /// Base vertex by index in angular order.
    Base(usize),
    /// The single apex.
    Apex,
}

/// Which kind of face this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FaceKind {
    /// The base fan.
    Base,
    /// Lateral face over base edge `i`.
    Lateral(usize),
}

/// The triangulated base polygon. Never morphs.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseFace {
    pub(crate) triangles: Vec<[VertexRef; 3]>,
    pub(crate) mesh: Mesh,
}

impl BaseFace {
    /// Returns the fan triangles as vertex references.
    pub fn triangles(&self) -> &[[VertexRef; 3]] {
        &self.triangles
    }

    /// Returns the render buffer.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

/// A lateral triangle that morphs between the closed solid and the net.
#[derive(Debug, Clone, PartialEq)]
pub struct LateralFace {
    pub(crate) index: usize,
    pub(crate) corners: [VertexRef; 3],
    pub(crate) closed: [DVec3; 3],
    pub(crate) open: [DVec3; 3],
    pub(crate) mesh: Mesh,
}

impl LateralFace {
    /// Index of the base edge this face stands on.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Corner references `(v[i], v[i+1 mod n], apex)`.
    pub fn corners(&self) -> [VertexRef; 3] {
        self.corners
    }

    /// Corner positions on the closed solid.
    pub fn closed(&self) -> &[DVec3; 3] {
        &self.closed
    }

    /// Corner positions in the flat net.
    pub fn open(&self) -> &[DVec3; 3] {
        &self.open
    }

    /// Current (blended) render buffer.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Current corner positions.
    pub fn current(&self) -> [DVec3; 3] {
        let v = self.mesh.vertices();
        [v[0], v[1], v[2]]
    }
}

/// A face of the pyramid.
#[derive(Debug, Clone, PartialEq)]
pub enum Face {
    /// The base fan.
    Base(BaseFace),
    /// A lateral triangle.
    Lateral(LateralFace),
}

impl Face {
    /// Returns the kind of this face.
    pub fn kind(&self) -> FaceKind {
        match self {
            Face::Base(_) => FaceKind::Base,
            Face::Lateral(face) => FaceKind::Lateral(face.index),
        }
    }

    /// Returns the current render buffer.
    pub fn mesh(&self) -> &Mesh {
        match self {
            Face::Base(face) => &face.mesh,
            Face::Lateral(face) => &face.mesh,
        }
    }

    /// Returns the face as a lateral face, if it is one.
    pub fn as_lateral(&self) -> Option<&LateralFace> {
        match self {
            Face::Lateral(face) => Some(face),
            Face::Base(_) => None,
        }
    }
}
