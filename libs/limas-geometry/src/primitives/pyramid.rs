//! # Pyramid Primitive
//!
//! Builds the base fan and lateral faces of a regular n-gon pyramid.

use crate::error::{GeometryError, GeometryResult};
use crate::face::{BaseFace, Face, LateralFace, VertexRef};
use crate::mesh::Mesh;
use crate::net::NetUnfolder;
use crate::primitives::polygon::regular_polygon;
use glam::DVec3;
use log::debug;

/// Fan-triangulates the base polygon around `center`.
///
/// Emits triangles `(center, v[i], v[i+1 mod n])`, which is a valid
/// triangulation for any convex polygon.
///
/// # Example
///
/// ```rust
/// use limas_geometry::primitives::{build_base, regular_polygon};
/// use glam::DVec3;
///
/// let vertices = regular_polygon(5, 1.0).unwrap();
/// let base = build_base(&vertices, DVec3::ZERO).unwrap();
/// assert_eq!(base.mesh().triangle_count(), 5);
/// assert_eq!(base.mesh().vertices_f32().len(), 3 * 3 * 5);
/// ```
pub fn build_base(vertices: &[DVec3], center: DVec3) -> GeometryResult<BaseFace> {
    let n = check_vertex_count(vertices)?;

    let triangles: Vec<[VertexRef; 3]> = (0..n)
        .map(|i| [VertexRef::Center, VertexRef::Base(i), VertexRef::Base((i + 1) % n)])
        .collect();

    let positions: Vec<[DVec3; 3]> = triangles
        .iter()
        .map(|tri| tri.map(|r| resolve(r, vertices, center, center)))
        .collect();

    Ok(BaseFace {
        triangles,
        mesh: Mesh::from_triangles(&positions),
    })
}

/// Builds one lateral triangle per base edge.
///
/// Face `i` covers `(v[i], v[i+1 mod n], apex)` on the closed solid and
/// `(v[i], v[i+1 mod n], tip)` in the net, with the tip supplied by
/// `unfolder`. The live buffer starts in the closed form.
pub fn build_lateral(
    vertices: &[DVec3],
    apex: DVec3,
    unfolder: &NetUnfolder,
) -> GeometryResult<Vec<LateralFace>> {
    let n = check_vertex_count(vertices)?;

    let faces = (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            let (v1, v2) = (vertices[i], vertices[j]);
            let closed = unfolder.closed_form(v1, v2, apex);
            LateralFace {
                index: i,
                corners: [VertexRef::Base(i), VertexRef::Base(j), VertexRef::Apex],
                closed,
                open: unfolder.open_form(v1, v2),
                mesh: Mesh::from_triangles(&[closed]),
            }
        })
        .collect();

    Ok(faces)
}

fn check_vertex_count(vertices: &[DVec3]) -> GeometryResult<usize> {
    if vertices.len() < 3 {
        return Err(GeometryError::degenerate(format!(
            "Pyramid base needs at least 3 vertices, got {}",
            vertices.len()
        )));
    }
    Ok(vertices.len())
}

fn resolve(r: VertexRef, vertices: &[DVec3], center: DVec3, apex: DVec3) -> DVec3 {
    match r {
        VertexRef::Center => center,
        VertexRef::Base(i) => vertices[i],
        VertexRef::Apex => apex,
    }
}

/// A complete pyramid: shared points plus every face.
///
/// `faces()[0]` is the base; `faces()[1 + i]` is lateral face `i`.
///
/// # Example
///
/// ```rust
/// use limas_geometry::Pyramid;
///
/// let pyramid = Pyramid::build(4, 1.5, 2.0).unwrap();
/// assert_eq!(pyramid.faces().len(), 5);
/// assert_eq!(pyramid.apex().y, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pyramid {
    sides: u32,
    radius: f64,
    height: f64,
    center: DVec3,
    apex: DVec3,
    base_vertices: Vec<DVec3>,
    faces: Vec<Face>,
}

impl Pyramid {
    /// Builds a pyramid with `sides` base vertices on a circle of `radius`
    /// and the apex at `(0, height, 0)`.
    pub fn build(sides: u32, radius: f64, height: f64) -> GeometryResult<Self> {
        if !(height.is_finite() && height > 0.0) {
            return Err(GeometryError::degenerate(format!(
                "Pyramid height must be positive: {height}"
            )));
        }

        let center = DVec3::ZERO;
        let apex = DVec3::new(0.0, height, 0.0);
        let base_vertices = regular_polygon(sides, radius)?;
        let unfolder = NetUnfolder::new(center, radius);

        let base = build_base(&base_vertices, center)?;
        let lateral = build_lateral(&base_vertices, apex, &unfolder)?;

        let mut faces = Vec::with_capacity(lateral.len() + 1);
        faces.push(Face::Base(base));
        faces.extend(lateral.into_iter().map(Face::Lateral));

        debug!("built pyramid: sides={sides}, faces={}", faces.len());

        Ok(Self {
            sides,
            radius,
            height,
            center,
            apex,
            base_vertices,
            faces,
        })
    }

    /// Number of base sides.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Base circumradius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Apex height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Base center.
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Apex position.
    pub fn apex(&self) -> DVec3 {
        self.apex
    }

    /// Base vertices in angular order.
    pub fn base_vertices(&self) -> &[DVec3] {
        &self.base_vertices
    }

    /// Resolves a shared point reference.
    pub fn vertex(&self, r: VertexRef) -> DVec3 {
        resolve(r, &self.base_vertices, self.center, self.apex)
    }

    /// All faces, base first.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Mutable access to all faces, base first.
    pub fn faces_mut(&mut self) -> &mut [Face] {
        &mut self.faces
    }

    /// Iterates over the lateral faces.
    pub fn lateral_faces(&self) -> impl Iterator<Item = &LateralFace> {
        self.faces.iter().filter_map(Face::as_lateral)
    }
}

/// Returns the classroom name of a pyramid with `sides` base sides.
///
/// # Example
///
/// ```rust
/// use limas_geometry::primitives::pyramid_name;
///
/// assert_eq!(pyramid_name(4), Some("Limas Segiempat"));
/// assert_eq!(pyramid_name(8), None);
/// ```
pub fn pyramid_name(sides: u32) -> Option<&'static str> {
    match sides {
        3 => Some("Limas Segitiga"),
        4 => Some("Limas Segiempat"),
        5 => Some("Limas Segilima"),
        6 => Some("Limas Segienam"),
        _ => None,
    }
}
