//! # Mesh Data Structure
//!
//! Render-ready triangle buffers. Every face of the pyramid owns one mesh
//! whose triangles never share vertices, so per-vertex normals computed
//! from the triangles are flat per triangle.

use config::constants::approx_zero;
use glam::DVec3;

/// A triangle mesh with vertices, indices and optional normals.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the WASM boundary for GPU rendering.
///
/// # Example
///
/// ```rust
/// use limas_geometry::Mesh;
/// use glam::DVec3;
///
/// let mesh = Mesh::from_triangles(&[[DVec3::ZERO, DVec3::X, DVec3::Z]]);
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    /// Builds a non-indexed mesh (three fresh vertices per triangle) and
    /// computes its normals.
    pub fn from_triangles(triangles: &[[DVec3; 3]]) -> Self {
        let mut mesh = Self::with_capacity(triangles.len() * 3, triangles.len());
        for [a, b, c] in triangles {
            let i0 = mesh.add_vertex(*a);
            let i1 = mesh.add_vertex(*b);
            let i2 = mesh.add_vertex(*c);
            mesh.add_triangle(i0, i1, i2);
        }
        mesh.compute_normals();
        mesh
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a mutable reference to the vertices.
    ///
    /// Normals are stale after editing until [`Mesh::compute_normals`] runs.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [DVec3] {
        &mut self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the corner positions of every triangle.
    pub fn triangle_positions(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.triangles.iter().map(|tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes and sets face normals for each vertex.
    ///
    /// Vertices shared between triangles receive the normalized sum of the
    /// adjacent face normals; unshared vertices get their face normal.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Returns the average of all vertex positions.
    pub fn centroid(&self) -> DVec3 {
        if self.vertices.is_empty() {
            return DVec3::ZERO;
        }
        self.vertices.iter().copied().sum::<DVec3>() / self.vertices.len() as f64
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (zero area)
    ///
    /// Returns true if valid.
    #[cfg(test)]
    pub(crate) fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if approx_zero(area) {
                return false;
            }
        }

        true
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten_f32(&self.vertices)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_deref().map(flatten_f32)
    }
}

fn flatten_f32(points: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(points.len() * 3);
    for p in points {
        result.push(p.x as f32);
        result.push(p.y as f32);
        result.push(p.z as f32);
    }
    result
}
