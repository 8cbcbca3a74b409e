//! # Face Handle
//!
//! WASM-friendly snapshot of one face: its current buffers and the material
//! it wears this frame.

use limas_geometry::FaceKind;
use limas_view::RenderFace;
use wasm_bindgen::prelude::*;

/// Buffers and material of one face, copied out for JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// viewer.tick();
/// for (let i = 0; i < viewer.face_count(); i++) {
///   const face = viewer.face(i);
///   const geometry = meshes[i].geometry;
///   geometry.attributes.position.array.set(face.vertices());
///   geometry.attributes.normal.array.set(face.normals());
///   geometry.attributes.position.needsUpdate = true;
///   meshes[i].material.color.setHex(face.color);
///   meshes[i].material.opacity = face.opacity;
///   meshes[i].material.transparent = face.transparent;
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct FaceHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Flat normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Lateral face index, or -1 for the base
    lateral_index: i32,
    /// Material color as 0xRRGGBB
    color: u32,
    /// Material opacity
    opacity: f32,
    /// Whether blending is on
    transparent: bool,
    /// Whether the shared highlight material is assigned
    highlighted: bool,
}

#[wasm_bindgen]
impl FaceHandle {
    /// Returns true for the base face.
    #[wasm_bindgen(getter)]
    pub fn is_base(&self) -> bool {
        self.lateral_index < 0
    }

    /// Index of the lateral face, or -1 for the base.
    #[wasm_bindgen(getter)]
    pub fn lateral_index(&self) -> i32 {
        self.lateral_index
    }

    /// Number of vertices in the buffer.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        u32::try_from(self.vertices.len() / 3).unwrap_or(u32::MAX)
    }

    /// Material color as `0xRRGGBB`.
    #[wasm_bindgen(getter)]
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Material opacity.
    #[wasm_bindgen(getter)]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether the material blends.
    #[wasm_bindgen(getter)]
    pub fn transparent(&self) -> bool {
        self.transparent
    }

    /// Whether the face wears the highlight material.
    #[wasm_bindgen(getter)]
    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the flat normals as a Float32Array.
    ///
    /// Format: [nx, ny, nz, nx, ny, nz, ...]
    #[wasm_bindgen]
    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.normals[..])
    }
}

impl FaceHandle {
    /// Copies a render face out of the viewer.
    pub fn from_render_face(face: RenderFace) -> Self {
        let lateral_index = match face.kind {
            FaceKind::Base => -1,
            FaceKind::Lateral(i) => i32::try_from(i).unwrap_or(i32::MAX),
        };
        Self {
            vertices: face.vertices,
            normals: face.normals,
            lateral_index,
            color: face.material.color,
            opacity: face.material.opacity,
            transparent: face.material.transparent,
            highlighted: face.material_kind == limas_view::MaterialKind::Highlight,
        }
    }

    /// Vertex positions without crossing into JavaScript.
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertices
    }

    /// Normals without crossing into JavaScript.
    pub fn normal_data(&self) -> &[f32] {
        &self.normals
    }
}
