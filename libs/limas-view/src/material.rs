//! # Materials
//!
//! Faces carry a [`MaterialKind`] id that is resolved against a small
//! [`MaterialTable`] at render time. Hover highlighting swaps the id; the
//! transparency toggle rewrites the table entries.

use config::constants::{
    BASE_COLOR, HIGHLIGHT_COLOR, HIGHLIGHT_OPACITY, OPAQUE_OPACITY, SIDE_COLOR,
    TRANSPARENT_OPACITY,
};
use limas_geometry::FaceKind;
use serde::Serialize;

/// Identifies one of the shared materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MaterialKind {
    /// Default material of the base face.
    Base,
    /// Default material of the lateral faces.
    Side,
    /// Shared hover material.
    Highlight,
}

impl MaterialKind {
    /// Every material, in table order.
    pub const ALL: [MaterialKind; 3] = [MaterialKind::Base, MaterialKind::Side, MaterialKind::Highlight];

    /// Default material for a face of the given kind.
    pub fn default_for(kind: FaceKind) -> Self {
        match kind {
            FaceKind::Base => MaterialKind::Base,
            FaceKind::Lateral(_) => MaterialKind::Side,
        }
    }

    fn slot(self) -> usize {
        match self {
            MaterialKind::Base => 0,
            MaterialKind::Side => 1,
            MaterialKind::Highlight => 2,
        }
    }
}

/// Render parameters of one material. All materials are double sided.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    /// `0xRRGGBB` color.
    pub color: u32,
    /// Whether blending is enabled.
    pub transparent: bool,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

/// Materials indexed by [`MaterialKind`].
///
/// # Example
///
/// ```rust
/// use limas_view::material::{MaterialKind, MaterialTable};
///
/// let mut table = MaterialTable::default();
/// assert!(!table.get(MaterialKind::Base).transparent);
/// table.apply_transparency(true);
/// assert_eq!(table.get(MaterialKind::Base).opacity, 0.4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialTable {
    materials: [Material; 3],
}

impl Default for MaterialTable {
    fn default() -> Self {
        let mut table = Self {
            materials: [
                Material {
                    color: BASE_COLOR,
                    transparent: false,
                    opacity: OPAQUE_OPACITY,
                },
                Material {
                    color: SIDE_COLOR,
                    transparent: false,
                    opacity: OPAQUE_OPACITY,
                },
                Material {
                    color: HIGHLIGHT_COLOR,
                    transparent: true,
                    opacity: HIGHLIGHT_OPACITY,
                },
            ],
        };
        table.apply_transparency(false);
        table
    }
}

impl MaterialTable {
    /// Resolves a material id.
    pub fn get(&self, kind: MaterialKind) -> Material {
        self.materials[kind.slot()]
    }

    /// Rewrites opacity for the transparency mode.
    ///
    /// The highlight material stays transparent in both modes; the default
    /// materials become transparent only while the mode is on.
    pub fn apply_transparency(&mut self, transparent_mode: bool) {
        for kind in MaterialKind::ALL {
            let material = &mut self.materials[kind.slot()];
            if kind == MaterialKind::Highlight {
                material.transparent = true;
                material.opacity = if transparent_mode {
                    TRANSPARENT_OPACITY
                } else {
                    HIGHLIGHT_OPACITY
                };
            } else {
                material.transparent = transparent_mode;
                material.opacity = if transparent_mode {
                    TRANSPARENT_OPACITY
                } else {
                    OPAQUE_OPACITY
                };
            }
        }
    }
}
