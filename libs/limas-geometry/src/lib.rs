//! # Limas Geometry
//!
//! Parametric geometry for a pyramid (*limas*) on a regular polygon base
//! and the animation that unfolds it into its net (*jaring-jaring*).
//!
//! ## Architecture
//!
//! ```text
//! regular_polygon → build_base / build_lateral (+ NetUnfolder) → Pyramid
//!                                                              ↓
//!                                          MorphEngine::tick (every frame)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use limas_geometry::{MorphEngine, MorphTarget, Pyramid};
//!
//! let mut pyramid = Pyramid::build(5, 1.5, 2.0).unwrap();
//! let mut morph = MorphEngine::default();
//! morph.set_target(MorphTarget::Open);
//! morph.tick(pyramid.faces_mut());
//! assert!(morph.current() > 0.0);
//! ```

pub mod error;
pub mod face;
pub mod measure;
pub mod mesh;
pub mod morph;
pub mod net;
pub mod primitives;

pub use error::{GeometryError, GeometryResult};
pub use face::{BaseFace, Face, FaceKind, LateralFace, VertexRef};
pub use measure::{MeasurementDisplay, Measurements};
pub use mesh::Mesh;
pub use morph::{MorphEngine, MorphTarget};
pub use net::NetUnfolder;
pub use primitives::Pyramid;
