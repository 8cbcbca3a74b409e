//! # Primitives
//!
//! Mesh generation for the polygon base and the pyramid built on it.

pub mod polygon;
pub mod pyramid;

pub use polygon::regular_polygon;
pub use pyramid::{build_base, build_lateral, pyramid_name, Pyramid};
