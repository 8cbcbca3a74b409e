//! # Limas View
//!
//! Interactive state around the pyramid geometry: camera projection,
//! hover picking, vertex labels, materials and display flags, tied
//! together by the [`Viewer`] state machine.
//!
//! ## Architecture
//!
//! ```text
//! UI commands → Viewer ─→ limas-geometry (Pyramid, MorphEngine, Measurements)
//!                  │
//!                  ├─ picking  (ray vs. current faces)
//!                  ├─ labels   (world → NDC → pixels)
//!                  └─ material (per-face MaterialKind → MaterialTable)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::ViewerConfig;
//! use limas_view::{DisplayFlag, Viewer};
//!
//! let mut viewer = Viewer::new(ViewerConfig::default()).unwrap();
//! viewer.set_flag(DisplayFlag::ShowLabels, true);
//! viewer.tick();
//! assert_eq!(viewer.labels().len(), 5);
//! ```

pub mod camera;
pub mod edges;
pub mod error;
pub mod flags;
pub mod labels;
pub mod material;
pub mod picking;
pub mod viewer;

pub use camera::{Camera, Ray};
pub use edges::{EdgeSegment, HeightIndicator};
pub use error::{ViewError, ViewResult};
pub use flags::{DisplayFlag, DisplayFlags};
pub use labels::{Label, ScreenPoint, Viewport};
pub use material::{Material, MaterialKind, MaterialTable};
pub use picking::PickHit;
pub use viewer::{RenderFace, Viewer};
