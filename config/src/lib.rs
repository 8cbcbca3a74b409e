//! # Config Crate
//!
//! Centralized configuration constants for the limas (pyramid) visualizer.
//! Model dimensions, animation tuning, material colors and camera defaults
//! live here so the geometry, view and WASM crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MODEL_RADIUS, MORPH_SPEED, ViewerConfig};
//!
//! let cfg = ViewerConfig::default();
//! assert_eq!(cfg.radius, MODEL_RADIUS);
//! assert_eq!(cfg.morph_speed, MORPH_SPEED);
//!
//! // Custom values are validated
//! assert!(ViewerConfig::new(0.0, 2.0, 0.08, 1e-4).is_err());
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Reference Look**: Defaults reproduce the classroom visualizer exactly

pub mod constants;

#[cfg(test)]
mod tests;
