//! # View Errors
//!
//! Errors raised by viewer commands. None of them are fatal: the viewer
//! keeps its previous state whenever a command is rejected.

use config::constants::ConfigError;
use limas_geometry::GeometryError;
use thiserror::Error;

/// Errors that can occur while handling a viewer command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    /// Geometry or measurement error from the geometry layer
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Invalid viewer configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Display flag name not recognized
    #[error("Unknown display flag: {name:?}")]
    UnknownFlag {
        /// The rejected name
        name: String,
    },

    /// Morph target outside `0 | 1`
    #[error("Invalid morph target: {value} (expected 0 or 1)")]
    InvalidMorphTarget {
        /// The rejected value
        value: u32,
    },

    /// Camera eye on top of its look-at point
    #[error("Camera position and target coincide at {position:?}")]
    DegenerateCamera {
        /// The shared position
        position: [f64; 3],
    },

    /// Viewport with a zero dimension
    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport {
        /// Requested width in pixels
        width: f64,
        /// Requested height in pixels
        height: f64,
    },
}

/// Result type alias for viewer commands.
pub type ViewResult<T> = Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_is_transparent() {
        let err: ViewError = GeometryError::invalid_sides(8).into();
        assert_eq!(err.to_string(), GeometryError::invalid_sides(8).to_string());
    }

    #[test]
    fn test_unknown_flag_display() {
        let err = ViewError::UnknownFlag {
            name: "wireframe".to_string(),
        };
        assert!(err.to_string().contains("wireframe"));
    }
}
