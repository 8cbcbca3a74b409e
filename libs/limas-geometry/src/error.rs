//! # Geometry Errors
//!
//! Error types for pyramid construction and measurement. Every error is
//! recoverable: callers keep their previous state and wait for corrected
//! input.

use thiserror::Error;

/// Errors that can occur while building or measuring a pyramid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Base side count outside the supported range.
    #[error("Invalid base side count: {sides} (supported: {min}..={max})")]
    InvalidBaseSideCount {
        /// Requested side count
        sides: u32,
        /// Smallest supported side count
        min: u32,
        /// Largest supported side count
        max: u32,
    },

    /// Geometry that cannot form valid triangles.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// What was degenerate
        message: String,
    },

    /// Side length or height that cannot be measured.
    #[error("Invalid measurement input: {message}")]
    InvalidMeasurementInput {
        /// Which input was rejected and why
        message: String,
    },
}

impl GeometryError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid measurement input error.
    pub fn invalid_measurement(message: impl Into<String>) -> Self {
        Self::InvalidMeasurementInput {
            message: message.into(),
        }
    }

    /// Creates an invalid base side count error for the supported range.
    pub fn invalid_sides(sides: u32) -> Self {
        Self::InvalidBaseSideCount {
            sides,
            min: config::constants::MIN_BASE_SIDES,
            max: config::constants::MAX_BASE_SIDES,
        }
    }
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;
