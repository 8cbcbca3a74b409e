//! # Measurements
//!
//! Surface area and volume of a regular n-gon pyramid from user-supplied
//! side length and height. Independent of the rendered model's fixed
//! radius and height.

use crate::error::{GeometryError, GeometryResult};
use config::constants::DISPLAY_DECIMALS;
use serde::Serialize;
use std::f64::consts::PI;

/// Full-precision measurement results.
///
/// # Example
///
/// ```rust
/// use limas_geometry::Measurements;
///
/// let m = Measurements::compute(4, 2.0, 3.0).unwrap();
/// assert_eq!(m.display().base_area, "4.00");
/// assert_eq!(m.display().volume, "4.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    /// Number of base sides.
    pub sides: u32,
    /// Base side length.
    pub side: f64,
    /// Pyramid height.
    pub height: f64,
    /// Area of the regular base polygon.
    pub base_area: f64,
    /// Distance from the base center to an edge midpoint.
    pub apothem: f64,
    /// Height of each lateral triangle.
    pub slant_height: f64,
    /// Combined area of the lateral triangles.
    pub lateral_area: f64,
    /// Base plus lateral area.
    pub total_area: f64,
    /// Enclosed volume.
    pub volume: f64,
}

/// Measurement results formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementDisplay {
    /// Base area text.
    pub base_area: String,
    /// Lateral area text.
    pub lateral_area: String,
    /// Total area text.
    pub total_area: String,
    /// Volume text.
    pub volume: String,
}

impl Measurements {
    /// Computes every measurement for `sides ≥ 3`, `side > 0`, `height > 0`.
    pub fn compute(sides: u32, side: f64, height: f64) -> GeometryResult<Self> {
        if sides < 3 {
            return Err(GeometryError::invalid_measurement(format!(
                "base needs at least 3 sides, got {sides}"
            )));
        }
        check_positive("side length", side)?;
        check_positive("height", height)?;

        let n = f64::from(sides);
        let tan = (PI / n).tan();
        let base_area = n * side * side / (4.0 * tan);
        let apothem = side / (2.0 * tan);
        let slant_height = (height * height + apothem * apothem).sqrt();
        let lateral_area = n * 0.5 * side * slant_height;

        Ok(Self {
            sides,
            side,
            height,
            base_area,
            apothem,
            slant_height,
            lateral_area,
            total_area: base_area + lateral_area,
            volume: base_area * height / 3.0,
        })
    }

    /// Parses side length and height from user text, then computes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use limas_geometry::Measurements;
    ///
    /// assert!(Measurements::from_input(3, " 2.5 ", "4").is_ok());
    /// assert!(Measurements::from_input(3, "abc", "4").is_err());
    /// ```
    pub fn from_input(sides: u32, side: &str, height: &str) -> GeometryResult<Self> {
        let side = parse_number("side length", side)?;
        let height = parse_number("height", height)?;
        Self::compute(sides, side, height)
    }

    /// Formats the four headline results with two decimals.
    pub fn display(&self) -> MeasurementDisplay {
        MeasurementDisplay {
            base_area: format_value(self.base_area),
            lateral_area: format_value(self.lateral_area),
            total_area: format_value(self.total_area),
            volume: format_value(self.volume),
        }
    }
}

/// Formats a value with the display precision.
pub fn format_value(value: f64) -> String {
    format!("{value:.prec$}", prec = DISPLAY_DECIMALS)
}

fn parse_number(name: &str, text: &str) -> GeometryResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| GeometryError::invalid_measurement(format!("{name} is not a number: {text:?}")))
}

fn check_positive(name: &str, value: f64) -> GeometryResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::invalid_measurement(format!(
            "{name} must be a positive number: {value}"
        )))
    }
}
