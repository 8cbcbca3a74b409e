//! # Configuration Constants
//!
//! Centralized constants for the limas visualizer. Geometry dimensions,
//! animation tuning, material appearance and camera defaults are defined
//! here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Model**: Rendered pyramid dimensions and supported base sides
//! - **Animation**: Morph damping and convergence
//! - **Materials**: Face colors and opacities
//! - **Camera**: Default perspective camera

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance used by ray casting.
///
/// Rays nearly parallel to a triangle plane (determinant below this value)
/// are treated as misses, and hits closer than this distance to the ray
/// origin are ignored.
pub const RAY_EPSILON: f64 = 1e-9;

// =============================================================================
// MODEL CONSTANTS
// =============================================================================

/// Circumradius of the rendered base polygon.
///
/// Also used as the distance the unfolded lateral tip extends past the
/// base edge midpoint.
///
/// # Example
///
/// ```rust
/// use config::constants::MODEL_RADIUS;
/// assert_eq!(MODEL_RADIUS, 1.5);
/// ```
pub const MODEL_RADIUS: f64 = 1.5;

/// Height of the rendered apex above the base plane.
pub const MODEL_HEIGHT: f64 = 2.0;

/// Smallest supported number of base sides (triangle).
pub const MIN_BASE_SIDES: u32 = 3;

/// Largest supported number of base sides (hexagon).
pub const MAX_BASE_SIDES: u32 = 6;

/// Base side count shown on startup (square base).
///
/// # Example
///
/// ```rust
/// use config::constants::{is_supported_sides, DEFAULT_BASE_SIDES};
/// assert!(is_supported_sides(DEFAULT_BASE_SIDES));
/// ```
pub const DEFAULT_BASE_SIDES: u32 = 4;

// =============================================================================
// ANIMATION CONSTANTS
// =============================================================================

/// Fraction of the remaining distance the morph covers each tick.
///
/// `current += (target - current) * MORPH_SPEED`
///
/// # Example
///
/// ```rust
/// use config::constants::MORPH_SPEED;
///
/// let mut current = 0.0;
/// current += (1.0 - current) * MORPH_SPEED;
/// assert!((current - 0.08_f64).abs() < 1e-12);
/// ```
pub const MORPH_SPEED: f64 = 0.08;

/// Distance to target below which the morph snaps onto the target.
pub const MORPH_SNAP_EPSILON: f64 = 1e-4;

// =============================================================================
// MATERIAL CONSTANTS
// =============================================================================

/// Base face color (light blue).
pub const BASE_COLOR: u32 = 0x00bc_d4;

/// Lateral face color (yellow).
pub const SIDE_COLOR: u32 = 0xffeb_3b;

/// Shared hover highlight color (green).
pub const HIGHLIGHT_COLOR: u32 = 0x00ff_00;

/// Border line color.
pub const EDGE_COLOR: u32 = 0x0000_00;

/// Height indicator line and marker color.
pub const HEIGHT_LINE_COLOR: u32 = 0x0000_ff;

/// Radius of the marker drawn at the base center with the height line.
pub const HEIGHT_MARKER_RADIUS: f64 = 0.05;

/// Opacity of default materials when transparency is off.
pub const OPAQUE_OPACITY: f32 = 1.0;

/// Opacity of the highlight material when transparency is off.
///
/// The highlight material is always drawn transparent.
pub const HIGHLIGHT_OPACITY: f32 = 0.8;

/// Opacity of every material while transparent mode is on.
pub const TRANSPARENT_OPACITY: f32 = 0.4;

// =============================================================================
// CAMERA CONSTANTS
// =============================================================================

/// Default camera position.
pub const CAMERA_POSITION: [f64; 3] = [4.0, 4.0, 4.0];

/// Default orbit target.
pub const CAMERA_TARGET: [f64; 3] = [0.0, 0.0, 0.0];

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f64 = 45.0;

/// Near clipping plane distance.
pub const CAMERA_NEAR: f64 = 0.1;

/// Far clipping plane distance.
pub const CAMERA_FAR: f64 = 1000.0;

// =============================================================================
// DISPLAY CONSTANTS
// =============================================================================

/// Decimal places used when measurement results are displayed.
pub const DISPLAY_DECIMALS: usize = 2;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns true if the base side count is one the visualizer offers.
///
/// # Example
///
/// ```rust
/// use config::constants::is_supported_sides;
///
/// assert!(is_supported_sides(3));
/// assert!(is_supported_sides(6));
/// assert!(!is_supported_sides(2));
/// assert!(!is_supported_sides(7));
/// ```
#[inline]
pub fn is_supported_sides(sides: u32) -> bool {
    (MIN_BASE_SIDES..=MAX_BASE_SIDES).contains(&sides)
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// VIEWER CONFIG
// =============================================================================

/// Immutable snapshot of the tunable model and animation settings.
///
/// # Examples
/// ```
/// use config::constants::ViewerConfig;
/// let config = ViewerConfig::default();
/// assert!(config.radius > 0.0);
/// assert!(config.morph_speed > 0.0 && config.morph_speed < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    /// Circumradius of the rendered base polygon.
    pub radius: f64,
    /// Apex height of the rendered pyramid.
    pub height: f64,
    /// Morph damping factor, strictly between 0 and 1.
    pub morph_speed: f64,
    /// Snap distance for the morph; zero disables snapping.
    pub snap_epsilon: f64,
}

impl ViewerConfig {
    /// Builds a configuration enforcing strict validation of every field.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, ViewerConfig};
    /// let cfg = ViewerConfig::new(2.0, 3.0, 0.1, 0.0).expect("valid config");
    /// assert_eq!(cfg.height, 3.0);
    /// assert_eq!(
    ///     ViewerConfig::new(2.0, 3.0, 1.0, 0.0).unwrap_err(),
    ///     ConfigError::InvalidMorphSpeed(1.0)
    /// );
    /// ```
    pub fn new(
        radius: f64,
        height: f64,
        morph_speed: f64,
        snap_epsilon: f64,
    ) -> Result<Self, ConfigError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigError::InvalidRadius(radius));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(ConfigError::InvalidHeight(height));
        }
        if !(morph_speed > 0.0 && morph_speed < 1.0) {
            return Err(ConfigError::InvalidMorphSpeed(morph_speed));
        }
        if !(snap_epsilon.is_finite() && snap_epsilon >= 0.0) {
            return Err(ConfigError::InvalidSnapEpsilon(snap_epsilon));
        }
        Ok(Self {
            radius,
            height,
            morph_speed,
            snap_epsilon,
        })
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            radius: MODEL_RADIUS,
            height: MODEL_HEIGHT,
            morph_speed: MORPH_SPEED,
            snap_epsilon: MORPH_SNAP_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the radius is zero, negative or not finite.
    InvalidRadius(f64),
    /// Raised when the height is zero, negative or not finite.
    InvalidHeight(f64),
    /// Raised when the morph speed is outside the open interval (0, 1).
    InvalidMorphSpeed(f64),
    /// Raised when the snap epsilon is negative or not finite.
    InvalidSnapEpsilon(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRadius(value) => write!(f, "radius must be positive: {value}"),
            ConfigError::InvalidHeight(value) => write!(f, "height must be positive: {value}"),
            ConfigError::InvalidMorphSpeed(value) => {
                write!(f, "morph_speed must be in (0, 1): {value}")
            }
            ConfigError::InvalidSnapEpsilon(value) => {
                write!(f, "snap_epsilon must be non-negative: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
