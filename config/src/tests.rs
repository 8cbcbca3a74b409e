//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and the validated viewer configuration.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_ray_epsilon_is_small() {
    assert!(RAY_EPSILON > 0.0);
    assert!(RAY_EPSILON < 1e-6, "RAY_EPSILON should be small for precision");
}

// =============================================================================
// MODEL TESTS
// =============================================================================

#[test]
fn test_model_dimensions_match_reference_look() {
    assert_eq!(MODEL_RADIUS, 1.5);
    assert_eq!(MODEL_HEIGHT, 2.0);
}

#[test]
fn test_supported_sides_range() {
    // A polygon needs at least 3 sides
    assert!(MIN_BASE_SIDES >= 3);
    assert!(MIN_BASE_SIDES <= MAX_BASE_SIDES);
    assert!(is_supported_sides(DEFAULT_BASE_SIDES));
}

#[test]
fn test_is_supported_sides_bounds() {
    assert!(!is_supported_sides(0));
    assert!(!is_supported_sides(MIN_BASE_SIDES - 1));
    assert!(is_supported_sides(MIN_BASE_SIDES));
    assert!(is_supported_sides(MAX_BASE_SIDES));
    assert!(!is_supported_sides(MAX_BASE_SIDES + 1));
}

// =============================================================================
// ANIMATION TESTS
// =============================================================================

#[test]
fn test_morph_speed_is_damping_factor() {
    assert!(MORPH_SPEED > 0.0 && MORPH_SPEED < 1.0);
}

#[test]
fn test_snap_epsilon_smaller_than_one_step() {
    // Snapping must never skip a visible step of the animation
    assert!(MORPH_SNAP_EPSILON < MORPH_SPEED);
}

// =============================================================================
// MATERIAL TESTS
// =============================================================================

#[test]
fn test_default_colors_are_distinct() {
    assert_ne!(BASE_COLOR, SIDE_COLOR);
    assert_ne!(BASE_COLOR, HIGHLIGHT_COLOR);
    assert_ne!(SIDE_COLOR, HIGHLIGHT_COLOR);
}

#[test]
fn test_opacity_ordering() {
    assert!(TRANSPARENT_OPACITY < HIGHLIGHT_OPACITY);
    assert!(HIGHLIGHT_OPACITY < OPAQUE_OPACITY);
}

// =============================================================================
// VIEWER CONFIG TESTS
// =============================================================================

#[test]
fn test_default_config_uses_constants() {
    let cfg = ViewerConfig::default();
    assert_eq!(cfg.radius, MODEL_RADIUS);
    assert_eq!(cfg.height, MODEL_HEIGHT);
    assert_eq!(cfg.morph_speed, MORPH_SPEED);
    assert_eq!(cfg.snap_epsilon, MORPH_SNAP_EPSILON);
}

#[test]
fn test_new_validates_inputs() {
    assert_eq!(
        ViewerConfig::new(0.0, 2.0, 0.08, 0.0).unwrap_err(),
        ConfigError::InvalidRadius(0.0)
    );
    assert_eq!(
        ViewerConfig::new(1.5, -1.0, 0.08, 0.0).unwrap_err(),
        ConfigError::InvalidHeight(-1.0)
    );
    assert_eq!(
        ViewerConfig::new(1.5, 2.0, 0.0, 0.0).unwrap_err(),
        ConfigError::InvalidMorphSpeed(0.0)
    );
    assert_eq!(
        ViewerConfig::new(1.5, 2.0, 0.08, -1.0).unwrap_err(),
        ConfigError::InvalidSnapEpsilon(-1.0)
    );
}

#[test]
fn test_new_rejects_non_finite() {
    assert!(ViewerConfig::new(f64::INFINITY, 2.0, 0.08, 0.0).is_err());
    assert!(ViewerConfig::new(1.5, f64::NAN, 0.08, 0.0).is_err());
    assert!(ViewerConfig::new(1.5, 2.0, f64::NAN, 0.0).is_err());
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidMorphSpeed(2.0);
    assert!(err.to_string().contains("morph_speed"));
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(EPSILON / 2.0));
    assert!(!approx_zero(EPSILON * 2.0));
}
