//! # Morph Engine
//!
//! Animates the lateral faces between the closed pyramid and its flat net.
//!
//! Each tick moves the blend factor a fixed fraction of the way toward the
//! target (an exponential ease), then rewrites every lateral face buffer as
//! a convex blend of its closed and open corners and recomputes its flat
//! normal. Buffers are rewritten on every tick, converged or not, so the
//! target can be flipped at any moment mid-animation.

use crate::face::{Face, LateralFace};
use config::constants::{MORPH_SNAP_EPSILON, MORPH_SPEED};
use glam::DVec3;
use serde::Serialize;

/// Where the operator wants the morph to go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum MorphTarget {
    /// The assembled 3D solid (blend factor 0).
    #[default]
    Closed,
    /// The flat net (blend factor 1).
    Open,
}

impl MorphTarget {
    /// Blend factor this target converges to.
    pub fn value(self) -> f64 {
        match self {
            MorphTarget::Closed => 0.0,
            MorphTarget::Open => 1.0,
        }
    }

    /// Maps the UI's `0 | 1` encoding onto a target.
    ///
    /// # Example
    ///
    /// ```rust
    /// use limas_geometry::MorphTarget;
    ///
    /// assert_eq!(MorphTarget::from_index(1), Some(MorphTarget::Open));
    /// assert_eq!(MorphTarget::from_index(2), None);
    /// ```
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(MorphTarget::Closed),
            1 => Some(MorphTarget::Open),
            _ => None,
        }
    }
}

/// Blends closed and open corners: `closed·(1−t) + open·t`.
///
/// Exact at both ends: `t = 0` returns `closed` and `t = 1` returns `open`.
#[inline]
pub fn blend(closed: &[DVec3; 3], open: &[DVec3; 3], t: f64) -> [DVec3; 3] {
    std::array::from_fn(|k| closed[k] * (1.0 - t) + open[k] * t)
}

impl LateralFace {
    /// Rewrites the live buffer for blend factor `t` and recomputes normals.
    pub fn apply_morph(&mut self, t: f64) {
        let corners = blend(&self.closed, &self.open, t);
        self.mesh.vertices_mut().copy_from_slice(&corners);
        self.mesh.compute_normals();
    }
}

/// Morph state: the operator's target and the animated blend factor.
///
/// # Example
///
/// ```rust
/// use limas_geometry::{MorphEngine, MorphTarget};
///
/// let mut morph = MorphEngine::default();
/// morph.set_target(MorphTarget::Open);
/// let t = morph.advance();
/// assert!(t > 0.0 && t < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MorphEngine {
    target: MorphTarget,
    current: f64,
    speed: f64,
    snap_epsilon: f64,
}

impl Default for MorphEngine {
    fn default() -> Self {
        Self::new(MORPH_SPEED, MORPH_SNAP_EPSILON)
    }
}

impl MorphEngine {
    /// Creates a closed morph with the given damping and snap distance.
    pub fn new(speed: f64, snap_epsilon: f64) -> Self {
        Self {
            target: MorphTarget::Closed,
            current: 0.0,
            speed,
            snap_epsilon,
        }
    }

    /// Operator intent.
    pub fn target(&self) -> MorphTarget {
        self.target
    }

    /// Animated blend factor in `[0, 1]`.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Changes the target; the animation redirects on the next tick.
    pub fn set_target(&mut self, target: MorphTarget) {
        self.target = target;
    }

    /// Restarts from the closed solid, keeping the target.
    pub fn reset(&mut self) {
        self.current = 0.0;
    }

    /// Advances the blend factor one tick and returns it.
    pub fn advance(&mut self) -> f64 {
        let target = self.target.value();
        self.current += (target - self.current) * self.speed;
        if (target - self.current).abs() < self.snap_epsilon {
            self.current = target;
        }
        self.current
    }

    /// Advances one tick and rewrites every lateral face buffer.
    pub fn tick(&mut self, faces: &mut [Face]) -> f64 {
        let t = self.advance();
        apply(faces, t);
        t
    }
}

/// Rewrites every lateral face buffer for blend factor `t`.
pub fn apply(faces: &mut [Face], t: f64) {
    for face in faces {
        if let Face::Lateral(lateral) = face {
            lateral.apply_morph(t);
        }
    }
}
