//! WASM-facing entry points for the limas visualizer.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The Three.js front end owns one [`LimasViewer`], forwards
//! button and pointer events to it, calls [`LimasViewer::tick`] once per
//! animation frame and copies the face buffers back into its meshes.
//!
//! Structured outputs (labels, edges, measurements) cross the boundary as
//! JSON strings. Native tests use the `*_internal` helpers, which return
//! Rust error types instead of `JsValue`.
//!
//! ```
//! let mut viewer = limas_wasm::LimasViewer::new_internal().unwrap();
//! viewer.viewer_mut().set_base_sides(3).unwrap();
//! assert_eq!(viewer.face_count(), 4);
//! ```

use config::constants::{
    ViewerConfig, DEFAULT_BASE_SIDES, EDGE_COLOR, HEIGHT_LINE_COLOR, MAX_BASE_SIDES,
    MIN_BASE_SIDES,
};
use glam::DVec3;
use limas_geometry::{MeasurementDisplay, Measurements};
use limas_view::{ViewError, Viewer};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

mod face_handle;

pub use face_handle::FaceHandle;

/// Installs the panic hook and the console logger.
///
/// Call once at startup, before creating a viewer.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // import init_wasm, { init, LimasViewer } from "limas-wasm";
/// // await init_wasm();
/// // init();
/// ```
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("limas viewer ready");
}

/// Returns the side count the viewer starts with.
///
/// # Examples
/// ```
/// assert_eq!(limas_wasm::default_base_sides(), 4);
/// ```
#[wasm_bindgen]
pub fn default_base_sides() -> u32 {
    DEFAULT_BASE_SIDES
}

/// Color of the border lines as `0xRRGGBB`.
#[wasm_bindgen]
pub fn edge_color() -> u32 {
    EDGE_COLOR
}

/// Color of the height line as `0xRRGGBB`.
#[wasm_bindgen]
pub fn height_line_color() -> u32 {
    HEIGHT_LINE_COLOR
}

/// Smallest selectable side count.
#[wasm_bindgen]
pub fn min_base_sides() -> u32 {
    MIN_BASE_SIDES
}

/// Largest selectable side count.
#[wasm_bindgen]
pub fn max_base_sides() -> u32 {
    MAX_BASE_SIDES
}

/// Classroom name for a side count, if supported.
///
/// # Examples
/// ```
/// assert_eq!(limas_wasm::pyramid_name(5).as_deref(), Some("Limas Segilima"));
/// assert_eq!(limas_wasm::pyramid_name(9), None);
/// ```
#[wasm_bindgen]
pub fn pyramid_name(sides: u32) -> Option<String> {
    limas_geometry::primitives::pyramid_name(sides).map(str::to_string)
}

/// Measurement results with their display strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementReport {
    /// Full-precision values.
    #[serde(flatten)]
    pub values: Measurements,
    /// Two-decimal display strings.
    pub display: MeasurementDisplay,
}

impl From<Measurements> for MeasurementReport {
    fn from(values: Measurements) -> Self {
        Self {
            display: values.display(),
            values,
        }
    }
}

/// Errors surfaced by the `*_internal` helpers.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A viewer command was rejected.
    #[error(transparent)]
    View(#[from] ViewError),

    /// An output could not be serialized.
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Viewer handle owned by the JavaScript front end.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const viewer = new LimasViewer();
/// // viewer.set_base_sides(5);
/// // viewer.set_flag("showLabels", true);
/// // function frame() {
/// //   viewer.tick();
/// //   const labels = JSON.parse(viewer.labels_json());
/// //   requestAnimationFrame(frame);
/// // }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct LimasViewer {
    inner: Viewer,
}

#[wasm_bindgen]
impl LimasViewer {
    /// Creates a viewer with the default model and animation settings.
    ///
    /// # Errors
    /// Returns a JavaScript error value if the default solid cannot be built.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<LimasViewer, JsValue> {
        Self::new_internal().map_err(to_js)
    }

    /// Creates a viewer with custom model size and animation tuning.
    ///
    /// # Errors
    /// Returns a JavaScript error value when a setting is out of range.
    pub fn with_config(
        radius: f64,
        height: f64,
        morph_speed: f64,
        snap_epsilon: f64,
    ) -> Result<LimasViewer, JsValue> {
        Self::with_config_internal(radius, height, morph_speed, snap_epsilon).map_err(to_js)
    }

    /// Rebuilds the solid for `sides` base vertices (3 to 6).
    ///
    /// # Errors
    /// Returns a JavaScript error value and keeps the current solid when
    /// `sides` is unsupported.
    pub fn set_base_sides(&mut self, sides: u32) -> Result<(), JsValue> {
        self.inner.set_base_sides(sides).map_err(to_js)
    }

    /// Sets the morph target: 0 for the closed solid, 1 for the net.
    ///
    /// # Errors
    /// Returns a JavaScript error value for any other value.
    pub fn set_morph_target(&mut self, target: u32) -> Result<(), JsValue> {
        self.inner.set_morph_target(target).map_err(to_js)
    }

    /// Sets a display flag by name.
    ///
    /// # Errors
    /// Returns a JavaScript error value for unknown flag names.
    pub fn set_flag(&mut self, name: &str, value: bool) -> Result<(), JsValue> {
        self.inner.set_flag_by_name(name, value).map_err(to_js)
    }

    /// Flips a display flag by name and returns its new value.
    ///
    /// # Errors
    /// Returns a JavaScript error value for unknown flag names.
    pub fn toggle_flag(&mut self, name: &str) -> Result<bool, JsValue> {
        self.inner.toggle_flag(name).map_err(to_js)
    }

    /// Records the pointer in NDC. Returns true when it is over a face.
    pub fn pointer_moved(&mut self, ndc_x: f64, ndc_y: f64) -> bool {
        self.inner.pointer_moved(ndc_x, ndc_y).is_some()
    }

    /// Forgets the pointer.
    pub fn pointer_left(&mut self) {
        self.inner.pointer_left();
    }

    /// Updates the camera from the orbit controls.
    ///
    /// # Errors
    /// Returns a JavaScript error value when the eye sits on the target.
    pub fn set_camera(
        &mut self,
        px: f64,
        py: f64,
        pz: f64,
        tx: f64,
        ty: f64,
        tz: f64,
    ) -> Result<(), JsValue> {
        self.inner
            .set_camera(DVec3::new(px, py, pz), DVec3::new(tx, ty, tz))
            .map_err(to_js)
    }

    /// Resizes the drawing surface.
    ///
    /// # Errors
    /// Returns a JavaScript error value for empty or non-finite sizes.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.inner.set_viewport(width, height).map_err(to_js)
    }

    /// Advances one animation frame and returns the blend factor.
    pub fn tick(&mut self) -> f64 {
        self.inner.tick()
    }

    /// Computes measurements and returns them as JSON.
    ///
    /// # Errors
    /// Returns a JavaScript error value for non-positive input; the previous
    /// results are kept.
    pub fn compute_measurements(
        &mut self,
        sides: u32,
        side: f64,
        height: f64,
    ) -> Result<String, JsValue> {
        self.compute_measurements_internal(sides, side, height)
            .map_err(to_js)
    }

    /// Parses the panel's text inputs and computes measurements as JSON.
    ///
    /// # Errors
    /// Returns a JavaScript error value for non-numeric or non-positive
    /// input; the previous results are kept.
    pub fn compute_measurements_from_input(
        &mut self,
        sides: u32,
        side: &str,
        height: &str,
    ) -> Result<String, JsValue> {
        self.compute_measurements_from_input_internal(sides, side, height)
            .map_err(to_js)
    }

    /// Number of faces, base included.
    #[wasm_bindgen(getter)]
    pub fn face_count(&self) -> usize {
        self.inner.faces().len()
    }

    /// Current number of base sides.
    #[wasm_bindgen(getter)]
    pub fn sides(&self) -> u32 {
        self.inner.sides()
    }

    /// Classroom name of the current solid.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.pyramid_name().to_string()
    }

    /// Animated blend factor in `[0, 1]`.
    #[wasm_bindgen(getter)]
    pub fn morph_progress(&self) -> f64 {
        self.inner.morph_progress()
    }

    /// Whether the highlight material is currently assigned.
    #[wasm_bindgen(getter)]
    pub fn highlighted(&self) -> bool {
        self.inner.is_highlighted()
    }

    /// Snapshot of face `index` for this frame.
    pub fn face(&self, index: usize) -> Option<FaceHandle> {
        self.inner
            .render_face(index)
            .map(FaceHandle::from_render_face)
    }

    /// Projected labels as JSON; empty while labels are hidden.
    ///
    /// # Errors
    /// Returns a JavaScript error value if serialization fails.
    pub fn labels_json(&self) -> Result<String, JsValue> {
        self.labels_json_internal().map_err(to_js)
    }

    /// Border line segments as JSON.
    ///
    /// # Errors
    /// Returns a JavaScript error value if serialization fails.
    pub fn edges_json(&self) -> Result<String, JsValue> {
        self.edges_json_internal().map_err(to_js)
    }

    /// Height indicator as JSON, `null` while hidden.
    ///
    /// # Errors
    /// Returns a JavaScript error value if serialization fails.
    pub fn height_indicator_json(&self) -> Result<String, JsValue> {
        self.height_indicator_json_internal().map_err(to_js)
    }

    /// Last measurement results as JSON, `null` before the first success.
    ///
    /// # Errors
    /// Returns a JavaScript error value if serialization fails.
    pub fn measurements_json(&self) -> Result<String, JsValue> {
        self.measurements_json_internal().map_err(to_js)
    }

    /// Display flags as JSON.
    ///
    /// # Errors
    /// Returns a JavaScript error value if serialization fails.
    pub fn flags_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.flags()).map_err(to_js)
    }
}

impl LimasViewer {
    /// Host-only constructor returning Rust errors.
    pub fn new_internal() -> Result<Self, BridgeError> {
        Ok(Self {
            inner: Viewer::new(ViewerConfig::default())?,
        })
    }

    /// Host-only configured constructor returning Rust errors.
    pub fn with_config_internal(
        radius: f64,
        height: f64,
        morph_speed: f64,
        snap_epsilon: f64,
    ) -> Result<Self, BridgeError> {
        let config = ViewerConfig::new(radius, height, morph_speed, snap_epsilon)
            .map_err(ViewError::from)?;
        Ok(Self {
            inner: Viewer::new(config)?,
        })
    }

    /// The wrapped viewer.
    pub fn viewer(&self) -> &Viewer {
        &self.inner
    }

    /// Mutable access to the wrapped viewer.
    pub fn viewer_mut(&mut self) -> &mut Viewer {
        &mut self.inner
    }

    /// Computes measurements, returning the JSON report.
    pub fn compute_measurements_internal(
        &mut self,
        sides: u32,
        side: f64,
        height: f64,
    ) -> Result<String, BridgeError> {
        let measurements = self.inner.compute_measurements(sides, side, height)?;
        Ok(serde_json::to_string(&MeasurementReport::from(measurements))?)
    }

    /// Parses text input and computes measurements, returning the JSON report.
    pub fn compute_measurements_from_input_internal(
        &mut self,
        sides: u32,
        side: &str,
        height: &str,
    ) -> Result<String, BridgeError> {
        let measurements = self
            .inner
            .compute_measurements_from_input(sides, side, height)?;
        Ok(serde_json::to_string(&MeasurementReport::from(measurements))?)
    }

    /// Labels as JSON.
    pub fn labels_json_internal(&self) -> Result<String, BridgeError> {
        Ok(serde_json::to_string(&self.inner.labels())?)
    }

    /// Edges as JSON.
    pub fn edges_json_internal(&self) -> Result<String, BridgeError> {
        Ok(serde_json::to_string(&self.inner.edges())?)
    }

    /// Height indicator as JSON.
    pub fn height_indicator_json_internal(&self) -> Result<String, BridgeError> {
        Ok(serde_json::to_string(&self.inner.height_indicator())?)
    }

    /// Last measurements as JSON.
    pub fn measurements_json_internal(&self) -> Result<String, BridgeError> {
        let report = self.inner.measurements().copied().map(MeasurementReport::from);
        Ok(serde_json::to_string(&report)?)
    }
}

#[cfg(test)]
mod tests;
