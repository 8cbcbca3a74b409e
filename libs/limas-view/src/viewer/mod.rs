//! # Viewer
//!
//! The per-session state machine driven by the front end. UI events arrive
//! as commands between animation frames; [`Viewer::tick`] advances the
//! morph and refreshes the hover highlight once per frame; queries return
//! everything the renderer needs for the current frame.
//!
//! ## Lifecycle
//!
//! ```text
//! new ─→ set_base_sides(n) ─→ (rebuild: faces replaced, morph restarts closed)
//!          │
//!          ├─ set_morph_target / set_flag / pointer_moved / set_camera
//!          └─ tick (every frame) ─→ render_faces / labels / edges
//! ```
//!
//! Rejected commands leave the viewer untouched.

use crate::camera::Camera;
use crate::edges::{edge_segments, height_indicator, EdgeSegment, HeightIndicator};
use crate::error::{ViewError, ViewResult};
use crate::flags::{DisplayFlag, DisplayFlags};
use crate::labels::{project_labels, Label, Viewport};
use crate::material::{Material, MaterialKind, MaterialTable};
use crate::picking::{pick_ndc, PickHit};
use config::constants::{approx_zero, is_supported_sides, ViewerConfig, DEFAULT_BASE_SIDES};
use glam::{DVec2, DVec3};
use limas_geometry::primitives::pyramid_name;
use limas_geometry::{Face, FaceKind, GeometryError, Measurements, MorphEngine, MorphTarget, Pyramid};
use log::{debug, trace, warn};
use serde::Serialize;

/// Render-ready buffers of one face.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFace {
    /// Which face this is.
    pub kind: FaceKind,
    /// Flat `[x, y, z, …]` positions, three vertices per triangle.
    pub vertices: Vec<f32>,
    /// Flat per-vertex normals matching `vertices`.
    pub normals: Vec<f32>,
    /// Material id currently assigned to the face.
    pub material_kind: MaterialKind,
    /// Resolved material parameters.
    pub material: Material,
}

/// Interactive pyramid viewer.
///
/// # Example
///
/// ```rust
/// use limas_view::Viewer;
/// use config::constants::ViewerConfig;
///
/// let mut viewer = Viewer::new(ViewerConfig::default()).unwrap();
/// viewer.set_base_sides(6).unwrap();
/// viewer.set_morph_target(1).unwrap();
/// viewer.tick();
/// assert_eq!(viewer.faces().len(), 7);
/// assert!(viewer.morph_progress() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Viewer {
    config: ViewerConfig,
    pyramid: Pyramid,
    assigned: Vec<MaterialKind>,
    materials: MaterialTable,
    morph: MorphEngine,
    flags: DisplayFlags,
    highlighted: bool,
    pointer: Option<DVec2>,
    hovered: Option<PickHit>,
    camera: Camera,
    viewport: Viewport,
    measurements: Option<Measurements>,
}

impl Viewer {
    /// Creates a viewer showing the default square pyramid, closed, with
    /// every display flag off.
    pub fn new(config: ViewerConfig) -> ViewResult<Self> {
        let pyramid = Pyramid::build(DEFAULT_BASE_SIDES, config.radius, config.height)?;
        let viewport = Viewport::default();
        let camera = Camera {
            aspect_ratio: viewport.aspect_ratio(),
            ..Camera::default()
        };

        Ok(Self {
            assigned: default_materials(pyramid.faces()),
            pyramid,
            materials: MaterialTable::default(),
            morph: MorphEngine::new(config.morph_speed, config.snap_epsilon),
            flags: DisplayFlags::default(),
            highlighted: false,
            pointer: None,
            hovered: None,
            camera,
            viewport,
            measurements: None,
            config,
        })
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Rebuilds every face for a base with `sides` vertices.
    ///
    /// The morph target and display flags persist; the blend factor
    /// restarts at the closed solid and every face gets its default
    /// material. Side counts outside `3..=6` are rejected.
    pub fn set_base_sides(&mut self, sides: u32) -> ViewResult<()> {
        if !is_supported_sides(sides) {
            warn!("rejected base side count {sides}");
            return Err(GeometryError::invalid_sides(sides).into());
        }

        let pyramid = Pyramid::build(sides, self.config.radius, self.config.height)?;
        self.assigned = default_materials(pyramid.faces());
        self.pyramid = pyramid;
        self.morph.reset();
        self.highlighted = false;
        self.hovered = None;

        debug!(
            "rebuilt pyramid: sides={sides}, target={:?}",
            self.morph.target()
        );
        Ok(())
    }

    /// Sets the morph target from the UI's `0 | 1` encoding.
    pub fn set_morph_target(&mut self, value: u32) -> ViewResult<()> {
        let Some(target) = MorphTarget::from_index(value) else {
            warn!("rejected morph target {value}");
            return Err(ViewError::InvalidMorphTarget { value });
        };
        self.set_target(target);
        Ok(())
    }

    /// Sets the morph target. The animation redirects on the next tick.
    pub fn set_target(&mut self, target: MorphTarget) {
        if self.morph.target() != target {
            debug!(
                "morph target {:?} -> {target:?} at t={:.3}",
                self.morph.target(),
                self.morph.current()
            );
        }
        self.morph.set_target(target);
    }

    /// Sets a display flag and applies its side effects.
    pub fn set_flag(&mut self, flag: DisplayFlag, value: bool) {
        let previous = self.flags.set(flag, value);
        if previous == value {
            return;
        }
        debug!("{flag} = {value}");

        match flag {
            DisplayFlag::HighlightMode if !value && self.highlighted => {
                self.restore_defaults();
            }
            DisplayFlag::TransparentMode => {
                self.materials.apply_transparency(value);
            }
            _ => {}
        }
    }

    /// Sets a display flag by its front-end name.
    pub fn set_flag_by_name(&mut self, name: &str, value: bool) -> ViewResult<()> {
        let flag = parse_flag(name)?;
        self.set_flag(flag, value);
        Ok(())
    }

    /// Flips a display flag by its front-end name and returns the new value.
    pub fn toggle_flag(&mut self, name: &str) -> ViewResult<bool> {
        let flag = parse_flag(name)?;
        let value = !self.flags.get(flag);
        self.set_flag(flag, value);
        Ok(value)
    }

    /// Records the pointer position in NDC and refreshes the highlight.
    ///
    /// Returns the face under the pointer, whether or not highlighting is
    /// enabled.
    pub fn pointer_moved(&mut self, ndc_x: f64, ndc_y: f64) -> Option<PickHit> {
        self.pointer = Some(DVec2::new(ndc_x, ndc_y));
        self.update_highlight()
    }

    /// Forgets the pointer, as when it leaves the canvas.
    pub fn pointer_left(&mut self) {
        self.pointer = None;
        self.update_highlight();
    }

    /// Moves the camera eye and look-at point.
    ///
    /// An eye placed on its own target has no view direction and is
    /// rejected.
    pub fn set_camera(&mut self, position: DVec3, target: DVec3) -> ViewResult<()> {
        if approx_zero(position.distance(target)) {
            warn!("rejected camera at {position}");
            return Err(ViewError::DegenerateCamera {
                position: position.to_array(),
            });
        }
        self.camera.position = position;
        self.camera.target = target;
        Ok(())
    }

    /// Resizes the drawing surface and updates the camera aspect ratio.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> ViewResult<()> {
        let viewport = Viewport::new(width, height).inspect_err(|err| warn!("{err}"))?;
        self.camera.aspect_ratio = viewport.aspect_ratio();
        self.viewport = viewport;
        Ok(())
    }

    /// Advances one animation frame and returns the blend factor.
    ///
    /// Rewrites every lateral face buffer, then re-picks against the
    /// updated geometry so the highlight follows moving faces.
    pub fn tick(&mut self) -> f64 {
        let t = self.morph.tick(self.pyramid.faces_mut());
        self.update_highlight();
        t
    }

    /// Computes measurements for a regular `sides`-gon pyramid.
    ///
    /// Invalid input is rejected and the previous results are kept.
    pub fn compute_measurements(
        &mut self,
        sides: u32,
        side: f64,
        height: f64,
    ) -> ViewResult<Measurements> {
        self.store_measurements(Measurements::compute(sides, side, height))
    }

    /// Parses user-entered text and computes measurements.
    pub fn compute_measurements_from_input(
        &mut self,
        sides: u32,
        side: &str,
        height: &str,
    ) -> ViewResult<Measurements> {
        self.store_measurements(Measurements::from_input(sides, side, height))
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Configuration the viewer was created with.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Current number of base sides.
    pub fn sides(&self) -> u32 {
        self.pyramid.sides()
    }

    /// Classroom name of the current solid.
    pub fn pyramid_name(&self) -> &'static str {
        pyramid_name(self.pyramid.sides()).unwrap_or_default()
    }

    /// The current pyramid.
    pub fn pyramid(&self) -> &Pyramid {
        &self.pyramid
    }

    /// Closed base vertices, the label anchors.
    pub fn base_vertices(&self) -> &[DVec3] {
        self.pyramid.base_vertices()
    }

    /// Apex position.
    pub fn apex(&self) -> DVec3 {
        self.pyramid.apex()
    }

    /// Current faces, base first.
    pub fn faces(&self) -> &[Face] {
        self.pyramid.faces()
    }

    /// Material id assigned to face `index`.
    pub fn face_material_kind(&self, index: usize) -> Option<MaterialKind> {
        self.assigned.get(index).copied()
    }

    /// Resolved material of face `index`.
    pub fn face_material(&self, index: usize) -> Option<Material> {
        self.face_material_kind(index).map(|kind| self.materials.get(kind))
    }

    /// Shared material table.
    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    /// Buffers and material of face `index` for the renderer.
    pub fn render_face(&self, index: usize) -> Option<RenderFace> {
        let face = self.faces().get(index)?;
        let material_kind = *self.assigned.get(index)?;
        Some(self.build_render_face(face, material_kind))
    }

    /// Buffers and materials of every face for the renderer.
    pub fn render_faces(&self) -> Vec<RenderFace> {
        self.faces()
            .iter()
            .zip(&self.assigned)
            .map(|(face, &material_kind)| self.build_render_face(face, material_kind))
            .collect()
    }

    /// Border line segments of the closed solid.
    pub fn edges(&self) -> Vec<EdgeSegment> {
        edge_segments(&self.pyramid)
    }

    /// Height indicator, while `heightVisible` is on.
    pub fn height_indicator(&self) -> Option<HeightIndicator> {
        self.flags
            .height_visible
            .then(|| height_indicator(&self.pyramid))
    }

    /// Projected labels for this frame. Empty while `showLabels` is off.
    pub fn labels(&self) -> Vec<Label> {
        if !self.flags.show_labels {
            return Vec::new();
        }
        project_labels(
            self.pyramid.base_vertices(),
            self.pyramid.apex(),
            &self.camera,
            &self.viewport,
        )
    }

    /// Last successful measurement results.
    pub fn measurements(&self) -> Option<&Measurements> {
        self.measurements.as_ref()
    }

    /// Animated blend factor in `[0, 1]`.
    pub fn morph_progress(&self) -> f64 {
        self.morph.current()
    }

    /// Operator's morph target.
    pub fn morph_target(&self) -> MorphTarget {
        self.morph.target()
    }

    /// Current display flags.
    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    /// Whether every face currently wears the highlight material.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Face under the pointer as of the last pick.
    pub fn hovered(&self) -> Option<&PickHit> {
        self.hovered.as_ref()
    }

    /// Current camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn build_render_face(&self, face: &Face, material_kind: MaterialKind) -> RenderFace {
        let mesh = face.mesh();
        RenderFace {
            kind: face.kind(),
            vertices: mesh.vertices_f32(),
            normals: mesh.normals_f32().unwrap_or_default(),
            material_kind,
            material: self.materials.get(material_kind),
        }
    }

    fn update_highlight(&mut self) -> Option<PickHit> {
        let hit = self
            .pointer
            .and_then(|ndc| pick_ndc(ndc, &self.camera, self.pyramid.faces()));
        self.hovered = hit;

        if !self.flags.highlight_mode {
            return hit;
        }

        match (self.highlighted, hit) {
            (false, Some(hit)) => {
                trace!("highlight on: face {} ({:?})", hit.face, hit.kind);
                self.assigned.fill(MaterialKind::Highlight);
                self.highlighted = true;
                self.materials.apply_transparency(self.flags.transparent_mode);
            }
            (true, None) => {
                trace!("highlight off");
                self.restore_defaults();
            }
            _ => {}
        }
        hit
    }

    fn restore_defaults(&mut self) {
        self.assigned = default_materials(self.pyramid.faces());
        self.highlighted = false;
        self.materials.apply_transparency(self.flags.transparent_mode);
    }

    fn store_measurements(
        &mut self,
        result: Result<Measurements, GeometryError>,
    ) -> ViewResult<Measurements> {
        match result {
            Ok(measurements) => {
                debug!(
                    "measured sides={}: volume={}",
                    measurements.sides, measurements.volume
                );
                self.measurements = Some(measurements);
                Ok(measurements)
            }
            Err(err) => {
                warn!("measurement skipped: {err}");
                Err(err.into())
            }
        }
    }
}

fn default_materials(faces: &[Face]) -> Vec<MaterialKind> {
    faces
        .iter()
        .map(|face| MaterialKind::default_for(face.kind()))
        .collect()
}

fn parse_flag(name: &str) -> ViewResult<DisplayFlag> {
    name.parse::<DisplayFlag>()
        .inspect_err(|err| warn!("{err}"))
}

#[cfg(test)]
mod tests;
