//! # Viewer Tests

use super::*;
use config::constants::{BASE_COLOR, SIDE_COLOR, TRANSPARENT_OPACITY};

fn viewer() -> Viewer {
    Viewer::new(ViewerConfig::default()).expect("default viewer")
}

/// Pointer over the middle of the default view, which always hits the solid.
const ON_SOLID: (f64, f64) = (0.0, 0.0);
/// Pointer near a corner of the default view, which never hits.
const OFF_SOLID: (f64, f64) = (0.95, 0.95);

fn settle(viewer: &mut Viewer) {
    for _ in 0..1000 {
        viewer.tick();
    }
}

#[test]
fn test_initial_state() {
    let v = viewer();
    assert_eq!(v.sides(), 4);
    assert_eq!(v.faces().len(), 5);
    assert_eq!(v.pyramid_name(), "Limas Segiempat");
    assert_eq!(v.morph_progress(), 0.0);
    assert_eq!(v.morph_target(), MorphTarget::Closed);
    assert_eq!(v.flags(), DisplayFlags::default());
    assert_eq!(v.face_material_kind(0), Some(MaterialKind::Base));
    for i in 1..5 {
        assert_eq!(v.face_material_kind(i), Some(MaterialKind::Side));
    }
    assert!(v.labels().is_empty());
    assert!(v.height_indicator().is_none());
    assert!(v.measurements().is_none());
}

#[test]
fn test_rebuild_discards_previous_faces() {
    let mut v = viewer();
    v.set_morph_target(1).unwrap();
    settle(&mut v);
    assert_eq!(v.morph_progress(), 1.0);

    v.set_base_sides(6).unwrap();
    assert_eq!(v.faces().len(), 7);
    assert_eq!(v.base_vertices().len(), 6);
    assert_eq!(v.render_faces().len(), 7);
    assert_eq!(v.pyramid_name(), "Limas Segienam");
    // Blend factor restarts closed, intent is kept
    assert_eq!(v.morph_progress(), 0.0);
    assert_eq!(v.morph_target(), MorphTarget::Open);
    for face in v.pyramid().lateral_faces() {
        assert_eq!(face.mesh().vertices(), face.closed());
    }
}

#[test]
fn test_invalid_side_count_keeps_previous_solid() {
    let mut v = viewer();
    v.set_base_sides(5).unwrap();
    let before = v.pyramid().clone();

    for sides in [0, 2, 7, 100] {
        let err = v.set_base_sides(sides).unwrap_err();
        assert!(matches!(
            err,
            ViewError::Geometry(GeometryError::InvalidBaseSideCount { .. })
        ));
        assert_eq!(v.pyramid(), &before);
    }
}

#[test]
fn test_invalid_morph_target_rejected() {
    let mut v = viewer();
    assert_eq!(
        v.set_morph_target(2),
        Err(ViewError::InvalidMorphTarget { value: 2 })
    );
    assert_eq!(v.morph_target(), MorphTarget::Closed);
}

#[test]
fn test_morph_converges_both_ways() {
    let mut v = viewer();
    v.set_target(MorphTarget::Open);
    settle(&mut v);
    for face in v.pyramid().lateral_faces() {
        assert_eq!(face.mesh().vertices(), face.open());
    }

    v.set_target(MorphTarget::Closed);
    settle(&mut v);
    assert_eq!(v.morph_progress(), 0.0);
    for face in v.pyramid().lateral_faces() {
        assert_eq!(face.mesh().vertices(), face.closed());
    }
}

#[test]
fn test_pointer_without_highlight_mode_keeps_materials() {
    let mut v = viewer();
    let hit = v.pointer_moved(ON_SOLID.0, ON_SOLID.1);
    assert!(hit.is_some());
    assert!(!v.is_highlighted());
    assert_eq!(v.face_material_kind(0), Some(MaterialKind::Base));
}

#[test]
fn test_highlight_swaps_every_face() {
    let mut v = viewer();
    v.set_flag(DisplayFlag::HighlightMode, true);

    assert!(v.pointer_moved(ON_SOLID.0, ON_SOLID.1).is_some());
    assert!(v.is_highlighted());
    for i in 0..v.faces().len() {
        assert_eq!(v.face_material_kind(i), Some(MaterialKind::Highlight));
    }

    assert!(v.pointer_moved(OFF_SOLID.0, OFF_SOLID.1).is_none());
    assert!(!v.is_highlighted());
    assert_eq!(v.face_material_kind(0), Some(MaterialKind::Base));
    assert_eq!(v.face_material_kind(1), Some(MaterialKind::Side));
}

#[test]
fn test_disabling_highlight_restores_defaults() {
    let mut v = viewer();
    v.set_flag_by_name("highlightMode", true).unwrap();
    v.pointer_moved(ON_SOLID.0, ON_SOLID.1);
    assert!(v.is_highlighted());

    v.set_flag_by_name("highlightMode", false).unwrap();
    assert!(!v.is_highlighted());
    let base = v.face_material(0).unwrap();
    let side = v.face_material(1).unwrap();
    assert_eq!(base.color, BASE_COLOR);
    assert_eq!(side.color, SIDE_COLOR);
    assert_ne!(base, side);
}

#[test]
fn test_transparency_reapplied_after_swaps() {
    let mut v = viewer();
    v.set_flag(DisplayFlag::TransparentMode, true);
    v.set_flag(DisplayFlag::HighlightMode, true);

    v.pointer_moved(ON_SOLID.0, ON_SOLID.1);
    let highlight = v.face_material(0).unwrap();
    assert!(highlight.transparent);
    assert_eq!(highlight.opacity, TRANSPARENT_OPACITY);

    v.pointer_left();
    for material in v.render_faces().iter().map(|f| f.material) {
        assert!(material.transparent);
        assert_eq!(material.opacity, TRANSPARENT_OPACITY);
    }

    v.set_flag(DisplayFlag::TransparentMode, false);
    assert!(!v.face_material(0).unwrap().transparent);
}

#[test]
fn test_rebuild_clears_highlight() {
    let mut v = viewer();
    v.set_flag(DisplayFlag::HighlightMode, true);
    v.pointer_moved(ON_SOLID.0, ON_SOLID.1);
    assert!(v.is_highlighted());

    v.set_base_sides(3).unwrap();
    assert!(!v.is_highlighted());
    assert_eq!(v.face_material_kind(0), Some(MaterialKind::Base));
    // Next frame picks against the new solid
    v.tick();
    assert!(v.is_highlighted());
}

#[test]
fn test_flag_names_and_toggle() {
    let mut v = viewer();
    assert_eq!(v.toggle_flag("showLabels"), Ok(true));
    assert_eq!(v.toggle_flag("showLabels"), Ok(false));
    assert_eq!(
        v.set_flag_by_name("wireframe", true),
        Err(ViewError::UnknownFlag {
            name: "wireframe".to_string()
        })
    );
    assert_eq!(v.flags(), DisplayFlags::default());
}

#[test]
fn test_labels_follow_closed_vertices() {
    let mut v = viewer();
    v.set_flag(DisplayFlag::ShowLabels, true);
    v.set_morph_target(1).unwrap();
    settle(&mut v);

    let labels = v.labels();
    let names: Vec<&str> = labels.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C", "D", "P"]);
    for (label, vertex) in labels.iter().zip(v.base_vertices()) {
        assert_eq!(label.anchor, *vertex);
    }
    assert_eq!(labels[4].anchor, v.apex());
}

#[test]
fn test_height_indicator_visibility() {
    let mut v = viewer();
    v.set_flag(DisplayFlag::HeightVisible, true);
    let indicator = v.height_indicator().expect("visible");
    assert_eq!(indicator.line.start, v.apex());
    assert_eq!(indicator.line.end, DVec3::ZERO);
    v.set_flag(DisplayFlag::HeightVisible, false);
    assert!(v.height_indicator().is_none());
}

#[test]
fn test_edges_match_side_count() {
    let mut v = viewer();
    assert_eq!(v.edges().len(), 8);
    v.set_base_sides(3).unwrap();
    assert_eq!(v.edges().len(), 6);
}

#[test]
fn test_invalid_measurement_keeps_prior_results() {
    let mut v = viewer();
    let first = v.compute_measurements(4, 2.0, 3.0).unwrap();
    assert_eq!(first.display().base_area, "4.00");
    assert_eq!(first.display().volume, "4.00");

    assert!(v.compute_measurements(4, -1.0, 3.0).is_err());
    assert!(v.compute_measurements(4, 2.0, 0.0).is_err());
    assert!(v.compute_measurements_from_input(4, "abc", "3").is_err());
    assert!(v.compute_measurements_from_input(4, "", "3").is_err());
    assert_eq!(v.measurements(), Some(&first));

    let second = v.compute_measurements_from_input(3, "2", "3").unwrap();
    assert_eq!(v.measurements(), Some(&second));
}

#[test]
fn test_measurements_do_not_touch_solid() {
    let mut v = viewer();
    v.compute_measurements(6, 5.0, 10.0).unwrap();
    assert_eq!(v.sides(), 4);
    assert_eq!(v.apex().y, v.config().height);
}

#[test]
fn test_viewport_updates_aspect() {
    let mut v = viewer();
    v.set_viewport(1200.0, 600.0).unwrap();
    assert_eq!(v.camera().aspect_ratio, 2.0);

    assert!(v.set_viewport(0.0, 600.0).is_err());
    assert_eq!(v.viewport().width, 1200.0);
    assert_eq!(v.camera().aspect_ratio, 2.0);
}

#[test]
fn test_camera_moves_change_picking() {
    let mut v = viewer();
    assert!(v.pointer_moved(ON_SOLID.0, ON_SOLID.1).is_some());
    // Looking away from the solid
    v.set_camera(DVec3::new(4.0, 4.0, 4.0), DVec3::new(20.0, 4.0, 20.0))
        .unwrap();
    v.tick();
    assert!(v.hovered().is_none());
}

#[test]
fn test_degenerate_camera_rejected() {
    let mut v = viewer();
    let before = *v.camera();
    let err = v.set_camera(DVec3::ONE, DVec3::ONE).unwrap_err();
    assert!(matches!(err, ViewError::DegenerateCamera { .. }));
    assert_eq!(*v.camera(), before);
}

#[test]
fn test_top_down_camera_keeps_labels_and_picking() {
    let mut v = viewer();
    v.set_flag(DisplayFlag::ShowLabels, true);
    v.set_camera(DVec3::new(0.0, 5.0, 0.0), DVec3::ZERO).unwrap();

    for label in v.labels() {
        assert!(label.screen.x.is_finite() && label.screen.y.is_finite());
    }
    // The apex projects onto the view center
    let apex = v.labels().last().map(|l| l.screen).unwrap();
    assert!((apex.x - v.viewport().width / 2.0).abs() < 1e-6);

    let hit = v.pointer_moved(0.02, 0.03).expect("ray near the apex");
    assert!(matches!(hit.kind, FaceKind::Lateral(_)));

    // Straight up from below sees the base
    v.set_camera(DVec3::new(0.0, -5.0, 0.0), DVec3::ZERO).unwrap();
    let hit = v.pointer_moved(0.1, 0.1).expect("ray onto the base");
    assert_eq!(hit.kind, FaceKind::Base);
}

#[test]
fn test_render_face_matches_render_faces() {
    let mut v = viewer();
    v.set_flag(DisplayFlag::HighlightMode, true);
    v.pointer_moved(ON_SOLID.0, ON_SOLID.1);
    v.set_morph_target(1).unwrap();
    v.tick();

    let all = v.render_faces();
    for (i, face) in all.iter().enumerate() {
        assert_eq!(v.render_face(i).as_ref(), Some(face));
    }
    assert!(v.render_face(all.len()).is_none());
}
