//! Tests for the WASM-facing viewer helpers.
//!
//! Everything here stays on the Rust side of the boundary; nothing touches
//! `JsValue` or typed arrays, which need a JavaScript host.

use super::*;
use limas_view::DisplayFlag;

fn viewer() -> LimasViewer {
    LimasViewer::new_internal().expect("default viewer")
}

/// Confirms the default viewer shows the square pyramid.
#[test]
fn default_viewer_is_square_pyramid() {
    let v = viewer();
    assert_eq!(v.sides(), default_base_sides());
    assert_eq!(v.face_count(), 5);
    assert_eq!(v.name(), "Limas Segiempat");
    assert_eq!(v.morph_progress(), 0.0);
}

/// Face snapshots carry buffers and resolved materials.
#[test]
fn face_handles_have_buffers_and_materials() {
    let v = viewer();
    let base = v.face(0).expect("base face");
    assert!(base.is_base());
    assert_eq!(base.vertex_count(), 12);
    assert_eq!(base.vertex_data().len(), 36);
    assert_eq!(base.normal_data().len(), 36);
    assert_eq!(base.color(), config::constants::BASE_COLOR);
    assert!(!base.transparent());

    let side = v.face(1).expect("lateral face");
    assert_eq!(side.lateral_index(), 0);
    assert_eq!(side.vertex_count(), 3);
    assert_eq!(side.color(), config::constants::SIDE_COLOR);

    assert!(v.face(5).is_none());
}

/// Face buffers follow the morph.
#[test]
fn face_buffers_follow_morph() {
    let mut v = viewer();
    let closed = v.face(1).expect("face").vertex_data().to_vec();
    v.viewer_mut().set_morph_target(1).expect("valid target");
    v.tick();
    let moving = v.face(1).expect("face").vertex_data().to_vec();
    assert_ne!(closed, moving);
    // The base never morphs
    assert_eq!(v.face(0).expect("face").vertex_data().len(), 36);
}

/// Measurement reports include both raw values and display strings.
#[test]
fn measurement_report_json() {
    let mut v = viewer();
    let json = v
        .compute_measurements_internal(4, 2.0, 3.0)
        .expect("valid input");
    let report: serde_json::Value = serde_json::from_str(&json).expect("json");
    assert_eq!(report["display"]["baseArea"], "4.00");
    assert_eq!(report["display"]["volume"], "4.00");
    assert_eq!(report["sides"], 4);
    assert!(report["totalArea"].as_f64().expect("number") > 4.0);
}

/// Rejected measurements keep the previous report.
#[test]
fn rejected_measurement_keeps_report() {
    let mut v = viewer();
    assert_eq!(v.measurements_json_internal().expect("json"), "null");
    let first = v
        .compute_measurements_from_input_internal(3, "2", "3")
        .expect("valid input");
    let err = v
        .compute_measurements_from_input_internal(3, "two", "3")
        .unwrap_err();
    assert!(matches!(err, BridgeError::View(_)));
    assert_eq!(v.measurements_json_internal().expect("json"), first);
}

/// Labels are hidden until the flag is on.
#[test]
fn labels_json_respects_flag() {
    let mut v = viewer();
    assert_eq!(v.labels_json_internal().expect("json"), "[]");
    v.viewer_mut().set_flag(DisplayFlag::ShowLabels, true);
    let labels: serde_json::Value =
        serde_json::from_str(&v.labels_json_internal().expect("json")).expect("json");
    let names: Vec<&str> = labels
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|l| l["name"].as_str())
        .collect();
    assert_eq!(names, ["A", "B", "C", "D", "P"]);
}

/// Edges and the height indicator serialize.
#[test]
fn edges_and_height_json() {
    let mut v = viewer();
    let edges: serde_json::Value =
        serde_json::from_str(&v.edges_json_internal().expect("json")).expect("json");
    assert_eq!(edges.as_array().expect("array").len(), 8);

    assert_eq!(v.height_indicator_json_internal().expect("json"), "null");
    v.viewer_mut().set_flag(DisplayFlag::HeightVisible, true);
    let height: serde_json::Value =
        serde_json::from_str(&v.height_indicator_json_internal().expect("json")).expect("json");
    assert_eq!(height["markerRadius"], 0.05);
}

/// Out-of-range configuration is rejected.
#[test]
fn invalid_config_rejected() {
    let err = LimasViewer::with_config_internal(-1.0, 2.0, 0.08, 1e-4).unwrap_err();
    assert!(matches!(err, BridgeError::View(ViewError::Config(_))));
    assert!(LimasViewer::with_config_internal(2.0, 3.0, 0.1, 0.0).is_ok());
}

/// Line colors exposed to the UI.
#[test]
fn line_colors() {
    assert_eq!(edge_color(), 0x000000);
    assert_eq!(height_line_color(), 0x0000ff);
}

/// Side count bounds and names exposed to the UI.
#[test]
fn side_count_helpers() {
    assert_eq!(min_base_sides(), 3);
    assert_eq!(max_base_sides(), 6);
    let names: Vec<Option<String>> = (min_base_sides()..=max_base_sides()).map(pyramid_name).collect();
    assert!(names.iter().all(Option::is_some));
}

/// Pointer hits are reported and drive the highlight.
#[test]
fn pointer_drives_highlight() {
    let mut v = viewer();
    v.viewer_mut().set_flag(DisplayFlag::HighlightMode, true);
    assert!(v.pointer_moved(0.0, 0.0));
    assert!(v.highlighted());
    assert!(v.face(0).expect("face").highlighted());
    v.pointer_left();
    assert!(!v.highlighted());
}

/// Bridge errors keep the viewer's message and label serialization failures.
#[test]
fn bridge_error_messages() {
    let view = ViewError::InvalidMorphTarget { value: 2 };
    let expected = view.to_string();
    let err = BridgeError::from(view);
    assert!(matches!(err, BridgeError::View(ViewError::InvalidMorphTarget { value: 2 })));
    assert_eq!(err.to_string(), expected);

    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = BridgeError::from(json);
    assert!(err.to_string().starts_with("serialization failed: "));
}

/// Single-face handles match the full render list.
#[test]
fn face_handles_match_render_faces() {
    let mut v = viewer();
    v.viewer_mut().set_base_sides(6).expect("valid sides");
    let faces = v.viewer_mut().render_faces();
    assert_eq!(faces.len(), 7);
    for (i, face) in faces.iter().enumerate() {
        let handle = v.face(i).expect("face");
        assert_eq!(handle.vertex_data(), face.vertices.as_slice());
        assert_eq!(handle.color(), face.material.color);
    }
    assert!(v.face(faces.len()).is_none());
}
