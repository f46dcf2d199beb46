//! Tests for the WASM-facing helpers.

use super::*;

/// Empty input builds the default ribbon.
#[test]
fn build_with_empty_json_uses_defaults() {
    let mesh = build_ribbon_internal("").expect("defaults are valid");
    let direct = build_mesh(&ShapeParams::default());

    assert_eq!(mesh.vertex_count() as usize, direct.vertex_count());
    assert_eq!(mesh.triangle_count() as usize, direct.triangle_count());
    assert_eq!(mesh.vertices().len(), direct.vertex_count() * 3);
    assert_eq!(mesh.indices().len(), direct.triangle_count() * 3);
}

/// The handle carries the scale that maps the mesh onto TARGET_DIAM_MM.
#[test]
fn handle_reports_scale() {
    let mesh = build_ribbon_internal(r#"{ "LAYERS": 2, "TARGET_DIAM_MM": 30 }"#).unwrap();
    assert!(mesh.diameter_px() > 0.0);
    let scaled = mesh.diameter_px() * mesh.export_scale();
    assert!((scaled - 30.0).abs() < 1e-9);
}

/// Indices never address past the vertex buffer.
#[test]
fn handle_buffers_are_consistent() {
    let mesh = build_ribbon_internal(r#"{ "LAYERS": 3, "SEED": 5 }"#).unwrap();
    let vertex_count = mesh.vertex_count();
    assert!(mesh.indices().iter().all(|&i| i < vertex_count));
    assert!(mesh.vertices().iter().all(|v| v.is_finite()));
}

/// Zero layers gives an empty handle with the unit scale fallback.
#[test]
fn zero_layers_is_empty() {
    let mesh = build_ribbon_internal(r#"{ "LAYERS": 0 }"#).unwrap();
    assert!(mesh.is_empty());
    assert_eq!(mesh.export_scale(), 1.0);
}

/// Malformed JSON and out-of-range values are rejected.
#[test]
fn bad_params_are_rejected() {
    let err = build_ribbon_internal("{ LAYERS: 2 ").unwrap_err();
    assert!(matches!(err, WasmError::Json(_)));

    let err = build_ribbon_internal(r#"{ "STEP_A": -0.5 }"#).unwrap_err();
    assert!(matches!(err, WasmError::Mesh(MeshError::InvalidParameter { name: "STEP_A", .. })));
    assert!(err.to_string().contains("STEP_A"));

    let err = build_ribbon_internal(r#"{ "LAYERS": 4294967295 }"#).unwrap_err();
    assert!(matches!(err, WasmError::Mesh(MeshError::InvalidParameter { name: "LAYERS", .. })));
}

#[test]
fn default_params_round_trip() {
    let params = parse_params(&default_params_json()).unwrap();
    assert_eq!(params.layers, ShapeParams::default().layers);
    assert_eq!(params.seed, ShapeParams::default().seed);
}

#[test]
fn obj_export_matches_mesh() {
    let json = r#"{ "LAYERS": 1 }"#;
    let text = export_obj_internal(json).unwrap();
    let mesh = build_ribbon_internal(json).unwrap();

    assert!(text.starts_with("# OBJ exported from ribbon-mesh\n"));
    let faces = text.lines().filter(|l| l.starts_with("f ")).count();
    assert_eq!(faces, mesh.triangle_count() as usize);
}

#[test]
fn stl_export_names_solid() {
    let text = export_stl_internal(r#"{ "LAYERS": 1 }"#, "pendant").unwrap();
    assert!(text.starts_with("solid pendant\n"));
    assert!(text.ends_with("endsolid pendant\n"));

    let text = export_stl_internal(r#"{ "LAYERS": 0 }"#, " ").unwrap();
    assert_eq!(text, "solid ribbon\nendsolid ribbon\n");
}
