//! WASM-facing entry points for the ribbon mesh generator.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Parameters cross the boundary as JSON using the editor's
//! upper-case keys; missing keys take their defaults. Native tests use the
//! `*_internal` helpers, which return Rust errors instead of `JsValue`.
//!
//! ```
//! let mesh = ribbon_wasm::build_ribbon_internal(r#"{ "LAYERS": 2 }"#).unwrap();
//! assert!(mesh.triangle_count() > 0);
//! ```

mod mesh_handle;

pub use mesh_handle::MeshHandle;

use config::constants::{DEFAULT_STL_SOLID_NAME, RANDOM_SEED_BOUND};
use ribbon_mesh::dimensions::{diameter_px, export_scale};
use ribbon_mesh::export::{default_file_name, to_obj_string, to_stl_string, ExportFormat};
use ribbon_mesh::{build_mesh, Mesh, MeshError, ShapeParams};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors surfaced to JavaScript.
#[derive(Debug, Error)]
pub enum WasmError {
    /// The parameter JSON did not parse.
    #[error("Invalid parameter JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Parameter validation or export failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "ribbon-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default parameters as a JSON preset.
///
/// # Examples
/// ```
/// let json = ribbon_wasm::default_params_json();
/// assert!(json.contains("\"LAYERS\":9"));
/// ```
#[wasm_bindgen]
pub fn default_params_json() -> String {
    serde_json::to_string(&ShapeParams::default()).unwrap_or_default()
}

/// Returns a fresh seed in `[0, 100000)` from the host's `Math.random`.
#[wasm_bindgen]
pub fn random_seed() -> u32 {
    let unit = js_sys::Math::random();
    (unit * RANDOM_SEED_BOUND as f64).floor() as u32
}

/// Builds the ribbon mesh for a JSON parameter set.
///
/// # Errors
/// Returns a JavaScript error with a readable message when the JSON does
/// not parse or a parameter is out of range.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = build_ribbon(JSON.stringify({ SEED: 42 }));
/// // console.log(mesh.triangle_count);
/// ```
#[wasm_bindgen]
pub fn build_ribbon(params_json: &str) -> Result<MeshHandle, JsValue> {
    build_ribbon_internal(params_json).map_err(to_js_error)
}

/// Builds the mesh and renders it as an OBJ document scaled to
/// `TARGET_DIAM_MM`.
#[wasm_bindgen]
pub fn export_obj(params_json: &str) -> Result<String, JsValue> {
    export_obj_internal(params_json).map_err(to_js_error)
}

/// Builds the mesh and renders it as an ASCII STL solid scaled to
/// `TARGET_DIAM_MM`. An empty `name` falls back to `ribbon`.
#[wasm_bindgen]
pub fn export_stl(params_json: &str, name: &str) -> Result<String, JsValue> {
    export_stl_internal(params_json, name).map_err(to_js_error)
}

/// Suggested download name for a parameter set, e.g. `arete_D45mm.stl`.
#[wasm_bindgen]
pub fn export_file_name(params_json: &str, extension: &str) -> Result<String, JsValue> {
    let params = parse_params(params_json).map_err(to_js_error)?;
    let format: ExportFormat = extension.parse().map_err(to_js_error)?;
    Ok(default_file_name(params.target_diam_mm, format))
}

/// Parses and validates a JSON parameter set. An empty string yields the
/// defaults.
pub fn parse_params(params_json: &str) -> Result<ShapeParams, WasmError> {
    let params = if params_json.trim().is_empty() {
        ShapeParams::default()
    } else {
        serde_json::from_str(params_json)?
    };
    params.validate()?;
    Ok(params)
}

/// Host-only helper behind [`build_ribbon`].
pub fn build_ribbon_internal(params_json: &str) -> Result<MeshHandle, WasmError> {
    let params = parse_params(params_json)?;
    let mesh = build_mesh(&params);
    Ok(MeshHandle::from_mesh(&mesh, params.target_diam_mm))
}

/// Host-only helper behind [`export_obj`].
pub fn export_obj_internal(params_json: &str) -> Result<String, WasmError> {
    let (mesh, scale) = build_scaled(params_json)?;
    Ok(to_obj_string(&mesh, scale)?)
}

/// Host-only helper behind [`export_stl`].
pub fn export_stl_internal(params_json: &str, name: &str) -> Result<String, WasmError> {
    let (mesh, scale) = build_scaled(params_json)?;
    let name = if name.trim().is_empty() {
        DEFAULT_STL_SOLID_NAME
    } else {
        name
    };
    Ok(to_stl_string(&mesh, scale, name)?)
}

fn build_scaled(params_json: &str) -> Result<(Mesh, f64), WasmError> {
    let params = parse_params(params_json)?;
    let mesh = build_mesh(&params);
    let scale = export_scale(params.target_diam_mm, diameter_px(mesh.vertices()));
    Ok((mesh, scale))
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests;
