//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use ribbon_mesh::dimensions::{diameter_px, export_scale};
use ribbon_mesh::Mesh;
use wasm_bindgen::prelude::*;

/// A built ribbon mesh, flattened for GPU upload.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = build_ribbon(JSON.stringify({ LAYERS: 9, SEED: 1337 }));
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
///
/// console.log(`${mesh.diameter_px} px → x${mesh.export_scale}`);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    vertex_count: u32,
    triangle_count: u32,
    diameter_px: f64,
    export_scale: f64,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Largest planar extent in model units.
    #[wasm_bindgen(getter)]
    pub fn diameter_px(&self) -> f64 {
        self.diameter_px
    }

    /// Factor mapping the model onto the target diameter in millimetres.
    #[wasm_bindgen(getter)]
    pub fn export_scale(&self) -> f64 {
        self.export_scale
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Flattens `mesh` and records its scale for `target_mm`.
    pub fn from_mesh(mesh: &Mesh, target_mm: f64) -> Self {
        let diameter = diameter_px(mesh.vertices());
        Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
            diameter_px: diameter,
            export_scale: export_scale(target_mm, diameter),
        }
    }
}
