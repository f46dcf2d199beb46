//! # Mesh Data Structure
//!
//! Append-only triangle mesh shared by every layer of a build.

use crate::error::MeshError;
use config::constants::{DEGENERATE_NORMAL_EPSILON, MAX_VERTICES};
use glam::DVec3;
use std::collections::HashMap;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64. Export to f32 only happens at the
/// WASM boundary for GPU rendering.
///
/// # Example
///
/// ```rust
/// use ribbon_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate_indices().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Checks that `additional` more vertices still fit in `u32` indices.
    pub fn reserve_vertices(&mut self, additional: usize) -> Result<(), MeshError> {
        let count = self.vertices.len().saturating_add(additional);
        if count > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count,
                max: MAX_VERTICES,
            });
        }
        self.vertices.reserve(additional);
        Ok(())
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the three corner positions of a triangle.
    #[inline]
    pub fn triangle_positions(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [self.vertex(a), self.vertex(b), self.vertex(c)]
    }

    /// Unit normal of a triangle by the right-hand rule.
    ///
    /// Returns `DVec3::ZERO` for zero-area triangles.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [v0, v1, v2] = self.triangle_positions(index);
        triangle_normal(v0, v1, v2)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Checks that every triangle index addresses an existing vertex and no
    /// triangle repeats a vertex.
    pub fn validate_indices(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();

        for (face, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::validation(format!(
                    "triangle {face} references vertex {index} of {vertex_count}"
                )));
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::validation(format!(
                    "triangle {face} repeats a vertex: {tri:?}"
                )));
            }
        }

        Ok(())
    }

    /// Checks that the mesh is a closed, consistently oriented surface.
    ///
    /// Every directed edge must occur exactly once and its reverse must also
    /// occur exactly once.
    pub fn check_closed(&self) -> Result<(), MeshError> {
        let mut edges: HashMap<(u32, u32), usize> =
            HashMap::with_capacity(self.triangles.len() * 3);

        for tri in &self.triangles {
            for k in 0..3 {
                let edge = (tri[k], tri[(k + 1) % 3]);
                *edges.entry(edge).or_insert(0) += 1;
            }
        }

        for (&(a, b), &count) in &edges {
            if count != 1 {
                return Err(MeshError::invalid_topology(format!(
                    "directed edge ({a}, {b}) used by {count} triangles"
                )));
            }
            if edges.get(&(b, a)) != Some(&1) {
                return Err(MeshError::invalid_topology(format!(
                    "edge ({a}, {b}) has no opposite half-edge"
                )));
            }
        }

        Ok(())
    }

    /// Returns true when [`Mesh::check_closed`] passes.
    pub fn is_closed(&self) -> bool {
        self.check_closed().is_ok()
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

/// Unit normal of the triangle `(v0, v1, v2)`, or zero when degenerate.
pub fn triangle_normal(v0: DVec3, v1: DVec3, v2: DVec3) -> DVec3 {
    let normal = (v1 - v0).cross(v2 - v0);
    let len2 = normal.length_squared();
    if !(len2 > DEGENERATE_NORMAL_EPSILON) || !len2.is_finite() {
        return DVec3::ZERO;
    }
    normal / len2.sqrt()
}
