//! # Extrusion Operations
//!
//! Turns a closed contour into a closed ribbon shell:
//! - **ribbon_extrude**: sweep a rectangular `width × depth` cross-section
//!   along the contour, producing outer/inner walls and top/bottom lids
//!
//! ## Vertex Layout
//!
//! Each contour point contributes four consecutive vertices:
//!
//! ```text
//! base + 0  outer-top      base + 1  inner-top
//! base + 2  outer-bottom   base + 3  inner-bottom
//! ```
//!
//! "Inner" lies toward the contour interior (the left of the direction of
//! travel for a counter-clockwise contour).

mod ribbon;

#[cfg(test)]
mod tests;

pub use ribbon::ribbon_extrude;

/// Rectangular cross-section of a ribbon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonProfile {
    /// Extent across the contour, in the contour plane.
    pub width: f64,
    /// Extent along Z, centered on the contour plane.
    pub depth: f64,
}

impl RibbonProfile {
    /// Creates a profile.
    pub fn new(width: f64, depth: f64) -> Self {
        Self { width, depth }
    }
}

/// What one extrusion appended to the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RibbonStats {
    /// Index of the first appended vertex.
    pub first_vertex: u32,
    /// Number of appended vertices (`4n`).
    pub vertices: usize,
    /// Index of the first appended triangle.
    pub first_triangle: usize,
    /// Number of appended triangles (`8n`).
    pub triangles: usize,
}
