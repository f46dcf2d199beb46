//! # Ribbon Extrusion
//!
//! Offsets every contour point across the contour (along the planar normal
//! of its central-difference tangent) and along Z, then stitches the four
//! resulting rings into a closed box-section tube.

use super::{RibbonProfile, RibbonStats};
use crate::contour::Contour;
use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_CONTOUR_POINTS;
use glam::DVec2;

const OUTER_TOP: u32 = 0;
const INNER_TOP: u32 = 1;
const OUTER_BOTTOM: u32 = 2;
const INNER_BOTTOM: u32 = 3;
const RING_STRIDE: u32 = 4;

/// Appends the ribbon shell of `contour` to `mesh`.
///
/// Produces `4n` vertices and `8n` triangles for an `n`-point contour. The
/// shell is closed and every triangle faces out of the solid; it shares no
/// vertices with geometry already in the mesh.
///
/// # Errors
///
/// - [`MeshError::DegenerateGeometry`] when the contour has fewer than 3 points
/// - [`MeshError::TooManyVertices`] when the new vertices would overflow `u32` indices
///
/// Nothing is appended when an error is returned.
///
/// # Example
///
/// ```rust
/// use ribbon_mesh::contour::Contour;
/// use ribbon_mesh::ops::extrude::{ribbon_extrude, RibbonProfile};
/// use ribbon_mesh::Mesh;
/// use glam::DVec3;
///
/// let triangle = Contour::new(vec![
///     DVec3::new(10.0, 0.0, 0.0),
///     DVec3::new(-5.0, 8.0, 0.0),
///     DVec3::new(-5.0, -8.0, 0.0),
/// ]);
/// let mut mesh = Mesh::new();
/// let stats = ribbon_extrude(&mut mesh, &triangle, &RibbonProfile::new(2.0, 2.0)).unwrap();
/// assert_eq!(stats.vertices, 12);
/// assert_eq!(mesh.triangle_count(), 24);
/// assert!(mesh.is_closed());
/// ```
pub fn ribbon_extrude(
    mesh: &mut Mesh,
    contour: &Contour,
    profile: &RibbonProfile,
) -> Result<RibbonStats, MeshError> {
    let points = contour.points();
    let n = points.len();
    if n < MIN_CONTOUR_POINTS {
        return Err(MeshError::degenerate(format!(
            "contour has {n} points, at least {MIN_CONTOUR_POINTS} required"
        )));
    }

    mesh.reserve_vertices(n * RING_STRIDE as usize)?;

    let half_width = profile.width * 0.5;
    let half_depth = profile.depth * 0.5;
    let first_vertex = mesh.vertex_count() as u32;
    let first_triangle = mesh.triangle_count();

    for i in 0..n {
        let p = points[i];
        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];

        let tangent = (next - prev).truncate().normalize_or_zero();
        let normal = DVec2::new(-tangent.y, tangent.x);

        let outer = p.truncate() - normal * half_width;
        let inner = p.truncate() + normal * half_width;

        mesh.add_vertex(outer.extend(half_depth));
        mesh.add_vertex(inner.extend(half_depth));
        mesh.add_vertex(outer.extend(-half_depth));
        mesh.add_vertex(inner.extend(-half_depth));
    }

    let ring = |i: usize, corner: u32| first_vertex + i as u32 * RING_STRIDE + corner;

    for i in 0..n {
        let j = (i + 1) % n;

        let (ot_i, it_i, ob_i, ib_i) = (
            ring(i, OUTER_TOP),
            ring(i, INNER_TOP),
            ring(i, OUTER_BOTTOM),
            ring(i, INNER_BOTTOM),
        );
        let (ot_j, it_j, ob_j, ib_j) = (
            ring(j, OUTER_TOP),
            ring(j, INNER_TOP),
            ring(j, OUTER_BOTTOM),
            ring(j, INNER_BOTTOM),
        );

        // Top lid, facing +Z
        mesh.add_triangle(ot_i, ot_j, it_j);
        mesh.add_triangle(ot_i, it_j, it_i);

        // Bottom lid, facing -Z
        mesh.add_triangle(ob_i, ib_j, ob_j);
        mesh.add_triangle(ob_i, ib_i, ib_j);

        // Outer wall, facing away from the interior
        mesh.add_triangle(ob_i, ob_j, ot_j);
        mesh.add_triangle(ob_i, ot_j, ot_i);

        // Inner wall, facing the interior
        mesh.add_triangle(ib_i, it_j, ib_j);
        mesh.add_triangle(ib_i, it_i, it_j);
    }

    Ok(RibbonStats {
        first_vertex,
        vertices: n * RING_STRIDE as usize,
        first_triangle,
        triangles: mesh.triangle_count() - first_triangle,
    })
}
