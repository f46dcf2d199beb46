//! # ASCII STL Export
//!
//! Facet normals are computed from the scaled triangle, so a negative scale
//! still yields unit normals consistent with the written winding.

use super::Fixed;
use crate::error::MeshError;
use crate::mesh::{triangle_normal, Mesh};
use std::io::Write;

/// Writes `mesh` as an ASCII STL solid named `name`, every vertex multiplied
/// by `scale`.
///
/// Zero-area triangles get the normal `0 0 0`.
pub fn write_stl_ascii<W: Write>(
    mesh: &Mesh,
    scale: f64,
    name: &str,
    mut writer: W,
) -> Result<(), MeshError> {
    writeln!(writer, "solid {name}")?;

    for face in 0..mesh.triangle_count() {
        let [v0, v1, v2] = mesh.triangle_positions(face).map(|v| v * scale);
        let n = triangle_normal(v0, v1, v2);

        writeln!(writer, "  facet normal {} {} {}", Fixed(n.x), Fixed(n.y), Fixed(n.z))?;
        writeln!(writer, "    outer loop")?;
        for v in [v0, v1, v2] {
            writeln!(writer, "      vertex {} {} {}", Fixed(v.x), Fixed(v.y), Fixed(v.z))?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {name}")?;
    writer.flush()?;
    Ok(())
}

/// Renders `mesh` as an ASCII STL document.
pub fn to_stl_string(mesh: &Mesh, scale: f64, name: &str) -> Result<String, MeshError> {
    let mut buf = Vec::with_capacity(256 * mesh.triangle_count() + 2 * name.len() + 16);
    write_stl_ascii(mesh, scale, name, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn single() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(4.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 4.0, 0.0));
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_single_facet() {
        let text = to_stl_string(&single(), 0.5, "ribbon").unwrap();
        let expected = "\
solid ribbon
  facet normal 0.000000 0.000000 1.000000
    outer loop
      vertex 0.000000 0.000000 0.000000
      vertex 2.000000 0.000000 0.000000
      vertex 0.000000 2.000000 0.000000
    endloop
  endfacet
endsolid ribbon
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_degenerate_facet_has_zero_normal() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::X * 2.0);
        mesh.add_triangle(0, 1, 2);
        let text = to_stl_string(&mesh, 1.0, "flat").unwrap();
        assert!(text.contains("  facet normal 0.000000 0.000000 0.000000\n"));
    }

    #[test]
    fn test_normal_follows_scaled_vertices() {
        let text = to_stl_string(&single(), -1.0, "m").unwrap();
        // Point reflection of a triangle in the z = 0 plane keeps its normal
        assert!(text.contains("  facet normal 0.000000 0.000000 1.000000\n"));
        assert!(text.contains("      vertex -4.000000 0.000000 0.000000\n"));
    }

    #[test]
    fn test_facet_count_matches_triangles() {
        let mut mesh = single();
        mesh.add_triangle(0, 2, 1);
        let text = to_stl_string(&mesh, 1.0, "two").unwrap();
        assert_eq!(text.matches("  facet normal").count(), 2);
        assert_eq!(text.matches("      vertex").count(), 6);
    }
}
