//! # OBJ Export
//!
//! ```text
//! # OBJ exported from ribbon-mesh
//! v x y z        one line per vertex, scaled
//! f a b c        one line per triangle, 1-based, in mesh winding order
//! ```

use super::Fixed;
use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::OBJ_HEADER;
use std::io::Write;

/// Writes `mesh` as Wavefront OBJ with every vertex multiplied by `scale`.
pub fn write_obj<W: Write>(mesh: &Mesh, scale: f64, mut writer: W) -> Result<(), MeshError> {
    writeln!(writer, "{OBJ_HEADER}")?;

    for v in mesh.vertices() {
        let p = *v * scale;
        writeln!(writer, "v {} {} {}", Fixed(p.x), Fixed(p.y), Fixed(p.z))?;
    }

    for &[a, b, c] in mesh.triangles() {
        writeln!(writer, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }

    writer.flush()?;
    Ok(())
}

/// Renders `mesh` as an OBJ document.
///
/// ```rust
/// use glam::DVec3;
/// use ribbon_mesh::export::to_obj_string;
/// use ribbon_mesh::Mesh;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(2.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 2.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
///
/// let text = to_obj_string(&mesh, 0.5).unwrap();
/// assert!(text.contains("v 1.000000 0.000000 0.000000\n"));
/// assert!(text.ends_with("f 1 2 3\n"));
/// ```
pub fn to_obj_string(mesh: &Mesh, scale: f64) -> Result<String, MeshError> {
    let mut buf = Vec::with_capacity(32 * (mesh.vertex_count() + mesh.triangle_count()) + 64);
    write_obj(mesh, scale, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn quad() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -1.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, -1.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 1.0, -0.0));
        mesh.add_vertex(DVec3::new(-1.0, 1.0, 0.25));
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        mesh
    }

    #[test]
    fn test_layout() {
        let text = to_obj_string(&quad(), 2.0).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "# OBJ exported from ribbon-mesh",
                "v -2.000000 -2.000000 0.000000",
                "v 2.000000 -2.000000 0.000000",
                "v 2.000000 2.000000 0.000000",
                "v -2.000000 2.000000 0.500000",
                "f 1 2 3",
                "f 1 3 4",
            ]
        );
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_empty_mesh_is_header_only() {
        assert_eq!(
            to_obj_string(&Mesh::new(), 1.0).unwrap(),
            "# OBJ exported from ribbon-mesh\n"
        );
    }

    #[test]
    fn test_negative_zero_after_scaling() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, -0.0, 1e-9));
        let text = to_obj_string(&mesh, -1.0).unwrap();
        assert!(text.contains("v 0.000000 0.000000 0.000000\n"));
    }
}
