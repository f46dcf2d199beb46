//! # Mesh Export
//!
//! Text exporters for physical-scale output:
//! - **obj**: Wavefront OBJ, vertices and 1-based faces
//! - **stl**: ASCII STL with per-facet unit normals
//!
//! Both multiply every vertex by a uniform scale (see
//! [`crate::dimensions::export_scale`]) and print coordinates with six
//! decimals.

pub mod obj;
pub mod stl;

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::EXPORT_FILE_PREFIX;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

pub use obj::{to_obj_string, write_obj};
pub use stl::{to_stl_string, write_stl_ascii};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Wavefront OBJ.
    Obj,
    /// ASCII STL.
    Stl,
}

impl ExportFormat {
    /// Picks the format from a file extension, case-insensitively.
    ///
    /// ```rust
    /// use ribbon_mesh::export::ExportFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(ExportFormat::from_path(Path::new("ring.STL")), Some(ExportFormat::Stl));
    /// assert_eq!(ExportFormat::from_path(Path::new("ring")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Obj => "obj",
            Self::Stl => "stl",
        }
    }

    /// Writes `mesh` scaled by `scale` in this format.
    ///
    /// `name` becomes the STL solid name and is ignored for OBJ.
    pub fn write<W: Write>(
        self,
        mesh: &Mesh,
        scale: f64,
        name: &str,
        writer: W,
    ) -> Result<(), MeshError> {
        match self {
            Self::Obj => write_obj(mesh, scale, writer),
            Self::Stl => write_stl_ascii(mesh, scale, name, writer),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("obj") {
            Ok(Self::Obj)
        } else if s.eq_ignore_ascii_case("stl") {
            Ok(Self::Stl)
        } else {
            Err(MeshError::invalid_param(
                "format",
                s,
                "expected obj or stl",
            ))
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// File name for an export at `target_mm`, e.g. `arete_D45mm.obj`.
///
/// ```rust
/// use ribbon_mesh::export::{default_file_name, ExportFormat};
///
/// assert_eq!(default_file_name(45.0, ExportFormat::Obj), "arete_D45mm.obj");
/// assert_eq!(default_file_name(32.5, ExportFormat::Stl), "arete_D33mm.stl");
/// ```
pub fn default_file_name(target_mm: f64, format: ExportFormat) -> String {
    format!(
        "{EXPORT_FILE_PREFIX}_D{}mm.{}",
        target_mm.round() as i64,
        format.extension()
    )
}

/// Six-decimal coordinate that never prints as `-0.000000`.
pub(crate) struct Fixed(pub f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.6}", self.0);
        match text.strip_prefix('-') {
            Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => f.write_str(rest),
            _ => f.write_str(&text),
        }
    }
}
