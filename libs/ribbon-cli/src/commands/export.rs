//! ribbon export command - build a mesh and write it as OBJ or STL.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use ribbon_mesh::export::{default_file_name, ExportFormat};
use serde::Serialize;
use tracing::info;

use super::built_session;
use crate::{output, Cli, OutputFormat, ParamArgs};

#[derive(Serialize)]
struct ExportSummary {
    path: String,
    format: String,
    triangles: usize,
    export_scale: f64,
    target_mm: f64,
}

/// Output path and format: explicit format first, then the path extension,
/// then OBJ.
fn resolve_target(
    output: Option<&Path>,
    format: Option<ExportFormat>,
    target_mm: f64,
) -> (PathBuf, ExportFormat) {
    let format = format
        .or_else(|| output.and_then(ExportFormat::from_path))
        .unwrap_or(ExportFormat::Obj);
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default_file_name(target_mm, format)));
    (path, format)
}

pub fn run(
    args: &ParamArgs,
    output: Option<&Path>,
    format: Option<ExportFormat>,
    name: &str,
    cli: &Cli,
) -> Result<()> {
    let session = built_session(args)?;
    let mesh = session.mesh();
    let scale = session.export_scale();
    let target_mm = session.params().target_diam_mm;
    let (path, format) = resolve_target(output, format, target_mm);

    let file =
        File::create(&path).with_context(|| format!("Failed to create {:?}", path))?;
    format
        .write(&mesh, scale, name, BufWriter::new(file))
        .with_context(|| format!("Failed to write {:?}", path))?;

    info!(path = %path.display(), %format, scale, "mesh exported");

    let summary = ExportSummary {
        path: path.display().to_string(),
        format: format.to_string(),
        triangles: mesh.triangle_count(),
        export_scale: scale,
        target_mm,
    };

    match cli.format {
        OutputFormat::Json => output::print(&summary, cli.format, cli.quiet),
        OutputFormat::Text => {
            if !cli.quiet {
                println!(
                    "{} {} ({} triangles, {} mm)",
                    "Wrote".green().bold(),
                    summary.path,
                    summary.triangles,
                    summary.target_mm
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        let (path, format) = resolve_target(Some(Path::new("out/ring.stl")), None, 45.0);
        assert_eq!(format, ExportFormat::Stl);
        assert_eq!(path, PathBuf::from("out/ring.stl"));
    }

    #[test]
    fn test_explicit_format_wins() {
        let (_, format) =
            resolve_target(Some(Path::new("ring.stl")), Some(ExportFormat::Obj), 45.0);
        assert_eq!(format, ExportFormat::Obj);
    }

    #[test]
    fn test_default_name_uses_target() {
        let (path, format) = resolve_target(None, None, 38.4);
        assert_eq!(format, ExportFormat::Obj);
        assert_eq!(path, PathBuf::from("arete_D38mm.obj"));

        let (path, _) = resolve_target(None, Some(ExportFormat::Stl), 45.0);
        assert_eq!(path, PathBuf::from("arete_D45mm.stl"));
    }

    #[test]
    fn test_unknown_extension_falls_back_to_obj() {
        let (_, format) = resolve_target(Some(Path::new("ring.ply")), None, 45.0);
        assert_eq!(format, ExportFormat::Obj);
    }
}
