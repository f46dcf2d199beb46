//! ribbon build command - build a mesh and report its statistics.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::built_session;
use crate::{output, Cli, OutputFormat, ParamArgs};

#[derive(Serialize)]
struct BuildSummary {
    seed: i64,
    layers: u32,
    built_layers: usize,
    vertices: usize,
    triangles: usize,
    closed: bool,
    diameter_px: f64,
    target_mm: f64,
    export_scale: f64,
}

pub fn run(args: &ParamArgs, cli: &Cli) -> Result<()> {
    let session = built_session(args)?;
    let mesh = session.mesh();
    let params = session.params();

    let summary = BuildSummary {
        seed: params.seed,
        layers: params.layers,
        built_layers: session.report().built_layers(),
        vertices: mesh.vertex_count(),
        triangles: mesh.triangle_count(),
        closed: mesh.is_closed(),
        diameter_px: session.diameter_px(),
        target_mm: params.target_diam_mm,
        export_scale: session.export_scale(),
    };

    match cli.format {
        OutputFormat::Json => output::print(&summary, cli.format, cli.quiet),
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", "Ribbon Mesh".bold().underline());
                println!("  {}: {}", "Seed".cyan(), summary.seed);
                println!(
                    "  {}: {} of {}",
                    "Layers".cyan(),
                    summary.built_layers,
                    summary.layers
                );
                println!("  {}: {}", "Vertices".cyan(), summary.vertices);
                println!("  {}: {}", "Triangles".cyan(), summary.triangles);
                println!(
                    "  {}: {}",
                    "Watertight".cyan(),
                    if summary.closed { "yes".green() } else { "no".red() }
                );
                println!("  {}: {:.3}", "Diameter (px)".cyan(), summary.diameter_px);
                println!(
                    "  {}: {:.6} ({} mm)",
                    "Export scale".cyan(),
                    summary.export_scale,
                    summary.target_mm
                );
            }
        }
    }

    Ok(())
}
