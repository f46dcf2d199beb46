//! ribbon inspect command - per-layer build diagnostics.

use anyhow::Result;
use colored::Colorize;

use super::built_session;
use crate::{output, Cli, OutputFormat, ParamArgs};

pub fn run(args: &ParamArgs, cli: &Cli) -> Result<()> {
    let session = built_session(args)?;
    let report = session.report();

    match cli.format {
        OutputFormat::Json => output::print(report, cli.format, cli.quiet),
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", "Layers".bold().underline());
                for layer in &report.layers {
                    let status = if layer.skipped {
                        "skipped".red()
                    } else {
                        "ok".green()
                    };
                    println!(
                        "  {:>3}  r={:>8.3}  w={:>6.3}  points={:>6}  {}",
                        layer.index, layer.radius, layer.ribbon_width, layer.points, status
                    );
                }
                println!(
                    "  {}: {} built, {} skipped",
                    "Total".cyan(),
                    report.built_layers(),
                    report.skipped_layers()
                );
            }
        }
    }

    Ok(())
}
