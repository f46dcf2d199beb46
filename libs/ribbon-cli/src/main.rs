//! ribbon: command-line front end for the ribbon mesh generator.
//!
//! Builds layered ribbon meshes from JSON presets (the editor's upper-case
//! keys) and writes them as OBJ or ASCII STL scaled to a physical diameter.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=ribbon_mesh=info` - One line per build
//! - `RUST_LOG=ribbon_mesh=debug` - Per-layer progress and skipped layers
//! - `RUST_LOG=debug` - All debug output
//!
//! # Example
//!
//! ```bash
//! # Default ribbon, 45 mm across
//! ribbon export
//!
//! # Preset with a fresh seed, written as STL
//! ribbon export --params preset.json --random-seed -o pendant.stl
//!
//! # Per-layer report
//! RUST_LOG=ribbon_mesh=debug ribbon inspect --layers 12
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use ribbon_mesh::ExportFormat;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod output;

use commands::{build, export, inspect, params};

/// ribbon - Procedural ribbon jewelry generator.
///
/// Build layered, noise-rippled ribbon meshes and export them for printing.
#[derive(Parser)]
#[command(name = "ribbon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for results
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MeshFormat {
    /// Wavefront OBJ
    Obj,
    /// ASCII STL
    Stl,
}

impl From<MeshFormat> for ExportFormat {
    fn from(format: MeshFormat) -> Self {
        match format {
            MeshFormat::Obj => ExportFormat::Obj,
            MeshFormat::Stl => ExportFormat::Stl,
        }
    }
}

/// Where the shape parameters come from.
#[derive(Args, Clone, Default)]
pub struct ParamArgs {
    /// JSON preset; missing keys take their defaults
    #[arg(long)]
    params: Option<PathBuf>,

    /// Override SEED
    #[arg(long, conflicts_with = "random_seed")]
    seed: Option<i64>,

    /// Pick a random SEED in [0, 100000)
    #[arg(long)]
    random_seed: bool,

    /// Override LAYERS
    #[arg(long)]
    layers: Option<u32>,

    /// Override TARGET_DIAM_MM
    #[arg(long)]
    target_mm: Option<f64>,

    /// Build even if parameters fail validation
    #[arg(long)]
    allow_invalid: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a mesh and print its statistics
    Build {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Build a mesh and write it to a file
    Export {
        #[command(flatten)]
        params: ParamArgs,

        /// Output file (defaults to arete_D<mm>mm.<ext> in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File format (defaults to the output extension, then OBJ)
        #[arg(long, value_enum)]
        mesh_format: Option<MeshFormat>,

        /// STL solid name
        #[arg(long, default_value = config::constants::DEFAULT_STL_SOLID_NAME)]
        name: String,
    },

    /// Print per-layer build diagnostics
    Inspect {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Print parameters as a JSON preset
    Params {
        #[command(flatten)]
        params: ParamArgs,
    },
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "ribbon_mesh=info,ribbon=info",
            2 => "ribbon_mesh=debug,ribbon=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Build { params } => build::run(params, &cli),
        Commands::Export {
            params,
            output,
            mesh_format,
            name,
        } => export::run(
            params,
            output.as_deref(),
            mesh_format.map(ExportFormat::from),
            name,
            &cli,
        ),
        Commands::Inspect { params } => inspect::run(params, &cli),
        Commands::Params { params } => params::run(params, &cli),
    };

    if let Err(e) = &result {
        if !cli.quiet {
            eprintln!("{}: {}", "Error".red().bold(), e);
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {}", "Caused by".yellow(), cause);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
