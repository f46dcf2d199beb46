//! ribbon params command - print resolved parameters as a JSON preset.

use anyhow::{Context, Result};

use super::resolve_params;
use crate::{Cli, ParamArgs};

/// Always prints JSON: the output is meant to be saved and passed back
/// through `--params`.
pub fn run(args: &ParamArgs, cli: &Cli) -> Result<()> {
    let params = resolve_params(args)?;
    let json = serde_json::to_string_pretty(&params).context("Failed to serialize parameters")?;
    if !cli.quiet {
        println!("{json}");
    }
    Ok(())
}
