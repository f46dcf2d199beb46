//! Shared result printing.

use serde::Serialize;

use crate::OutputFormat;

/// Prints `value` as pretty JSON unless quiet. Text output is rendered by
/// each command.
pub fn print<T: Serialize>(value: &T, format: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    if let OutputFormat::Json = format {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("failed to serialize output: {e}"),
        }
    }
}
