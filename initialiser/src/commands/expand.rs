//! Expand command - prints a source file with marked declarations expanded.

use super::{format_diagnostic, load_config};
use crate::cli::{Cli, ExpandArgs};
use initialiser_core::{
    error::{InitialiserError, Result},
    tooling::Expander,
};
use std::fs;
use tracing::{error, info};

/// Runs the expand command.
pub fn run(cli: &Cli, args: ExpandArgs) -> Result<()> {
    let config = load_config(cli)?;
    let source = fs::read_to_string(&args.file)?;

    let expansion = Expander::from_config(&config)
        .expand_source(&source)
        .map_err(|e| InitialiserError::parse_error(&args.file, e.to_string()))?;

    for diagnostic in &expansion.diagnostics {
        eprintln!("{}", format_diagnostic(&args.file, diagnostic));
    }

    if expansion.has_errors() {
        error!(
            "{} was not expanded: {} error(s)",
            args.file.display(),
            expansion.errors()
        );
        return Err(InitialiserError::expansion_failed(
            expansion.errors(),
            expansion.warnings(),
        ));
    }

    match &args.output {
        Some(output) => {
            fs::write(output, &expansion.source)?;
            info!(
                "Wrote {} expanded declaration(s) to {}",
                expansion.expanded,
                output.display()
            );
        }
        None => print!("{}", expansion.source),
    }

    Ok(())
}
