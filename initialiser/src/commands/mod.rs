//! Command handlers for the initialiser CLI.

pub mod check;
pub mod evaluate;
pub mod expand;
pub mod init;

use crate::cli::Cli;
use initialiser_core::{
    Diagnostic, config::InitialiserConfig, error::Result, tooling::SourceLocation,
};
use std::path::Path;
use tracing::debug;

/// Loads the configuration named on the command line, or the nearest
/// `initialiser.toml`, or the defaults when there is none.
pub fn load_config(cli: &Cli) -> Result<InitialiserConfig> {
    match &cli.config {
        Some(path) => {
            debug!("Using configuration from --config: {}", path.display());
            InitialiserConfig::from_path(path)
        }
        None => InitialiserConfig::load_or_default(),
    }
}

/// `file:line:column: severity: message`
pub fn format_diagnostic(path: &Path, diagnostic: &Diagnostic<SourceLocation>) -> String {
    format!("{}:{}: {}", path.display(), diagnostic.anchor, diagnostic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use initialiser_core::{DEFAULT_MARKER, DiagnosticKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn diagnostics_are_prefixed_with_their_location() {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::NonPublicType,
            DEFAULT_MARKER,
            SourceLocation::new(3, 1),
        );

        assert_eq!(
            format_diagnostic(Path::new("src/lib.rs"), &diagnostic),
            "src/lib.rs:3:1: error: #[public_initialiser] can only be applied to a public type"
        );
    }
}
