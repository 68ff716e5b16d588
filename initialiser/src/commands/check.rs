//! Check command - reports marker diagnostics across source directories.

use super::{format_diagnostic, load_config};
use crate::cli::{CheckArgs, Cli};
use initialiser_core::{
    error::{InitialiserError, Result},
    tooling::WorkspaceScanner,
};
use tracing::{error, info, warn};

/// Runs the check command.
pub fn run(cli: &Cli, args: CheckArgs) -> Result<()> {
    let config = load_config(cli)?;
    let deny_warnings = args.deny_warnings || config.check.deny_warnings;

    let mut scanner = WorkspaceScanner::from_config(&config);
    if !args.paths.is_empty() {
        scanner = scanner.with_roots(args.paths.clone());
    }

    let report = scanner.scan()?;

    for (path, diagnostic) in report.diagnostics() {
        eprintln!("{}", format_diagnostic(path, diagnostic));
    }
    for path in &report.skipped {
        warn!("Could not parse {}", path.display());
    }

    let errors = report.errors();
    let warnings = report.warnings();
    if errors > 0 || (deny_warnings && warnings > 0) {
        error!(
            "Check failed with {} error(s) and {} warning(s)",
            errors, warnings
        );
        return Err(InitialiserError::expansion_failed(errors, warnings));
    }

    info!(
        "Check passed: {} file(s), {} declaration(s) expanded, {} warning(s)",
        report.files_scanned(),
        report.expanded(),
        warnings
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn setup(config: &str, source: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("initialiser.toml"), config).unwrap();
        let src = temp_dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("lib.rs"), source).unwrap();
        temp_dir
    }

    fn check(root: &Path) -> Result<()> {
        let config = root.join("initialiser.toml");
        let src = root.join("src");
        let cli = Cli::parse_from([
            "initialiser",
            "--config",
            config.to_str().unwrap(),
            "check",
            src.to_str().unwrap(),
        ]);
        let crate::cli::Commands::Check(args) = &cli.command else {
            unreachable!()
        };
        run(&cli, args.clone())
    }

    const REDUNDANT: &str =
        "#[public_initialiser]\npub struct Foo;\n\nimpl Foo {\n    pub fn new() -> Self { Foo }\n}\n";

    #[test]
    fn warnings_pass_by_default() {
        let temp_dir = setup("", REDUNDANT);
        assert!(check(temp_dir.path()).is_ok());
    }

    #[test]
    fn deny_warnings_fails_on_redundancy() {
        let temp_dir = setup("[check]\ndeny_warnings = true\n", REDUNDANT);
        assert!(matches!(
            check(temp_dir.path()),
            Err(InitialiserError::ExpansionFailed {
                errors: 0,
                warnings: 1
            })
        ));
    }

    #[test]
    fn errors_always_fail() {
        let temp_dir = setup("", "#[public_initialiser]\nstruct Hidden;\n");
        assert!(matches!(
            check(temp_dir.path()),
            Err(InitialiserError::ExpansionFailed { errors: 1, .. })
        ));
    }
}
