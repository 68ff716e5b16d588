//! Init command - initializes initialiser.toml configuration.

use crate::cli::{Cli, InitArgs};
use initialiser_core::{
    config::CONFIG_FILE_NAME,
    error::{InitialiserError, Result},
};
use std::fs;
use std::path::Path;
use tracing::info;

const CONFIG_TEMPLATE: &str = r#"# Public initialiser configuration

[general]
# Extra attribute names treated as #[public_initialiser], e.g. when the macro
# is re-exported under another name
marker_aliases = []

[check]
# Directories scanned by `initialiser check` when no path is given.
# Supports ${VAR} and ${VAR:-default}
source_dirs = ["src"]

# Directory names skipped while scanning
exclude = ["target"]

# Fail when a marked type already has a public, parameterless constructor
deny_warnings = false
"#;

/// Runs the init command.
pub fn run(_cli: &Cli, args: InitArgs) -> Result<()> {
    write_config(Path::new("."), args.force)?;

    info!("Initialiser initialized successfully!");
    info!("Next steps:");
    info!("  1. Edit {} to configure your project", CONFIG_FILE_NAME);
    info!("  2. Add #[public_initialiser] to your public structs");
    info!("  3. Run 'initialiser check' to verify the marked declarations");
    Ok(())
}

/// Writes the template into `dir`. Fails when a file already exists and
/// `force` is not set.
fn write_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(InitialiserError::config(format!(
            "{} already exists. Use --force to overwrite.",
            CONFIG_FILE_NAME
        )));
    }

    fs::write(&config_path, CONFIG_TEMPLATE)?;
    info!("Created {}", config_path.display());
    Ok(())
}
