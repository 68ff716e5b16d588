use crate::error::{InitialiserError, Result};
use crate::syntax::MARKER_NAME;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, error, info, trace, warn};

pub const CONFIG_FILE_NAME: &str = "initialiser.toml";

/// General configuration shared by every command
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GeneralConfig {
    /// Additional attribute names treated as the marker, e.g. a re-export
    /// under another name (`#[ctor]` for `use initialiser::public_initialiser as ctor`)
    #[serde(default)]
    pub marker_aliases: Vec<String>,
}

/// Configuration for `initialiser check`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Directories scanned when no path is given on the command line.
    /// Supports `${VAR}` and `${VAR:-default}` substitution.
    pub source_dirs: Vec<String>,

    /// Directory names skipped while walking
    pub exclude: Vec<String>,

    /// Treat redundancy warnings as failures
    pub deny_warnings: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            source_dirs: vec!["src".to_string()],
            exclude: vec!["target".to_string()],
            deny_warnings: false,
        }
    }
}

/// Root configuration, read from `initialiser.toml`
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct InitialiserConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub check: CheckConfig,
}

impl InitialiserConfig {
    /// Loads `.env`, then the nearest initialiser.toml in the current directory
    /// or its ancestors. Falls back to the defaults when there is none; a file
    /// that exists but does not parse is still an error.
    pub fn load_or_default() -> Result<InitialiserConfig> {
        dotenv::dotenv().ok();
        let current_dir = env::current_dir()?;
        match Self::find_config_file_from(&current_dir) {
            Some(path) => Self::from_path(&path),
            None => {
                debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(InitialiserConfig::default())
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<InitialiserConfig> {
        info!("Found configuration file at: {:?}", path);

        let contents = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read configuration file: {}", e);
            InitialiserError::from(e)
        })?;

        debug!("Configuration file size: {} bytes", contents.len());
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<InitialiserConfig> {
        let mut config: InitialiserConfig = toml::from_str(contents).map_err(|e| {
            error!("Failed to parse TOML configuration: {}", e);
            InitialiserError::from(e)
        })?;

        debug!("Substituting environment variables in configuration");
        config.check.source_dirs = config
            .check
            .source_dirs
            .iter()
            .map(|dir| Self::substitute_env_vars(dir))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Marker aliases: {:?}, source dirs: {:?}, deny warnings: {}",
            config.general.marker_aliases, config.check.source_dirs, config.check.deny_warnings
        );

        Ok(config)
    }

    /// Attribute names recognized as the marker: the canonical name first,
    /// then the configured aliases.
    pub fn marker_names(&self) -> Vec<String> {
        let mut names = vec![MARKER_NAME.to_string()];
        for alias in &self.general.marker_aliases {
            if !names.contains(alias) {
                names.push(alias.clone());
            }
        }
        names
    }

    /// Searches for `initialiser.toml` starting at `start` and traversing up
    /// to the root.
    fn find_config_file_from(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|path| {
            let config_path = path.join(CONFIG_FILE_NAME);
            trace!("Checking for config at: {:?}", config_path);
            config_path.exists().then_some(config_path)
        })
    }

    /// Substitute environment variables in config strings
    /// Supports ${VAR_NAME:-default} syntax
    fn substitute_env_vars(value: &str) -> Result<String> {
        trace!("Substituting environment variables in: {}", value);
        let mut result = value.to_string();

        // Pattern to match ${VAR_NAME} or ${VAR_NAME:-default}
        let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")?;

        for cap in re.captures_iter(value) {
            let var_name = &cap[1];
            let default_value = cap.get(2).map(|m| m.as_str());

            let replacement = match env::var(var_name) {
                Ok(val) => {
                    debug!("Resolved environment variable: {}", var_name);
                    val
                }
                Err(_) => match default_value {
                    Some(default) => {
                        warn!(
                            "Environment variable {} not set, using default: {}",
                            var_name, default
                        );
                        default.to_string()
                    }
                    None => {
                        error!(
                            "Environment variable {} not set and no default provided",
                            var_name
                        );
                        return Err(InitialiserError::EnvVarNotSet(var_name.to_string()));
                    }
                },
            };

            result = result.replace(&cap[0], &replacement);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = InitialiserConfig::default();
        assert!(config.general.marker_aliases.is_empty());
        assert_eq!(config.check.source_dirs, vec!["src".to_string()]);
        assert_eq!(config.check.exclude, vec!["target".to_string()]);
        assert!(!config.check.deny_warnings);
    }

    #[test]
    fn test_deserialize_empty() {
        let config = InitialiserConfig::from_toml_str("").unwrap();
        assert_eq!(config.check.source_dirs, vec!["src".to_string()]);
    }

    #[test]
    fn test_deserialize_partial_check_section() {
        let config = InitialiserConfig::from_toml_str(
            r#"
            [check]
            deny_warnings = true
        "#,
        )
        .unwrap();
        assert!(config.check.deny_warnings);
        // Unset keys fall back to their defaults
        assert_eq!(config.check.source_dirs, vec!["src".to_string()]);
    }

    #[test]
    fn test_marker_names_include_aliases_once() {
        let config = InitialiserConfig::from_toml_str(
            r#"
            [general]
            marker_aliases = ["ctor", "public_initialiser", "ctor"]
        "#,
        )
        .unwrap();
        assert_eq!(
            config.marker_names(),
            vec!["public_initialiser".to_string(), "ctor".to_string()]
        );
    }

    #[test]
    fn test_invalid_toml_is_a_toml_error() {
        let result = InitialiserConfig::from_toml_str("invalid toml content {{{");
        assert!(matches!(result, Err(InitialiserError::Toml(_))));
    }

    #[test]
    fn test_source_dirs_substitute_env_vars() {
        temp_env::with_var("INITIALISER_TEST_ROOT", Some("/work"), || {
            let config = InitialiserConfig::from_toml_str(
                r#"
                [check]
                source_dirs = ["${INITIALISER_TEST_ROOT}/src", "${INITIALISER_TEST_MISSING:-lib}"]
            "#,
            )
            .unwrap();
            assert_eq!(
                config.check.source_dirs,
                vec!["/work/src".to_string(), "lib".to_string()]
            );
        });
    }

    #[test]
    fn test_substitute_env_vars_missing_returns_error() {
        temp_env::with_var_unset("INITIALISER_DEFINITELY_NOT_SET", || {
            let result = InitialiserConfig::substitute_env_vars("${INITIALISER_DEFINITELY_NOT_SET}");
            assert!(matches!(result, Err(InitialiserError::EnvVarNotSet(_))));
        });
    }

    #[test]
    fn test_substitute_env_vars_no_match() {
        let result = InitialiserConfig::substitute_env_vars("no variables here").unwrap();
        assert_eq!(result, "no variables here");
    }

    #[test]
    fn test_find_config_file_in_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let child_dir = temp_dir.path().join("child").join("grandchild");
        fs::create_dir_all(&child_dir).unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "# test config").unwrap();

        let found = InitialiserConfig::find_config_file_from(&child_dir);

        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_from_path_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &config_path,
            "[general]\nmarker_aliases = [\"ctor\"]\n",
        )
        .unwrap();

        let config = InitialiserConfig::from_path(&config_path).unwrap();

        assert_eq!(config.general.marker_aliases, vec!["ctor".to_string()]);
    }
}
