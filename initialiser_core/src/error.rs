use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InitialiserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in file {file}: {message}")]
    ParseError { file: PathBuf, message: String },

    #[error("Syn parse error: {0}")]
    SynParse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Invalid regex pattern: {0}")]
    Regex(String),

    #[error("Workspace scan error: {0}")]
    WorkspaceScan(String),

    #[error("Expansion failed with {errors} error(s) and {warnings} warning(s)")]
    ExpansionFailed { errors: usize, warnings: usize },
}

impl From<syn::Error> for InitialiserError {
    fn from(err: syn::Error) -> Self {
        InitialiserError::SynParse(err.to_string())
    }
}

impl From<regex::Error> for InitialiserError {
    fn from(err: regex::Error) -> Self {
        InitialiserError::Regex(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InitialiserError>;

impl InitialiserError {
    pub fn parse_error(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        InitialiserError::ParseError {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        InitialiserError::Config(message.into())
    }

    pub fn workspace_scan(message: impl Into<String>) -> Self {
        InitialiserError::WorkspaceScan(message.into())
    }

    pub fn expansion_failed(errors: usize, warnings: usize) -> Self {
        InitialiserError::ExpansionFailed { errors, warnings }
    }
}
