//! Evaluate command - runs the engine on a serialized declaration.

use crate::cli::{Cli, EvaluateArgs};
use initialiser_core::{error::Result, request::evaluate_json};
use std::{fs, io::Read};
use tracing::{debug, info};

/// Runs the evaluate command.
pub fn run(_cli: &Cli, args: EvaluateArgs) -> Result<()> {
    let input = match &args.file {
        Some(path) => {
            debug!("Reading request from {}", path.display());
            fs::read_to_string(path)?
        }
        None => {
            debug!("Reading request from stdin");
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            input
        }
    };

    let output = evaluate_json(&input)?;
    println!("{output}");
    info!("Evaluation complete");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use initialiser_core::error::InitialiserError;
    use tempfile::TempDir;

    fn cli() -> Cli {
        Cli::parse_from(["initialiser", "evaluate"])
    }

    #[test]
    fn evaluates_request_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("request.json");
        fs::write(
            &path,
            r#"{ "declaration": { "name": "Foo", "kind": "struct", "modifiers": ["public"] } }"#,
        )
        .unwrap();

        let result = run(&cli(), EvaluateArgs { file: Some(path) });

        assert!(result.is_ok());
    }

    #[test]
    fn malformed_request_is_a_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("request.json");
        fs::write(&path, r#"{ "declaration": 4 }"#).unwrap();

        let result = run(&cli(), EvaluateArgs { file: Some(path) });

        assert!(matches!(result, Err(InitialiserError::Json(_))));
    }
}
