//! Command-line interface definitions for the initialiser tool.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Initialiser - adds a public, parameterless constructor to marked public types
#[derive(Parser, Debug)]
#[command(name = "initialiser")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to initialiser.toml configuration file
    #[arg(short, long, global = true, env = "INITIALISER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a serialized declaration and print the JSON outcome
    Evaluate(EvaluateArgs),

    /// Print a source file with every marked declaration expanded
    Expand(ExpandArgs),

    /// Report marker diagnostics across source directories
    Check(CheckArgs),

    /// Initialize a new initialiser.toml configuration file
    Init(InitArgs),
}

// ============================================================================
// Evaluate Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    /// JSON request file (reads stdin when omitted)
    pub file: Option<PathBuf>,
}

// ============================================================================
// Expand Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct ExpandArgs {
    /// Rust source file to expand
    pub file: PathBuf,

    /// Write the expanded source here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ============================================================================
// Check Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Files or directories to check (default: configured source_dirs)
    pub paths: Vec<PathBuf>,

    /// Fail on redundancy warnings too (overrides config)
    #[arg(long)]
    pub deny_warnings: bool,
}

// ============================================================================
// Init Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing initialiser.toml if present
    #[arg(short, long)]
    pub force: bool,
}
