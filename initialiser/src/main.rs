mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use initialiser_core::error::Result;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v/-q. Logs go to stderr so stdout stays clean for
    // `evaluate` and `expand` output.
    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    debug!("Running {:?}", cli.command);
    match &cli.command {
        Commands::Evaluate(args) => commands::evaluate::run(cli, args.clone()),
        Commands::Expand(args) => commands::expand::run(cli, args.clone()),
        Commands::Check(args) => commands::check::run(cli, args.clone()),
        Commands::Init(args) => commands::init::run(cli, args.clone()),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
