//! Parking lot CLI - reads commands from a file or standard input

use carpark_cli::cli::Args;
use carpark_cli::config::{Config, InputSource};
use carpark_cli::error::CliError;
use carpark_cli::repl;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use tracing::debug;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_logging(config.log_filter);
    debug!(input = ?config.input, prompts = config.prompts, "starting");

    let stdout = io::stdout().lock();
    match config.input {
        InputSource::Stdin => repl::run(io::stdin().lock(), stdout, config.prompts),
        InputSource::File(path) => {
            let file = File::open(&path).map_err(|e| {
                CliError::Config(format!("Failed to open {}: {}", path.display(), e))
            })?;
            repl::run(BufReader::new(file), stdout, config.prompts)
        }
    }
}

/// Logs go to stderr so they never mix with command output
fn init_logging(filter: tracing_subscriber::EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
