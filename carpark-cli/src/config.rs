//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Where commands are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Command source
    pub input: InputSource,
    /// Whether to print the banner and per-command prompts
    pub prompts: bool,
    /// Log filter for the tracing subscriber
    pub log_filter: EnvFilter,
}

impl Config {
    /// Build config from CLI args
    ///
    /// Prompts are only shown for an interactive terminal on standard input.
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let input = match args.file {
            Some(path) if path.as_os_str() == "-" => InputSource::Stdin,
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        };
        let prompts =
            !args.quiet && input == InputSource::Stdin && std::io::stdin().is_terminal();
        let log_filter = resolve_log_filter(&args.log_level)?;

        Ok(Config {
            input,
            prompts,
            log_filter,
        })
    }
}

/// RUST_LOG wins over the `--log-level` default
fn resolve_log_filter(default_level: &str) -> Result<EnvFilter, CliError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_level)
        .map_err(|e| CliError::Config(format!("Invalid log level '{}': {}", default_level, e)))
}
