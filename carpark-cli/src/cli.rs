//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Parking lot simulator
#[derive(Parser, Debug)]
#[command(name = "carpark", about = "Run parking lot commands", version)]
pub struct Args {
    /// Command file to run (reads standard input if omitted)
    pub file: Option<PathBuf>,

    /// Quiet mode - no banner or prompts
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
