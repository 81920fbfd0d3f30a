//! Error types for the CLI

use thiserror::Error;

/// Fatal CLI error; ends the process with a non-zero exit code
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error while reading commands or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A rejected command line
///
/// Reported on the output stream; the command loop keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command name
    #[error("Invalid command. Please try again.")]
    Invalid,

    /// Missing arguments
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// Argument that should have been an integer in range
    #[error("Error: invalid number '{token}' for {what}")]
    InvalidNumber { token: String, what: &'static str },

    /// Input line that is not valid UTF-8
    #[error("Error: command line is not valid UTF-8")]
    NotUtf8,

    /// Lot operation issued before `create_parking_lot`
    #[error("Parking lot not created yet.")]
    NotCreated,
}
