//! Parking lot CLI - command interpreter over the `carpark` engine

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod session;
