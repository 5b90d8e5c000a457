//! CLI module for flashdeck
//!
//! Provides command-line interface for:
//! - serve: Load configuration, install logging, run the HTTP server
//! - routes: Print the endpoint index

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{resolve_config, routes, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
