//! CLI module for the bookstore service
//!
//! Provides the command-line interface:
//! - serve: open the store and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
