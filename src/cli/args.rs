//! CLI argument definitions using clap
//!
//! Commands:
//! - bookstore serve [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};

/// bookstore - a strict book-inventory record service over HTTP
#[derive(Parser, Debug)]
#[command(name = "bookstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind (overrides API_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides API_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
