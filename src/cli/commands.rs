//! CLI command implementations.

use std::sync::Arc;

use crate::http::{HttpServer, HttpServerConfig};
use crate::observability::{Logger, Severity};
use crate::service::BookService;
use crate::store::MemoryStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { host, port } => serve(host, port),
    }
}

/// Open the store, wire up the service, and run the HTTP server.
///
/// Config precedence: defaults < environment (`API_HOST`/`API_PORT`) < flags.
/// The tokio runtime lives here; `main.rs` stays synchronous.
fn serve(host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut config = HttpServerConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let store = Arc::new(MemoryStore::open());
    Logger::log(Severity::Info, "store_opened", &[("backend", "memory")]);

    let service = BookService::new(store);
    let server = HttpServer::with_config(service, config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::BootFailed(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())
        .map_err(|e| CliError::ServerFailed(e.to_string()))
}
