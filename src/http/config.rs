//! HTTP server configuration.
//!
//! Host and port come from defaults, the environment (`API_HOST`/`API_PORT`),
//! or CLI flags, in that order of precedence.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Defaults overridden by `API_HOST` and `API_PORT` when set.
    /// An unparsable `API_PORT` keeps the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("API_HOST") {
            if !host.is_empty() {
                config.host = host;
            }
        }
        if let Ok(raw) = std::env::var("API_PORT") {
            if let Ok(port) = raw.parse() {
                config.port = port;
            }
        }
        config
    }

    /// Create a config with the given port.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// The bind address string.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
