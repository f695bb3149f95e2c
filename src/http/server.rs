//! HTTP server assembly.
//!
//! Builds the combined router (health + book routes, with the book surface
//! also mounted under `/api` as in the original deployment) and serves it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{Logger, Severity};
use crate::service::BookService;

use super::config::HttpServerConfig;
use super::routes::{book_routes, health_routes, AppState};

/// HTTP server for the book record service.
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration.
    pub fn new(service: BookService) -> Self {
        Self::with_config(service, HttpServerConfig::default())
    }

    /// Create a server with the given configuration.
    pub fn with_config(service: BookService, config: HttpServerConfig) -> Self {
        let router = Self::build_router(service, &config);
        Self { config, router }
    }

    fn build_router(service: BookService, config: &HttpServerConfig) -> Router {
        let state = Arc::new(AppState::new(service));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(book_routes(state.clone()))
            .nest("/api", book_routes(state))
            .layer(cors)
    }

    /// The bind address.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Take the router (for in-process testing).
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        Logger::log(
            Severity::Info,
            "http_server_started",
            &[("addr", &addr.to_string())],
        );
        axum::serve(listener, self.router).await
    }
}
