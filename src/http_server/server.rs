//! # HTTP Server
//!
//! Combines the flashcard, activity and service routers into one Axum app.

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::activity_routes::activity_routes;
use super::config::ServerConfig;
use super::flashcard_routes::flashcard_routes;
use super::observability_routes::service_routes;
use super::state::AppState;
use crate::observability::{log_event, Event};

/// HTTP server for the flashcard API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration and fresh state
    pub fn with_config(config: ServerConfig) -> Self {
        Self::with_state(config, AppState::new())
    }

    /// Create a new HTTP server around existing state
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        let router = build_router(&config, state);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address; hostnames are resolved
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind(self.config.socket_addr()).await
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        let addr = listener.local_addr()?;
        info!(event = Event::ServerListening.as_str(), addr = %addr, "lifecycle");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the combined router with all endpoints
pub fn build_router(config: &ServerConfig, state: AppState) -> Router {
    Router::new()
        .merge(service_routes())
        .merge(flashcard_routes(state.clone()))
        .merge(activity_routes(state))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = ServerConfig::with_port(8080);
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::with_config(config).router();
    }

    #[tokio::test]
    async fn test_bind_resolves_hostname() {
        let config = ServerConfig {
            host: "localhost".to_string(),
            port: 0,
            ..Default::default()
        };
        let server = HttpServer::with_config(config);

        let listener = server.bind().await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
