//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;
use crate::store::MemoryStore;

use super::config::ServerConfig;
use super::observability_routes::health_routes;
use super::reading_routes::reading_routes;
use super::sensor_routes::sensor_routes;
use super::track::track_requests;

/// HTTP server for the sensor network API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration and the seeded
    /// demo store
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration and the seeded
    /// demo store
    pub fn with_config(config: ServerConfig) -> Self {
        Self::with_store(config, Arc::new(MemoryStore::seeded()))
    }

    /// Create a new HTTP server over a caller-supplied store
    pub fn with_store(config: ServerConfig, store: Arc<MemoryStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig, store: Arc<MemoryStore>) -> Router {
        // Permissive CORS when no origins configured, origin list otherwise
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // Sensor CRUD and nested readings under /api
            .nest("/api", sensor_routes(store.clone()))
            // Readings listing under /api
            .nest("/api", reading_routes(store))
            .layer(cors)
            .layer(middleware::from_fn(track_requests))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let addr_str = addr.to_string();
        Logger::info("SERVER_START", &[("addr", addr_str.as_str())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
