//! # HTTP Server Module
//!
//! Axum server exposing the sensor network API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/sensors` - Sensor CRUD and nested readings
//! - `/api/readings` - Filtered, paginated readings listing

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod reading_routes;
pub mod sensor_routes;
pub mod server;
pub mod track;

pub use config::{ConfigError, ServerConfig};
pub use errors::ApiError;
pub use server::HttpServer;
