//! fieldsense - an in-memory sensor telemetry API
//!
//! Exposes sensor and reading records over HTTP with CRUD endpoints and a
//! filtered, paginated readings listing backed by the query engine.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod store;
