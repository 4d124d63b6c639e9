//! # Observability Module
//!
//! Structured JSON logging for request tracking and server lifecycle.

pub mod logger;

pub use logger::{Logger, Severity};
