//! # CLI Module
//!
//! Argument parsing and command dispatch for the fieldsense binary.

pub mod args;
pub mod commands;
pub mod errors;

pub use commands::run;
pub use errors::{CliError, CliResult};
