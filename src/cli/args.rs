//! CLI argument definitions using clap
//!
//! Commands:
//! - fieldsense init --config <path>
//! - fieldsense start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fieldsense - an in-memory sensor telemetry API
#[derive(Parser, Debug)]
#[command(name = "fieldsense")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./fieldsense.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./fieldsense.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
