//! CLI command dispatch
//!
//! `init` writes a default config file; `start` loads the config, applies
//! the PORT environment override, and serves until terminated.

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, ServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

fn init(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(CliError::ConfigExists(path.display().to_string()));
    }

    let config = ServerConfig::default();
    fs::write(path, serde_json::to_string_pretty(&config)?)?;

    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn start(path: &Path) -> CliResult<()> {
    // The config file is optional; defaults apply when it does not exist
    let mut config = if path.exists() {
        ServerConfig::load(path)?
    } else {
        ServerConfig::default()
    };

    if let Ok(port) = std::env::var("PORT") {
        config.port = port
            .parse()
            .map_err(|_| CliError::InvalidArgument(format!("Invalid PORT value: {}", port)))?;
    }

    let server = HttpServer::with_config(config);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}
