//! Config-driven mock API server
//!
//! Reads a route table from a config file and serves it over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!     config file ──▶ config (load + validate) ──▶ routing (route table)
//!                                                        │
//!                                                        ▼
//!     Client Request ──▶ lifecycle ──▶ http server ──▶ file / mock / fallback
//!                        (listener)    (axum router)        │
//!     Client Response ◀──────────────────────────────────────┘
//! ```
//!
//! Startup order: load config, validate every route, print the route banner,
//! bind the socket, serve until SIGINT/SIGTERM.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use mock_api_server::config::{load_config, ConfigError};
use mock_api_server::http::MockServer;
use mock_api_server::lifecycle::{self, Shutdown};
use mock_api_server::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "mock-api-server")]
#[command(about = "Serve files and generated mock data from a route table", long_about = None)]
struct Cli {
    /// Path to the config file (TOML, or JSON by extension)
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(ConfigError::Validation(errors)) => {
            for error in &errors {
                println!("{}", error);
            }
            process::exit(lifecycle::startup::EXIT_FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    init_logging(&config.log_level);
    tracing::info!(
        config = %cli.config.display(),
        routes = config.apis.len(),
        "Configuration loaded"
    );

    let server = match MockServer::new(config) {
        Ok(server) => server,
        Err(e) => {
            println!("{}", e);
            process::exit(lifecycle::startup::EXIT_FAILURE);
        }
    };

    println!("{}", server.routes().banner());

    let listener = match lifecycle::bind(server.config()).await {
        Ok(listener) => listener,
        Err(e) => match e.exit_code() {
            Some(code) => {
                eprintln!("{}", e);
                process::exit(code);
            }
            None => return Err(e.into()),
        },
    };

    println!("{}", listener.listening_message());

    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
