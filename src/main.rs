use std::process::ExitCode;

use tracing::{error, info, warn};

use chatrelay::{ChatServer, Config};

#[tokio::main]
async fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    // Load configuration
    let config = match Config::load_with_env(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {path}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            if let Err(e) = config.apply_env_overrides() {
                eprintln!("Ignoring environment overrides: {e}");
            }
            config
        }
    };

    // Initialize logging
    if let Err(e) = chatrelay::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        chatrelay::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Chat relay starting");

    let server = match ChatServer::new(&config.server) {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to create server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match server.run_until(shutdown_signal()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
