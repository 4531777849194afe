//! SmartCost API - Azure cost monitoring service
//!
//! Reads configuration from the environment (and `.env`), then serves the
//! HTTP API until shutdown.

#![allow(missing_docs)]

use smartcost_api::Config;
use smartcost_api::server;
use smartcost_api::utils::logging::init_logger;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; real deployments use the environment
    let dotenv = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logger(config.server().debug, config.server().log_format);
    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display, not Debug, so the cause reads as a sentence
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
