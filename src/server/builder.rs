//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function used by the binary.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::services::cost::CostService;
use crate::utils::error::{Result, SmartCostError};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    cost_service: Option<CostService>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a pre-built cost service instead of connecting to Azure
    pub fn with_cost_service(mut self, cost_service: CostService) -> Self {
        self.cost_service = Some(cost_service);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| SmartCostError::config("Configuration is required"))?;

        match self.cost_service {
            Some(cost_service) => Ok(HttpServer::with_state(AppState::new(config, cost_service))),
            None => HttpServer::new(&config).await,
        }
    }
}

/// Connect to Azure and serve until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!(
        "Starting {} v{}",
        crate::server::routes::health::SERVICE_NAME,
        env!("CARGO_PKG_VERSION")
    );

    let server = ServerBuilder::new().with_config(config).build().await?;
    let prefix = crate::server::routes::API_PREFIX;

    info!("Server starting at: http://{}", server.config().address());
    info!("API Endpoints:");
    info!("   GET  {}/health - Health check", prefix);
    info!("   GET  {}/subscription - Subscription details", prefix);
    info!("   GET  {}/costs/summary?days=N - Daily costs by service", prefix);
    info!("   GET  {}/costs/by-resource-group - Month-to-date costs", prefix);
    info!("   GET  {}/costs/forecast?days=N - Cost forecast", prefix);

    server.start().await
}
