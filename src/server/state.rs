//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::services::cost::CostService;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Both fields are read-only after startup, so cloning the state per worker
/// only bumps reference counts.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// Cost service bound to the configured subscription
    pub cost_service: Arc<CostService>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, cost_service: CostService) -> Self {
        Self {
            config: Arc::new(config),
            cost_service: Arc::new(cost_service),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
