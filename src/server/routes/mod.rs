//! HTTP route modules
//!
//! Everything is mounted under [`API_PREFIX`].

pub mod costs;
pub mod health;

use crate::utils::error::SmartCostError;
use actix_web::web;
use tracing::debug;

/// Path prefix of every route
pub const API_PREFIX: &str = "/api/v1";

/// Configure all API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(API_PREFIX)
            .app_data(query_config())
            .configure(health::configure_routes)
            .configure(costs::configure_routes),
    );
}

/// Query-string extractor config: rejected parameters become 422 responses
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        debug!(path = %req.path(), error = %err, "Rejected query parameters");
        SmartCostError::validation(err.to_string()).into()
    })
}
