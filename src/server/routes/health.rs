//! Service identity and health check endpoints

use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::debug;

/// Name reported by the root endpoint
pub const SERVICE_NAME: &str = "Azure SmartCost Monitoring API";

/// Configure identity and health routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(root))
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health_check));
}

#[derive(Debug, Serialize)]
struct ServiceIdentity {
    message: &'static str,
    version: &'static str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
}

/// Static service identity; never touches the provider
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(ServiceIdentity {
        message: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        status: "active",
    })
}

/// Liveness check; never touches the provider
pub async fn health_check() -> HttpResponse {
    debug!("Health check requested");
    HttpResponse::Ok().json(HealthStatus { status: "healthy" })
}
