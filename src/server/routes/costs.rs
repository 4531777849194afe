//! Subscription and cost endpoints

use crate::server::state::AppState;
use crate::services::cost::Days;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;

/// `?days=N` query; absent means the default horizon
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DaysQuery {
    #[serde(default)]
    pub days: Days,
}

/// Configure subscription and cost routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/subscription", web::get().to(get_subscription))
        .service(
            web::scope("/costs")
                .route("/summary", web::get().to(get_cost_summary))
                .route("/by-resource-group", web::get().to(get_costs_by_resource_group))
                .route("/forecast", web::get().to(get_cost_forecast)),
        );
}

/// GET /api/v1/subscription
pub async fn get_subscription(state: web::Data<AppState>) -> Result<HttpResponse> {
    let info = state.cost_service.get_subscription_info().await?;
    Ok(HttpResponse::Ok().json(info))
}

/// GET /api/v1/costs/summary?days=N
pub async fn get_cost_summary(
    state: web::Data<AppState>,
    query: web::Query<DaysQuery>,
) -> Result<HttpResponse> {
    let days = query.into_inner().days;
    let summary = state.cost_service.get_cost_summary(days).await?;

    info!(
        %days,
        total_cost = summary.total_cost,
        currency = %summary.currency,
        "Cost summary served"
    );
    Ok(HttpResponse::Ok().json(summary))
}

/// GET /api/v1/costs/by-resource-group
pub async fn get_costs_by_resource_group(state: web::Data<AppState>) -> Result<HttpResponse> {
    let groups = state.cost_service.get_cost_by_resource_group().await?;
    info!(resource_groups = groups.len(), "Resource group costs served");
    Ok(HttpResponse::Ok().json(groups))
}

/// GET /api/v1/costs/forecast?days=N
pub async fn get_cost_forecast(
    state: web::Data<AppState>,
    query: web::Query<DaysQuery>,
) -> Result<HttpResponse> {
    let days = query.into_inner().days;
    let forecast = state.cost_service.get_cost_forecast(days).await?;

    info!(
        %days,
        estimated_cost = forecast.estimated_cost,
        "Cost forecast served"
    );
    Ok(HttpResponse::Ok().json(forecast))
}
