//! Cost service implementation

use super::queries::{
    decode_daily_costs, decode_resource_group_costs, decode_total, forecast_query,
    resource_group_query, single_currency_total, summary_query,
};
use super::types::{CostSummary, Days, ForecastResult, ResourceGroupCost, SubscriptionInfo};
use super::window::DateWindow;
use crate::config::AzureConfig;
use crate::core::providers::azure::{
    ArmClient, AzureCredential, CostManagementClient, ProviderError, SubscriptionClient,
    TokenProvider,
};
use crate::core::traits::{CostManagementApi, SubscriptionApi};
use crate::utils::error::{Result, SmartCostError};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Reads subscription and cost data for one subscription
#[derive(Clone)]
pub struct CostService {
    cost_api: Arc<dyn CostManagementApi>,
    subscription_api: Arc<dyn SubscriptionApi>,
    subscription_id: String,
}

impl std::fmt::Debug for CostService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostService")
            .field("subscription_id", &self.subscription_id)
            .finish_non_exhaustive()
    }
}

impl CostService {
    /// Create a service over explicit provider clients
    pub fn new(
        cost_api: Arc<dyn CostManagementApi>,
        subscription_api: Arc<dyn SubscriptionApi>,
        subscription_id: impl Into<String>,
    ) -> Self {
        Self {
            cost_api,
            subscription_api,
            subscription_id: subscription_id.into(),
        }
    }

    /// Build the credential and both ARM clients from configuration.
    ///
    /// Any failure here is a configuration error: the server must not start
    /// with a credential that cannot be used.
    pub async fn connect(config: &AzureConfig) -> Result<Self> {
        let credential = AzureCredential::new(
            &config.tenant_id,
            &config.client_id,
            &config.client_secret,
            &config.management_endpoint,
        )
        .map_err(|e| SmartCostError::config(e.to_string()))?;

        Self::connect_with(config, Arc::new(credential)).await
    }

    /// Build both ARM clients over an explicit token provider, verifying it
    /// first when `verify_on_startup` is set
    pub async fn connect_with(
        config: &AzureConfig,
        credential: Arc<dyn TokenProvider>,
    ) -> Result<Self> {
        let arm = Arc::new(
            ArmClient::new(
                credential,
                &config.management_endpoint,
                config.request_timeout(),
            )
            .map_err(|e| SmartCostError::config(e.to_string()))?,
        );

        if config.verify_on_startup {
            arm.verify_credential()
                .await
                .map_err(|e| SmartCostError::config(format!("Azure credential rejected: {}", e)))?;
            info!("Azure credential verified");
        }

        info!(
            subscription_id = %config.subscription_id,
            endpoint = %arm.endpoint(),
            "Cost service connected"
        );

        Ok(Self::new(
            Arc::new(CostManagementClient::new(arm.clone())),
            Arc::new(SubscriptionClient::new(arm)),
            config.subscription_id.clone(),
        ))
    }

    /// Resource path all cost queries are bound to
    pub fn scope(&self) -> String {
        format!("/subscriptions/{}", self.subscription_id)
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Look up the configured subscription
    pub async fn get_subscription_info(&self) -> Result<SubscriptionInfo> {
        let subscription = self
            .subscription_api
            .get_subscription(&self.subscription_id)
            .await
            .map_err(|e| fetch_error("subscription info", e))?;

        Ok(SubscriptionInfo {
            subscription_id: subscription.subscription_id,
            display_name: subscription.display_name.unwrap_or_default(),
            state: subscription.state.unwrap_or_else(|| "Unknown".to_string()),
        })
    }

    /// Daily cost per service over the last `days` days
    pub async fn get_cost_summary(&self, days: Days) -> Result<CostSummary> {
        self.cost_summary_at(Utc::now(), days).await
    }

    pub(crate) async fn cost_summary_at(
        &self,
        now: DateTime<Utc>,
        days: Days,
    ) -> Result<CostSummary> {
        let window = DateWindow::trailing(now, days);
        let scope = self.scope();
        let definition = summary_query(&window);
        debug!(%scope, %days, from = %window.start, to = %window.end, "Querying cost summary");

        let result = self
            .cost_api
            .query(&scope, &definition)
            .await
            .map_err(|e| fetch_error("cost summary", e))?;
        let daily_costs = decode_daily_costs(&result).map_err(|e| fetch_error("cost summary", e))?;

        let (total_cost, currency) =
            single_currency_total(daily_costs.iter().map(|d| (d.cost, d.currency.clone())))
                .map_err(|e| fetch_error("cost summary", e))?;

        Ok(CostSummary {
            scope,
            period: format!("{} days", days),
            start_date: window.start,
            end_date: window.end,
            query_params: definition,
            total_cost,
            currency,
            message: format!("Retrieved {} daily cost entries", daily_costs.len()),
            daily_costs,
        })
    }

    /// Month-to-date cost per resource group, most expensive first
    pub async fn get_cost_by_resource_group(&self) -> Result<Vec<ResourceGroupCost>> {
        let scope = self.scope();
        debug!(%scope, "Querying costs by resource group");

        let result = self
            .cost_api
            .query(&scope, &resource_group_query())
            .await
            .map_err(|e| fetch_error("costs by resource group", e))?;

        decode_resource_group_costs(&result).map_err(|e| fetch_error("costs by resource group", e))
    }

    /// Projected cost over the next `days` days
    pub async fn get_cost_forecast(&self, days: Days) -> Result<ForecastResult> {
        self.cost_forecast_at(Utc::now(), days).await
    }

    pub(crate) async fn cost_forecast_at(
        &self,
        now: DateTime<Utc>,
        days: Days,
    ) -> Result<ForecastResult> {
        let window = DateWindow::upcoming(now, days);
        let scope = self.scope();
        debug!(%scope, %days, from = %window.start, to = %window.end, "Querying cost forecast");

        let result = self
            .cost_api
            .forecast(&scope, &forecast_query(&window))
            .await
            .map_err(|e| fetch_error("cost forecast", e))?;
        let (estimated_cost, currency) =
            decode_total(&result).map_err(|e| fetch_error("cost forecast", e))?;

        Ok(ForecastResult {
            forecast_days: days.get(),
            start_date: window.start,
            end_date: window.end,
            estimated_cost,
            currency,
            message: format!("Forecast for the next {} days", days),
        })
    }
}

fn fetch_error(what: &str, error: ProviderError) -> SmartCostError {
    warn!(status = ?error.status(), "Error fetching {}: {}", what, error);
    SmartCostError::service(format!("Error fetching {}: {}", what, error))
}
