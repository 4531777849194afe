//! Azure Resource Manager clients
//!
//! `ArmClient` is the shared transport; `SubscriptionClient` and
//! `CostManagementClient` are thin typed wrappers bound to the same credential.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::credential::TokenProvider;
use super::error::{ProviderError, error_from_response};
use super::models::{ForecastDefinition, QueryDefinition, QueryResult, SubscriptionResource};
use crate::core::traits::{CostManagementApi, SubscriptionApi};

/// API version of the Cost Management query/forecast endpoints
pub const COST_MANAGEMENT_API_VERSION: &str = "2023-03-01";
/// API version of the Subscriptions endpoint
pub const SUBSCRIPTION_API_VERSION: &str = "2022-12-01";

/// Authenticated HTTP transport for ARM
pub struct ArmClient {
    http_client: reqwest::Client,
    credential: Arc<dyn TokenProvider>,
    endpoint: String,
}

impl ArmClient {
    /// Create new ARM client with a bounded request timeout
    pub fn new(
        credential: Arc<dyn TokenProvider>,
        endpoint: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            credential,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Acquire a token without issuing a request
    pub async fn verify_credential(&self) -> Result<(), ProviderError> {
        self.credential.token().await.map(|_| ())
    }

    /// Build request URL for an ARM resource path
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        api_version: &str,
    ) -> Result<T, ProviderError> {
        let request = self.http_client.get(self.build_url(path));
        self.execute(request, api_version).await
    }

    pub async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        api_version: &str,
        body: &B,
    ) -> Result<T, ProviderError> {
        let request = self.http_client.post(self.build_url(path)).json(body);
        self.execute(request, api_version).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        api_version: &str,
    ) -> Result<T, ProviderError> {
        let token = self.credential.token().await?;

        let response = request
            .query(&[("api-version", api_version)])
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "ARM response received");

        let body = response.text().await?;
        if !status.is_success() {
            return Err(error_from_response(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::parsing(e.to_string()))
    }
}

/// Client for the Subscriptions API
pub struct SubscriptionClient {
    arm: Arc<ArmClient>,
}

impl SubscriptionClient {
    pub fn new(arm: Arc<ArmClient>) -> Self {
        Self { arm }
    }
}

#[async_trait]
impl SubscriptionApi for SubscriptionClient {
    async fn get_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<SubscriptionResource, ProviderError> {
        self.arm
            .get_json(
                &format!("/subscriptions/{}", subscription_id),
                SUBSCRIPTION_API_VERSION,
            )
            .await
    }
}

/// Client for the Cost Management query and forecast APIs
pub struct CostManagementClient {
    arm: Arc<ArmClient>,
}

impl CostManagementClient {
    pub fn new(arm: Arc<ArmClient>) -> Self {
        Self { arm }
    }

    async fn post_tabular<B: Serialize + Sync>(
        &self,
        scope: &str,
        operation: &str,
        body: &B,
    ) -> Result<QueryResult, ProviderError> {
        let path = format!(
            "{}/providers/Microsoft.CostManagement/{}",
            scope.trim_end_matches('/'),
            operation
        );
        let result: QueryResult = self
            .arm
            .post_json(&path, COST_MANAGEMENT_API_VERSION, body)
            .await?;

        if result.has_more() {
            warn!(
                operation,
                rows = result.rows().len(),
                "Cost Management returned a partial page; remaining pages are not fetched"
            );
        }

        Ok(result)
    }
}

#[async_trait]
impl CostManagementApi for CostManagementClient {
    async fn query(
        &self,
        scope: &str,
        definition: &QueryDefinition,
    ) -> Result<QueryResult, ProviderError> {
        self.post_tabular(scope, "query", definition).await
    }

    async fn forecast(
        &self,
        scope: &str,
        definition: &ForecastDefinition,
    ) -> Result<QueryResult, ProviderError> {
        self.post_tabular(scope, "forecast", definition).await
    }
}
