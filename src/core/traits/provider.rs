//! Upstream provider interfaces
//!
//! The cost service talks to the cloud provider only through these traits, so
//! the HTTP clients can be swapped for fakes in tests.

use async_trait::async_trait;

use crate::core::providers::azure::{
    ForecastDefinition, ProviderError, QueryDefinition, QueryResult, SubscriptionResource,
};

/// Cost Management endpoints (query and forecast)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CostManagementApi: Send + Sync {
    /// Run an aggregated cost query against `scope`
    async fn query(
        &self,
        scope: &str,
        definition: &QueryDefinition,
    ) -> Result<QueryResult, ProviderError>;

    /// Run a cost forecast against `scope`
    async fn forecast(
        &self,
        scope: &str,
        definition: &ForecastDefinition,
    ) -> Result<QueryResult, ProviderError>;
}

/// Subscription lookup
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionApi: Send + Sync {
    async fn get_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<SubscriptionResource, ProviderError>;
}
