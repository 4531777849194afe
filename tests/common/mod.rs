//! Common test utilities for smartcost-api
//!
//! - Configuration fixtures
//! - Canned Azure Resource Manager response bodies
//! - Clients and services bound to a `wiremock` server


use smartcost_api::core::providers::azure::{
    ArmClient, CostManagementClient, StaticToken, SubscriptionClient,
};
use smartcost_api::services::cost::CostService;
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

pub use fixtures::*;

/// Bearer token every mock endpoint expects
pub const TEST_TOKEN: &str = "test-token";

/// ARM transport aimed at `server`
pub fn arm_client(server: &MockServer) -> Arc<ArmClient> {
    arm_client_with_timeout(server, Duration::from_secs(5))
}

pub fn arm_client_with_timeout(server: &MockServer, timeout: Duration) -> Arc<ArmClient> {
    Arc::new(
        ArmClient::new(Arc::new(StaticToken::new(TEST_TOKEN)), &server.uri(), timeout)
            .expect("ARM client should build"),
    )
}

/// Cost service using the real HTTP clients against `server`
pub fn cost_service(server: &MockServer) -> CostService {
    let arm = arm_client(server);
    CostService::new(
        Arc::new(CostManagementClient::new(arm.clone())),
        Arc::new(SubscriptionClient::new(arm)),
        SUBSCRIPTION_ID,
    )
}
