//! Azure Resource Manager provider
//!
//! Credential handling, the ARM transport, and typed clients for the
//! Subscriptions and Cost Management APIs.

pub mod client;
pub mod credential;
pub mod error;
pub mod models;

pub use client::{
    ArmClient, COST_MANAGEMENT_API_VERSION, CostManagementClient, SUBSCRIPTION_API_VERSION,
    SubscriptionClient,
};
pub use credential::{AzureCredential, StaticToken, TokenProvider};
pub use error::ProviderError;
pub use models::*;
