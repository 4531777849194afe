//! Azure credential and endpoint configuration

use super::*;
use crate::utils::is_valid_http_url;
use std::fmt;
use std::time::Duration;

/// Azure service principal and subscription settings
#[derive(Clone)]
pub struct AzureConfig {
    /// Azure AD tenant ID
    pub tenant_id: String,
    /// Service principal client ID
    pub client_id: String,
    /// Service principal client secret
    pub client_secret: String,
    /// Subscription whose costs are reported
    pub subscription_id: String,
    /// Azure Resource Manager endpoint
    pub management_endpoint: String,
    /// Upstream request timeout in seconds
    pub timeout: u64,
    /// Acquire a token at startup so bad credentials fail fast
    pub verify_on_startup: bool,
}

impl fmt::Debug for AzureConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AzureConfig")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("subscription_id", &self.subscription_id)
            .field("management_endpoint", &self.management_endpoint)
            .field("timeout", &self.timeout)
            .field("verify_on_startup", &self.verify_on_startup)
            .finish()
    }
}

impl AzureConfig {
    /// Create a configuration with default endpoint and timeout
    pub fn new(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        subscription_id: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            subscription_id: subscription_id.into(),
            management_endpoint: default_management_endpoint(),
            timeout: default_timeout(),
            verify_on_startup: true,
        }
    }

    /// Subscription scope used by cost queries
    pub fn scope(&self) -> String {
        format!("/subscriptions/{}", self.subscription_id)
    }

    /// Upstream request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Validate Azure configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("tenant_id", &self.tenant_id),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("subscription_id", &self.subscription_id),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{} cannot be empty", name));
            }
        }

        if self.subscription_id.contains('/') {
            return Err("subscription_id must be a bare identifier, not a path".to_string());
        }

        if !is_valid_http_url(&self.management_endpoint) {
            return Err(format!(
                "Invalid management endpoint: {}",
                self.management_endpoint
            ));
        }

        if self.timeout == 0 {
            return Err("Timeout cannot be 0".to_string());
        }

        Ok(())
    }
}
