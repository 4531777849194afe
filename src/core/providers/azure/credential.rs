//! Bearer token acquisition for Azure Resource Manager

use async_trait::async_trait;
use azure_core::credentials::{Secret, TokenCredential};
use azure_identity::ClientSecretCredential;
use std::sync::Arc;
use tracing::debug;

use super::error::ProviderError;

/// Source of bearer tokens for ARM requests
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<String, ProviderError>;
}

/// Service principal credential (tenant + client id + client secret)
pub struct AzureCredential {
    credential: Arc<ClientSecretCredential>,
    scope: String,
}

impl AzureCredential {
    /// Build the credential. Malformed tenant/client/secret values are rejected here,
    /// before any network traffic.
    pub fn new(
        tenant_id: &str,
        client_id: &str,
        client_secret: &str,
        management_endpoint: &str,
    ) -> Result<Self, ProviderError> {
        let credential = ClientSecretCredential::new(
            tenant_id,
            client_id.to_string(),
            Secret::new(client_secret.to_string()),
            None,
        )
        .map_err(|e| ProviderError::configuration(format!("Invalid Azure credential: {}", e)))?;

        Ok(Self {
            credential,
            scope: token_scope(management_endpoint),
        })
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}

#[async_trait]
impl TokenProvider for AzureCredential {
    async fn token(&self) -> Result<String, ProviderError> {
        debug!(scope = %self.scope, "Acquiring Azure access token");

        let access_token = self
            .credential
            .get_token(&[self.scope.as_str()], None)
            .await
            .map_err(|e| {
                ProviderError::authentication(format!("Failed to acquire Azure token: {}", e))
            })?;

        Ok(access_token.token.secret().to_string())
    }
}

/// A pre-acquired token, e.g. one handed over by a sidecar
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Result<String, ProviderError> {
        Ok(self.0.clone())
    }
}

/// `.default` scope for the given management endpoint
pub fn token_scope(management_endpoint: &str) -> String {
    format!("{}/.default", management_endpoint.trim_end_matches('/'))
}
