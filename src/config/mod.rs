//! Configuration management for the SmartCost API
//!
//! Settings are read once at startup from the process environment (optionally
//! seeded from a `.env` file by the binary) and are read-only afterwards.

pub mod models;

pub use models::*;

use crate::utils::error::{Result, SmartCostError};
use crate::utils::logging::LogFormat;
use crate::utils::parse_bool_flag;
use std::str::FromStr;
use tracing::debug;

/// Environment variable names
pub mod env_keys {
    pub const TENANT_ID: &str = "AZURE_TENANT_ID";
    pub const CLIENT_ID: &str = "AZURE_CLIENT_ID";
    pub const CLIENT_SECRET: &str = "AZURE_CLIENT_SECRET";
    pub const SUBSCRIPTION_ID: &str = "AZURE_SUBSCRIPTION_ID";
    pub const MANAGEMENT_ENDPOINT: &str = "AZURE_MANAGEMENT_ENDPOINT";
    pub const REQUEST_TIMEOUT: &str = "AZURE_REQUEST_TIMEOUT_SECS";
    pub const VERIFY_CREDENTIALS: &str = "AZURE_VERIFY_CREDENTIALS";
    pub const HOST: &str = "API_HOST";
    pub const PORT: &str = "API_PORT";
    pub const WORKERS: &str = "API_WORKERS";
    pub const DEBUG: &str = "DEBUG";
    pub const CORS_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct Config {
    /// Azure credential and endpoint settings
    pub azure: AzureConfig,
    /// HTTP server settings
    pub server: ServerConfig,
}

impl Config {
    /// Create a configuration from parts
    pub fn new(azure: AzureConfig, server: ServerConfig) -> Self {
        Self { azure, server }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let required = [
            env_keys::TENANT_ID,
            env_keys::CLIENT_ID,
            env_keys::CLIENT_SECRET,
            env_keys::SUBSCRIPTION_ID,
        ];
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|key| get(key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(SmartCostError::config(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let mut azure = AzureConfig::new(
            get(env_keys::TENANT_ID).unwrap_or_default(),
            get(env_keys::CLIENT_ID).unwrap_or_default(),
            get(env_keys::CLIENT_SECRET).unwrap_or_default(),
            get(env_keys::SUBSCRIPTION_ID).unwrap_or_default(),
        );
        if let Some(endpoint) = get(env_keys::MANAGEMENT_ENDPOINT) {
            azure.management_endpoint = endpoint.trim_end_matches('/').to_string();
        }
        if let Some(timeout) = get(env_keys::REQUEST_TIMEOUT) {
            azure.timeout = parse_value(env_keys::REQUEST_TIMEOUT, &timeout)?;
        }
        if let Some(verify) = get(env_keys::VERIFY_CREDENTIALS) {
            azure.verify_on_startup = parse_flag(env_keys::VERIFY_CREDENTIALS, &verify)?;
        }

        let mut server = ServerConfig::default();
        if let Some(host) = get(env_keys::HOST) {
            server.host = host;
        }
        if let Some(port) = get(env_keys::PORT) {
            server.port = parse_value(env_keys::PORT, &port)?;
        }
        if let Some(workers) = get(env_keys::WORKERS) {
            server.workers = Some(parse_value(env_keys::WORKERS, &workers)?);
        }
        if let Some(debug) = get(env_keys::DEBUG) {
            server.debug = parse_flag(env_keys::DEBUG, &debug)?;
        }
        if let Some(format) = get(env_keys::LOG_FORMAT) {
            server.log_format = LogFormat::from_str(&format)
                .map_err(|e| SmartCostError::config(format!("{}: {}", env_keys::LOG_FORMAT, e)))?;
        }
        if let Some(origins) = get(env_keys::CORS_ORIGINS) {
            server.cors = CorsConfig::from_origin_list(&origins);
        }

        let config = Self { azure, server };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get Azure configuration
    pub fn azure(&self) -> &AzureConfig {
        &self.azure
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .validate()
            .map_err(|e| SmartCostError::config(format!("Server config error: {}", e)))?;

        self.azure
            .validate()
            .map_err(|e| SmartCostError::config(format!("Azure config error: {}", e)))?;

        Ok(())
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| SmartCostError::config(format!("Invalid value for {}: {}", key, e)))
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    parse_bool_flag(raw).ok_or_else(|| {
        SmartCostError::config(format!("Invalid boolean for {}: {}", key, raw))
    })
}
