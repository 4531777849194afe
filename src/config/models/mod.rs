//! Configuration data models

pub mod azure;
pub mod server;

pub use azure::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default upstream request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default Azure Resource Manager endpoint
pub fn default_management_endpoint() -> String {
    "https://management.azure.com".to_string()
}
