//! # SmartCost API
//!
//! HTTP API for monitoring and analyzing Azure costs. The service wraps the
//! Azure Cost Management and Subscriptions APIs behind a small read-only
//! JSON surface.
//!
//! ## Features
//!
//! - **Subscription lookup**: display name and state of the configured subscription
//! - **Cost summary**: daily pre-tax cost per service over a trailing window
//! - **Resource groups**: month-to-date cost per resource group
//! - **Forecast**: projected cost over an upcoming window
//!
//! ## Running
//!
//! ```rust,no_run
//! use smartcost_api::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::providers::azure::ProviderError;
pub use services::cost::{CostService, Days};
pub use utils::error::{Result, SmartCostError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
