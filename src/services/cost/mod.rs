//! Cost service backed by Azure Cost Management
//!
//! Builds cost queries for the configured subscription, executes them through
//! the provider traits and normalizes the tabular results into response types.

mod queries;
mod service;
mod types;
mod window;


pub use queries::{DEFAULT_CURRENCY, UNASSIGNED_RESOURCE_GROUP};
pub use service::CostService;
pub use types::{
    CostSummary, DEFAULT_DAYS, DailyServiceCost, Days, ForecastResult, MAX_DAYS, MIN_DAYS,
    ResourceGroupCost, SubscriptionInfo,
};
pub use window::DateWindow;
