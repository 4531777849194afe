//! Services module
//!
//! This module contains business logic and service implementations

pub mod cost;

pub use cost::{
    CostService, CostSummary, DailyServiceCost, Days, ForecastResult, ResourceGroupCost,
    SubscriptionInfo,
};
