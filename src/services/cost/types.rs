//! Cost service request and response types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::providers::azure::QueryDefinition;

/// Smallest accepted look-back/forecast horizon
pub const MIN_DAYS: u16 = 1;
/// Largest accepted look-back/forecast horizon
pub const MAX_DAYS: u16 = 365;
/// Horizon used when the caller does not specify one
pub const DEFAULT_DAYS: u16 = 30;

/// Number of days, guaranteed to lie in `[MIN_DAYS, MAX_DAYS]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Days(u16);

impl Days {
    pub fn new(value: i64) -> Result<Self, String> {
        if (MIN_DAYS as i64..=MAX_DAYS as i64).contains(&value) {
            Ok(Self(value as u16))
        } else {
            Err(format!(
                "days must be between {} and {}, got {}",
                MIN_DAYS, MAX_DAYS, value
            ))
        }
    }

    pub fn get(self) -> u32 {
        self.0 as u32
    }
}

impl Default for Days {
    fn default() -> Self {
        Self(DEFAULT_DAYS)
    }
}

impl TryFrom<i64> for Days {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Days> for u32 {
    fn from(days: Days) -> Self {
        days.get()
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Subscription snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionInfo {
    pub subscription_id: String,
    pub display_name: String,
    pub state: String,
}

/// One day of cost for one service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyServiceCost {
    pub date: NaiveDate,
    pub service_name: String,
    pub cost: f64,
    pub currency: String,
}

/// Cost summary over a trailing window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Resource path the query was bound to
    pub scope: String,
    /// Human-readable length, e.g. "30 days"
    pub period: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// The query sent to Cost Management
    pub query_params: QueryDefinition,
    pub total_cost: f64,
    pub currency: String,
    /// Realized daily series grouped by service
    pub daily_costs: Vec<DailyServiceCost>,
    pub message: String,
}

/// Month-to-date cost of one resource group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceGroupCost {
    pub resource_group: String,
    pub cost: f64,
    pub currency: String,
}

/// Projected cost over an upcoming window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub forecast_days: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub estimated_cost: f64,
    pub currency: String,
    pub message: String,
}
