//! Azure Cost Management and Subscription wire types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Cost data type requested from Cost Management
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportType {
    Usage,
    ActualCost,
    AmortizedCost,
}

/// Time frame of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    Custom,
    MonthToDate,
    BillingMonthToDate,
    TheLastMonth,
}

/// Time bucketing of aggregated rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    Daily,
    Monthly,
}

/// Explicit `[from, to]` range for `Timeframe::Custom`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTimePeriod {
    pub from: String,
    pub to: String,
}

/// Aggregated column, e.g. `Sum(PreTaxCost)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryAggregation {
    pub name: String,
    pub function: String,
}

impl QueryAggregation {
    pub fn sum(column: impl Into<String>) -> Self {
        Self {
            name: column.into(),
            function: "Sum".to_string(),
        }
    }
}

/// Grouping clause, e.g. by the `ServiceName` dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryGrouping {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

impl QueryGrouping {
    pub fn dimension(name: impl Into<String>) -> Self {
        Self {
            kind: "Dimension".to_string(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,
    pub aggregation: BTreeMap<String, QueryAggregation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grouping: Vec<QueryGrouping>,
}

/// Body of `POST {scope}/providers/Microsoft.CostManagement/query`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDefinition {
    #[serde(rename = "type")]
    pub export_type: ExportType,
    pub timeframe: Timeframe,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_period: Option<QueryTimePeriod>,
    pub dataset: QueryDataset,
}

/// Body of `POST {scope}/providers/Microsoft.CostManagement/forecast`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDefinition {
    #[serde(rename = "type")]
    pub export_type: ExportType,
    pub timeframe: Timeframe,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_period: Option<QueryTimePeriod>,
    pub dataset: QueryDataset,
    pub include_actual_cost: bool,
    pub include_fresh_partial_cost: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryColumn {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryProperties {
    #[serde(default)]
    pub next_link: Option<String>,
    #[serde(default)]
    pub columns: Vec<QueryColumn>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

/// Tabular result shared by the query and forecast endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub properties: QueryProperties,
}

impl QueryResult {
    /// Build a result from columns and rows
    pub fn new(columns: &[&str], rows: Vec<Vec<Value>>) -> Self {
        Self {
            id: None,
            name: None,
            properties: QueryProperties {
                next_link: None,
                columns: columns
                    .iter()
                    .map(|name| QueryColumn {
                        name: name.to_string(),
                        kind: String::new(),
                    })
                    .collect(),
                rows,
            },
        }
    }

    /// Index of the first column matching any of `names` (case-insensitive)
    pub fn column_index(&self, names: &[&str]) -> Option<usize> {
        names.iter().find_map(|wanted| {
            self.properties
                .columns
                .iter()
                .position(|c| c.name.eq_ignore_ascii_case(wanted))
        })
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.properties.rows
    }

    pub fn has_more(&self) -> bool {
        self.properties
            .next_link
            .as_deref()
            .is_some_and(|link| !link.is_empty())
    }
}

/// Numeric cell; Azure sometimes sends numbers as strings
pub fn cell_f64(row: &[Value], index: Option<usize>) -> Option<f64> {
    match row.get(index?)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn cell_str(row: &[Value], index: Option<usize>) -> Option<&str> {
    row.get(index?)?.as_str()
}

/// `UsageDate` cell: `20240131` as number or string, or an ISO timestamp
pub fn cell_date(row: &[Value], index: Option<usize>) -> Option<NaiveDate> {
    let raw = match row.get(index?)? {
        Value::Number(n) => n.as_u64()?.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };

    NaiveDate::parse_from_str(&raw, "%Y%m%d")
        .ok()
        .or_else(|| raw.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}

/// Subset of `GET /subscriptions/{id}` used by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResource {
    pub subscription_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}
