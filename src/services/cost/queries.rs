//! Query construction and result decoding for the cost service

use std::collections::{BTreeMap, HashMap};

use super::types::{DailyServiceCost, ResourceGroupCost};
use super::window::DateWindow;
use crate::core::providers::azure::{
    ExportType, ForecastDefinition, Granularity, ProviderError, QueryAggregation, QueryDataset,
    QueryDefinition, QueryGrouping, QueryResult, Timeframe, cell_date, cell_f64, cell_str,
};

/// Currency reported when the provider omits one
pub const DEFAULT_CURRENCY: &str = "USD";
/// Label for costs not attached to any resource group
pub const UNASSIGNED_RESOURCE_GROUP: &str = "unassigned";

const COST_COLUMNS: &[&str] = &["PreTaxCost", "Cost"];
const CURRENCY_COLUMNS: &[&str] = &["Currency", "BillingCurrency"];

fn total_cost_aggregation(column: &str) -> BTreeMap<String, QueryAggregation> {
    BTreeMap::from([("totalCost".to_string(), QueryAggregation::sum(column))])
}

/// Daily pre-tax cost over `window`, grouped by service name
pub fn summary_query(window: &DateWindow) -> QueryDefinition {
    QueryDefinition {
        export_type: ExportType::Usage,
        timeframe: Timeframe::Custom,
        time_period: Some(window.time_period()),
        dataset: QueryDataset {
            granularity: Some(Granularity::Daily),
            aggregation: total_cost_aggregation("PreTaxCost"),
            grouping: vec![QueryGrouping::dimension("ServiceName")],
        },
    }
}

/// Month-to-date pre-tax cost, one row per resource group
pub fn resource_group_query() -> QueryDefinition {
    QueryDefinition {
        export_type: ExportType::Usage,
        timeframe: Timeframe::MonthToDate,
        time_period: None,
        dataset: QueryDataset {
            granularity: None,
            aggregation: total_cost_aggregation("PreTaxCost"),
            grouping: vec![QueryGrouping::dimension("ResourceGroupName")],
        },
    }
}

/// Daily forecast over `window`, forecast rows only
pub fn forecast_query(window: &DateWindow) -> ForecastDefinition {
    ForecastDefinition {
        export_type: ExportType::Usage,
        timeframe: Timeframe::Custom,
        time_period: Some(window.time_period()),
        dataset: QueryDataset {
            granularity: Some(Granularity::Daily),
            aggregation: total_cost_aggregation("Cost"),
            grouping: vec![],
        },
        include_actual_cost: false,
        include_fresh_partial_cost: false,
    }
}

fn require_cost_column(result: &QueryResult) -> Result<Option<usize>, ProviderError> {
    let index = result.column_index(COST_COLUMNS);
    if index.is_none() && !result.rows().is_empty() {
        return Err(ProviderError::parsing("cost column missing from response"));
    }
    Ok(index)
}

fn row_cost(row: &[serde_json::Value], index: Option<usize>) -> Result<f64, ProviderError> {
    cell_f64(row, index).ok_or_else(|| ProviderError::parsing("non-numeric cost value in response"))
}

fn row_currency(row: &[serde_json::Value], index: Option<usize>) -> String {
    cell_str(row, index)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY)
        .to_uppercase()
}

/// Decode the summary query into a series sorted by date, then service
pub fn decode_daily_costs(result: &QueryResult) -> Result<Vec<DailyServiceCost>, ProviderError> {
    let cost = require_cost_column(result)?;
    let date = result.column_index(&["UsageDate", "Date", "BillingMonth"]);
    let service = result.column_index(&["ServiceName"]);
    let currency = result.column_index(CURRENCY_COLUMNS);

    let mut series = result
        .rows()
        .iter()
        .map(|row| {
            Ok(DailyServiceCost {
                date: cell_date(row, date)
                    .ok_or_else(|| ProviderError::parsing("missing or invalid usage date"))?,
                service_name: cell_str(row, service)
                    .filter(|s| !s.is_empty())
                    .unwrap_or("Unknown")
                    .to_string(),
                cost: row_cost(row, cost)?,
                currency: row_currency(row, currency),
            })
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;

    series.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.service_name.cmp(&b.service_name))
    });
    Ok(series)
}

/// Decode resource group rows, merged by group and sorted by cost descending
pub fn decode_resource_group_costs(
    result: &QueryResult,
) -> Result<Vec<ResourceGroupCost>, ProviderError> {
    let cost = require_cost_column(result)?;
    let group = result.column_index(&["ResourceGroupName", "ResourceGroup"]);
    let currency = result.column_index(CURRENCY_COLUMNS);

    let mut merged: HashMap<(String, String), f64> = HashMap::new();
    for row in result.rows() {
        let name = cell_str(row, group)
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .unwrap_or(UNASSIGNED_RESOURCE_GROUP)
            .to_string();
        *merged.entry((name, row_currency(row, currency))).or_default() += row_cost(row, cost)?;
    }

    let mut groups: Vec<ResourceGroupCost> = merged
        .into_iter()
        .map(|((resource_group, currency), cost)| ResourceGroupCost {
            resource_group,
            cost: round_currency(cost),
            currency,
        })
        .collect();

    groups.sort_by(|a, b| {
        b.cost
            .total_cmp(&a.cost)
            .then_with(|| a.resource_group.cmp(&b.resource_group))
    });
    Ok(groups)
}

/// Sum of the cost column and the reported currency
pub fn decode_total(result: &QueryResult) -> Result<(f64, String), ProviderError> {
    let cost = require_cost_column(result)?;
    let currency = result.column_index(CURRENCY_COLUMNS);

    let entries = result
        .rows()
        .iter()
        .map(|row| Ok((row_cost(row, cost)?, row_currency(row, currency))))
        .collect::<Result<Vec<_>, ProviderError>>()?;

    single_currency_total(entries)
}

/// Sum amounts that all share one currency. Amounts in different currencies
/// cannot be added without conversion.
pub fn single_currency_total(
    entries: impl IntoIterator<Item = (f64, String)>,
) -> Result<(f64, String), ProviderError> {
    let mut total = 0.0;
    let mut currency: Option<String> = None;

    for (cost, entry_currency) in entries {
        match &currency {
            Some(seen) if *seen != entry_currency => {
                return Err(ProviderError::parsing("multiple currencies in response"));
            }
            Some(_) => {}
            None => currency = Some(entry_currency),
        }
        total += cost;
    }

    Ok((
        round_currency(total),
        currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
    ))
}

/// Round to cents
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
