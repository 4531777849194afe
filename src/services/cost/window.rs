//! UTC date windows for cost queries

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde::Serialize;

use super::types::Days;
use crate::core::providers::azure::QueryTimePeriod;

/// Inclusive `[start, end]` window; start at 00:00:00, end at 23:59:59
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    /// From `days` days ago through the end of today
    pub fn trailing(now: DateTime<Utc>, days: Days) -> Self {
        let today = now.date_naive();
        Self::spanning(today - Duration::days(days.get() as i64), today)
    }

    /// From the start of tomorrow through the end of the `days`-th day ahead
    pub fn upcoming(now: DateTime<Utc>, days: Days) -> Self {
        let today = now.date_naive();
        Self::spanning(
            today + Duration::days(1),
            today + Duration::days(days.get() as i64),
        )
    }

    fn spanning(first: NaiveDate, last: NaiveDate) -> Self {
        let start = first.and_time(NaiveTime::MIN);
        let end = last.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::seconds(1);

        Self {
            start: start.and_utc(),
            end: end.and_utc(),
        }
    }

    /// Calendar days between the start and end dates
    pub fn calendar_days(&self) -> i64 {
        (self.end.date_naive() - self.start.date_naive()).num_days()
    }

    /// Wire representation, e.g. `2024-01-01T00:00:00Z`
    pub fn time_period(&self) -> QueryTimePeriod {
        QueryTimePeriod {
            from: self.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            to: self.end.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
