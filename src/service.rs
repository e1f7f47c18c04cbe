use chrono::{Local, NaiveDate};
use log::debug;
use serde::Serialize;

use crate::error::CalcError;
use crate::expr;
use crate::stats::UsageStats;

/// Snapshot of the daily counter, as exposed by the usage query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyUsage {
    /// Local calendar date, serialized as ISO-8601.
    pub date: NaiveDate,
    pub today_count: u64,
}

/// The calculator service: the pure expression pipeline plus the one piece
/// of shared state, the daily usage counter.
///
/// The counter is bumped exactly once per *successful* free-text
/// computation; failed computations and the structured endpoint never
/// touch it. Neither expressions nor results are recorded.
pub struct CalcService<S> {
    stats: S,
}

impl<S: UsageStats> CalcService<S> {
    pub fn new(stats: S) -> Self {
        Self { stats }
    }

    /// Evaluates a free-text expression and records the success.
    pub fn compute(&self, expression: &str) -> Result<f64, CalcError> {
        let result = expr::compute(expression)?;
        let count = self.stats.increment(today());
        debug!("Computation #{} for today succeeded", count);
        Ok(result)
    }

    /// Usage snapshot for the current local calendar day.
    pub fn today_usage(&self) -> DailyUsage {
        let date = today();
        DailyUsage {
            date,
            today_count: self.stats.count(date),
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
