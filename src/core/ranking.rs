//! Performance rankings.

use crate::core::dataset::Dataset;
use crate::core::dedup::deduplicate;
use crate::core::fund::{FundRecord, Period};
use crate::core::query::SearchCriteria;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

/// Value a ranking sorts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Return(Period),
    Sharpe,
    DividendYield,
    /// Annualized standard deviation. Lower ranks higher.
    Volatility,
}

impl Metric {
    pub fn value(&self, fund: &FundRecord) -> Option<f64> {
        match self {
            Metric::Return(period) => fund.period_return(*period),
            Metric::Sharpe => fund.sharpe_ratio,
            Metric::DividendYield => fund.dividend_yield,
            Metric::Volatility => fund.volatility,
        }
    }

    pub fn ascending(&self) -> bool {
        matches!(self, Metric::Volatility)
    }

    pub fn label(&self) -> String {
        match self {
            Metric::Return(period) => format!("{} return", period.label()),
            Metric::Sharpe => "Sharpe ratio".to_string(),
            Metric::DividendYield => "Dividend yield".to_string(),
            Metric::Volatility => "Annualized std dev (low to high)".to_string(),
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Return(period) => write!(f, "{period}"),
            Metric::Sharpe => write!(f, "sharpe"),
            Metric::DividendYield => write!(f, "dividendYield"),
            Metric::Volatility => write!(f, "stddev"),
        }
    }
}

impl FromStr for Metric {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(period) = s.parse::<Period>() {
            return Ok(Metric::Return(period));
        }
        match s.to_lowercase().as_str() {
            "sharpe" => Ok(Metric::Sharpe),
            "dividendyield" => Ok(Metric::DividendYield),
            "stddev" | "volatility" => Ok(Metric::Volatility),
            _ => Err(anyhow!("Invalid ranking metric: {}", s)),
        }
    }
}

/// Inclusive bounds on one period's return. Either bound may be open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnRange {
    pub period: Period,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ReturnRange {
    /// A record without a figure for `period` is never in range.
    pub fn contains(&self, fund: &FundRecord) -> bool {
        let Some(value) = fund.period_return(self.period) else {
            return false;
        };
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Best `limit` funds matching `filters` by `metric`.
///
/// Records missing the metric are left out. Equal values keep dataset order.
/// `limit` is not clamped here.
pub fn top_performers<'a>(
    dataset: &'a Dataset,
    filters: &SearchCriteria,
    metric: Metric,
    range: Option<&ReturnRange>,
    limit: usize,
) -> Vec<&'a FundRecord> {
    let candidates: Vec<&FundRecord> = dataset
        .iter()
        .filter(|f| filters.matches(f))
        .filter(|f| range.is_none_or(|r| r.contains(f)))
        .collect();
    debug!(
        "Ranking {} candidates by {}",
        candidates.len(),
        metric.label()
    );
    rank_records(candidates, metric, limit)
}

/// String-keyed entry point. An unrecognized key yields no results.
pub fn top_performers_by_key<'a>(
    dataset: &'a Dataset,
    filters: &SearchCriteria,
    metric_key: &str,
    range: Option<&ReturnRange>,
    limit: usize,
) -> Vec<&'a FundRecord> {
    match metric_key.parse::<Metric>() {
        Ok(metric) => top_performers(dataset, filters, metric, range, limit),
        Err(e) => {
            debug!("Unknown metric key, returning no results: {e}");
            Vec::new()
        }
    }
}

/// Sorts `records` by `metric`, drops duplicates and truncates.
pub fn rank_records(records: Vec<&FundRecord>, metric: Metric, limit: usize) -> Vec<&FundRecord> {
    let mut scored: Vec<(f64, &FundRecord)> = records
        .into_iter()
        .filter_map(|f| metric.value(f).map(|v| (v, f)))
        .collect();

    // sort_by is stable: ties stay in input order
    if metric.ascending() {
        scored.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    } else {
        scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    }

    let mut ranked = deduplicate(scored, |(_, f)| *f);
    ranked.truncate(limit);
    ranked.into_iter().map(|(_, f)| f).collect()
}
