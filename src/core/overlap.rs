//! Holdings overlap across a handful of funds.

use crate::core::dataset::Dataset;
use crate::core::dedup::Fingerprint;
use crate::core::error::InsufficientFunds;
use crate::core::fund::FundRecord;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use tracing::debug;

/// Minimum number of distinct funds an overlap analysis needs.
pub const MIN_FUNDS: usize = 2;
/// Shared holdings returned in [`OverlapResult::shared_holdings`].
pub const MAX_SHARED_HOLDINGS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConcentrationWarning {
    /// More than half of the distinct stocks are shared.
    High,
    /// More than 30% and at most half of the distinct stocks are shared.
    Moderate,
}

impl ConcentrationWarning {
    fn from_ratio(ratio: f64) -> Option<Self> {
        if ratio > 50.0 {
            Some(ConcentrationWarning::High)
        } else if ratio > 30.0 {
            Some(ConcentrationWarning::Moderate)
        } else {
            None
        }
    }
}

impl Display for ConcentrationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConcentrationWarning::High => write!(
                f,
                "High overlap: more than 50% of these funds' top holdings are shared, \
                 so diversification is limited. Consider funds of a different type or region."
            ),
            ConcentrationWarning::Moderate => write!(
                f,
                "Moderate overlap: these funds share a fair part of their top holdings. \
                 Consider adding funds from other sectors or regions."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundHoldingCount {
    pub id: String,
    pub name: String,
    pub holding_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingContribution {
    pub fund_id: String,
    pub fund_name: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedHolding {
    /// Normalized (trimmed, upper-cased) stock name.
    pub stock_name: String,
    pub contributions: Vec<HoldingContribution>,
    pub fund_count: usize,
    pub average_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapResult {
    pub funds: Vec<FundHoldingCount>,
    /// Top shared holdings, at most [`MAX_SHARED_HOLDINGS`].
    pub shared_holdings: Vec<SharedHolding>,
    /// Number of shared holdings before the cap.
    pub shared_total: usize,
    pub distinct_stocks: usize,
    /// Shared stocks as a percentage of distinct stocks, one decimal.
    pub overlap_ratio: f64,
    pub concentration_warning: Option<ConcentrationWarning>,
    pub not_found: Vec<String>,
    /// Requested ids dropped as share classes of an earlier fund.
    pub collapsed: Vec<String>,
}

/// Analyses the shared top holdings of the funds named by `ids`.
///
/// Ids are resolved in order and share classes of a fund already in the
/// request are dropped, so two classes of one fund never count as two funds.
pub fn overlap<S: AsRef<str>>(
    dataset: &Dataset,
    ids: &[S],
) -> Result<OverlapResult, InsufficientFunds> {
    let mut funds: Vec<&FundRecord> = Vec::new();
    let mut not_found = Vec::new();
    let mut collapsed = Vec::new();
    let mut seen = HashSet::new();

    for id in ids {
        let id = id.as_ref();
        let Some(fund) = dataset.get(id) else {
            not_found.push(id.to_string());
            continue;
        };
        let is_new = match Fingerprint::of(fund) {
            Some(fp) => seen.insert(fp),
            None => !funds.iter().any(|f| f.id == fund.id),
        };
        if is_new {
            funds.push(fund);
        } else {
            collapsed.push(id.to_string());
        }
    }

    if funds.len() < MIN_FUNDS {
        debug!(
            "Overlap needs {MIN_FUNDS} funds, got {} (not found: {:?}, collapsed: {:?})",
            funds.len(),
            not_found,
            collapsed
        );
        return Err(InsufficientFunds {
            required: MIN_FUNDS,
            resolved: funds.len(),
            not_found,
            collapsed,
        });
    }

    // Stock name -> contributions, in first-seen order
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut stocks: Vec<(String, Vec<HoldingContribution>)> = Vec::new();
    for fund in &funds {
        for holding in &fund.holdings {
            let name = holding.stock_name.trim().to_uppercase();
            let pos = *positions.entry(name.clone()).or_insert_with(|| {
                stocks.push((name, Vec::new()));
                stocks.len() - 1
            });
            stocks[pos].1.push(HoldingContribution {
                fund_id: fund.id.clone(),
                fund_name: fund.name.clone(),
                weight: holding.weight,
            });
        }
    }

    let distinct_stocks = stocks.len();
    let mut shared: Vec<SharedHolding> = stocks
        .into_iter()
        .filter_map(|(stock_name, contributions)| {
            let fund_count = contributions
                .iter()
                .map(|c| c.fund_id.as_str())
                .collect::<HashSet<_>>()
                .len();
            if fund_count < MIN_FUNDS {
                return None;
            }
            let average_weight =
                contributions.iter().map(|c| c.weight).sum::<f64>() / contributions.len() as f64;
            Some(SharedHolding {
                stock_name,
                contributions,
                fund_count,
                average_weight,
            })
        })
        .collect();

    shared.sort_by(|a, b| {
        b.fund_count
            .cmp(&a.fund_count)
            .then_with(|| b.average_weight.total_cmp(&a.average_weight))
    });

    let shared_total = shared.len();
    let overlap_ratio = if distinct_stocks > 0 {
        round_to_tenth(shared_total as f64 / distinct_stocks as f64 * 100.0)
    } else {
        0.0
    };
    shared.truncate(MAX_SHARED_HOLDINGS);

    debug!(
        "{} of {} distinct stocks shared across {} funds ({}%)",
        shared_total,
        distinct_stocks,
        funds.len(),
        overlap_ratio
    );

    Ok(OverlapResult {
        funds: funds
            .iter()
            .map(|f| FundHoldingCount {
                id: f.id.clone(),
                name: f.name.clone(),
                holding_count: f.holdings.len(),
            })
            .collect(),
        shared_holdings: shared,
        shared_total,
        distinct_stocks,
        overlap_ratio,
        concentration_warning: ConcentrationWarning::from_ratio(overlap_ratio),
        not_found,
        collapsed,
    })
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FundBuilder;

    #[test]
    fn test_disjoint_funds_have_no_overlap() {
        let dataset = Dataset::new(vec![
            FundBuilder::new("A").holding("X", 0.1).holding("Y", 0.05).build(),
            FundBuilder::new("C").holding("Z", 0.2).build(),
        ])
        .unwrap();

        let result = overlap(&dataset, &["A", "C"]).unwrap();
        assert_eq!(result.overlap_ratio, 0.0);
        assert_eq!(result.concentration_warning, None);
        assert!(result.shared_holdings.is_empty());
        assert_eq!(result.distinct_stocks, 3);
        assert_eq!(result.funds[0].holding_count, 2);
        assert_eq!(result.funds[1].holding_count, 1);
    }

    #[test]
    fn test_average_weight_of_shared_stock() {
        let dataset = Dataset::new(vec![
            FundBuilder::new("A").holding("TSMC", 0.05).holding("Apple", 0.03).build(),
            FundBuilder::new("B").holding(" tsmc ", 0.07).holding("Sony", 0.02).build(),
        ])
        .unwrap();

        let result = overlap(&dataset, &["A", "B"]).unwrap();
        assert_eq!(result.shared_total, 1);
        let tsmc = &result.shared_holdings[0];
        assert_eq!(tsmc.stock_name, "TSMC");
        assert_eq!(tsmc.fund_count, 2);
        assert!((tsmc.average_weight - 0.06).abs() < 1e-9);
        // 1 shared of 3 distinct
        assert_eq!(result.overlap_ratio, 33.3);
        assert_eq!(result.concentration_warning, Some(ConcentrationWarning::Moderate));
    }

    #[test]
    fn test_shared_holdings_sorted_by_fund_count_then_weight() {
        let dataset = Dataset::new(vec![
            FundBuilder::new("A")
                .holding("LOW", 0.01)
                .holding("HIGH", 0.09)
                .holding("ALL", 0.02)
                .build(),
            FundBuilder::new("B")
                .holding("LOW", 0.01)
                .holding("HIGH", 0.09)
                .holding("ALL", 0.02)
                .holding("B-ONLY", 0.5)
                .build(),
            FundBuilder::new("C").holding("ALL", 0.02).build(),
        ])
        .unwrap();

        let result = overlap(&dataset, &["A", "B", "C"]).unwrap();
        let names: Vec<&str> = result
            .shared_holdings
            .iter()
            .map(|s| s.stock_name.as_str())
            .collect();
        assert_eq!(names, vec!["ALL", "HIGH", "LOW"]);
        // 3 shared of 4 distinct
        assert_eq!(result.overlap_ratio, 75.0);
        assert_eq!(result.concentration_warning, Some(ConcentrationWarning::High));
    }

    #[test]
    fn test_warning_thresholds() {
        assert_eq!(ConcentrationWarning::from_ratio(50.1), Some(ConcentrationWarning::High));
        assert_eq!(ConcentrationWarning::from_ratio(50.0), Some(ConcentrationWarning::Moderate));
        assert_eq!(ConcentrationWarning::from_ratio(30.1), Some(ConcentrationWarning::Moderate));
        assert_eq!(ConcentrationWarning::from_ratio(30.0), None);
    }

    #[test]
    fn test_shared_holdings_are_capped() {
        let mut a = FundBuilder::new("A");
        let mut b = FundBuilder::new("B").holding("B-ONLY", 0.01);
        for i in 0..25 {
            let name = format!("STOCK{i:02}");
            a = a.holding(&name, 0.01);
            b = b.holding(&name, 0.01);
        }
        let dataset = Dataset::new(vec![a.build(), b.build()]).unwrap();

        let result = overlap(&dataset, &["A", "B"]).unwrap();
        assert_eq!(result.shared_holdings.len(), MAX_SHARED_HOLDINGS);
        assert_eq!(result.shared_total, 25);
        assert_eq!(result.distinct_stocks, 26);
        assert_eq!(result.overlap_ratio, 96.2);
    }

    #[test]
    fn test_unresolved_ids_are_reported() {
        let dataset = Dataset::new(vec![FundBuilder::new("A").holding("X", 0.1).build()]).unwrap();

        let err = overlap(&dataset, &["A", "NOPE"]).unwrap_err();
        assert_eq!(err.resolved, 1);
        assert_eq!(err.not_found, vec!["NOPE".to_string()]);
        assert!(err.collapsed.is_empty());
    }

    #[test]
    fn test_share_classes_count_as_one_fund() {
        let dataset = Dataset::new(vec![
            FundBuilder::new("A").holding("X", 0.1).holding("Y", 0.05).build(),
            FundBuilder::new("B").holding("Y", 0.05).holding("X", 0.1).build(),
            FundBuilder::new("C").holding("X", 0.2).build(),
        ])
        .unwrap();

        let err = overlap(&dataset, &["A", "B"]).unwrap_err();
        assert_eq!(err.collapsed, vec!["B".to_string()]);
        assert!(err.not_found.is_empty());

        let result = overlap(&dataset, &["A", "B", "C"]).unwrap();
        assert_eq!(result.funds.len(), 2);
        assert_eq!(result.collapsed, vec!["B".to_string()]);
        assert_eq!(result.shared_total, 1);
    }

    #[test]
    fn test_repeated_id_without_holdings_counts_once() {
        let dataset = Dataset::new(vec![FundBuilder::new("A").build()]).unwrap();
        let err = overlap(&dataset, &["A", "A"]).unwrap_err();
        assert_eq!(err.collapsed, vec!["A".to_string()]);
    }
}
