//! Find funds by the stocks they hold.

use crate::core::dataset::Dataset;
use crate::core::dedup::deduplicate;
use crate::core::fund::{AssetClass, FundRecord, Holding};
use tracing::debug;

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct HoldingMatch<'a> {
    pub fund: &'a FundRecord,
    pub matched: Vec<&'a Holding>,
    /// Sum of the matched holdings' weights.
    pub matched_weight: f64,
}

/// Funds holding any of the comma separated stock names in `stock_query`.
///
/// Matching is a case-insensitive substring test on holding names. Results
/// are sorted by matched weight, heaviest first, then deduplicated.
pub fn search_by_holding<'a>(
    dataset: &'a Dataset,
    stock_query: &str,
    asset_class: Option<AssetClass>,
    limit: usize,
) -> Vec<HoldingMatch<'a>> {
    let keywords: Vec<String> = stock_query
        .to_lowercase()
        .split(',')
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();
    if keywords.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<HoldingMatch<'a>> = dataset
        .iter()
        .filter(|f| asset_class.is_none_or(|a| a == f.asset_class))
        .filter_map(|fund| {
            let matched: Vec<&Holding> = fund
                .holdings
                .iter()
                .filter(|h| {
                    let name = h.stock_name.to_lowercase();
                    keywords.iter().any(|kw| name.contains(kw.as_str()))
                })
                .collect();
            if matched.is_empty() {
                return None;
            }
            let matched_weight = matched.iter().map(|h| h.weight).sum();
            Some(HoldingMatch {
                fund,
                matched,
                matched_weight,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.matched_weight.total_cmp(&a.matched_weight));
    let total = matches.len();
    let mut results = deduplicate(matches, |m| m.fund);
    results.truncate(limit);
    debug!(
        "Holding search {:?} matched {} funds, returning {}",
        keywords,
        total,
        results.len()
    );
    results
}
