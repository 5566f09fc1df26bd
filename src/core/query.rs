//! Multi-predicate fund search.

use crate::core::dataset::Dataset;
use crate::core::dedup::deduplicate;
use crate::core::fund::{AssetClass, DividendFrequency, FundRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Search filters. Every field is optional and set fields are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Case-insensitive substring of name, issuer or identifier.
    pub keyword: Option<String>,
    pub asset_class: Option<AssetClass>,
    /// Exact risk level.
    pub risk_level: Option<u8>,
    /// Upper bound on the risk level, independent of `risk_level`.
    pub max_risk_level: Option<u8>,
    /// Substring of the investment area.
    pub area: Option<String>,
    pub category: Option<String>,
    pub dividend_frequency: Option<DividendFrequency>,
    /// Tag that must appear in the record's trading types.
    pub trading_type: Option<String>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        *self == SearchCriteria::default()
    }

    /// Applies every filter to a single record, without deduplication.
    pub fn matches(&self, fund: &FundRecord) -> bool {
        if let Some(keyword) = &self.keyword {
            let kw = keyword.to_lowercase();
            let hit = fund.name.to_lowercase().contains(&kw)
                || fund.issuer.to_lowercase().contains(&kw)
                || fund.id.to_lowercase().contains(&kw);
            if !hit {
                return false;
            }
        }
        if self.asset_class.is_some_and(|a| a != fund.asset_class) {
            return false;
        }
        if self.risk_level.is_some_and(|r| r != fund.risk_level) {
            return false;
        }
        if self.max_risk_level.is_some_and(|r| fund.risk_level > r) {
            return false;
        }
        if let Some(area) = &self.area {
            if !fund.area.contains(area.as_str()) {
                return false;
            }
        }
        if self.category.as_ref().is_some_and(|c| *c != fund.category) {
            return false;
        }
        if self
            .dividend_frequency
            .is_some_and(|d| d != fund.dividend_frequency)
        {
            return false;
        }
        if let Some(tag) = &self.trading_type {
            if !fund.trading_types.iter().any(|t| t == tag) {
                return false;
            }
        }
        true
    }
}

/// Returns the deduplicated records matching `criteria`, in dataset order.
pub fn search<'a>(dataset: &'a Dataset, criteria: &SearchCriteria) -> Vec<&'a FundRecord> {
    let matched: Vec<&FundRecord> = dataset.iter().filter(|f| criteria.matches(f)).collect();
    let matched_count = matched.len();
    let results = deduplicate(matched, |f| *f);
    debug!(
        "Search matched {} records, {} after share-class deduplication",
        matched_count,
        results.len()
    );
    results
}
