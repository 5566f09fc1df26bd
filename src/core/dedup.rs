//! Share-class deduplication.
//!
//! A fund is often listed several times: one record per currency or
//! distribution class, all with the same top holdings. Results keep only the
//! first record of each such group, so whatever ordering ran before
//! deduplication decides which share class is shown.

use crate::core::fund::FundRecord;
use std::collections::HashSet;

/// Order-independent key of a record's holdings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Sorted holding names joined with `|`.
    ///
    /// Returns `None` for a record without holdings: an empty list tells
    /// nothing about the underlying portfolio, so such records are never
    /// merged with each other.
    pub fn of(fund: &FundRecord) -> Option<Self> {
        if fund.holdings.is_empty() {
            return None;
        }
        let mut names: Vec<&str> = fund
            .holdings
            .iter()
            .map(|h| h.stock_name.as_str())
            .collect();
        names.sort_unstable();
        Some(Fingerprint(names.join("|")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Keeps the first item of every fingerprint group, preserving order.
pub fn deduplicate<T, F>(items: Vec<T>, fund_of: F) -> Vec<T>
where
    F: Fn(&T) -> &FundRecord,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| match Fingerprint::of(fund_of(item)) {
            Some(fp) => seen.insert(fp),
            None => true,
        })
        .collect()
}
