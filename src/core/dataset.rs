//! Immutable, load-once fund catalog.

use crate::core::error::DatasetError;
use crate::core::fund::{FundRecord, RISK_MAX, RISK_MIN};
use std::collections::HashMap;
use tracing::debug;

/// Ordered collection of fund records indexed by identifier.
///
/// A `Dataset` is built once and only ever borrowed afterwards, so it can be
/// shared between threads without locking.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    funds: Vec<FundRecord>,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Validates and indexes `funds`, keeping their order.
    pub fn new(funds: Vec<FundRecord>) -> Result<Self, DatasetError> {
        let mut index = HashMap::with_capacity(funds.len());
        for (pos, fund) in funds.iter().enumerate() {
            validate(fund)?;
            if index.insert(fund.id.clone(), pos).is_some() {
                return Err(DatasetError::DuplicateId {
                    id: fund.id.clone(),
                });
            }
        }
        debug!("Indexed {} fund records", funds.len());
        Ok(Self { funds, index })
    }

    pub fn get(&self, id: &str) -> Option<&FundRecord> {
        self.index.get(id).map(|&pos| &self.funds[pos])
    }

    pub fn funds(&self) -> &[FundRecord] {
        &self.funds
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FundRecord> {
        self.funds.iter()
    }

    pub fn len(&self) -> usize {
        self.funds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a FundRecord;
    type IntoIter = std::slice::Iter<'a, FundRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate(fund: &FundRecord) -> Result<(), DatasetError> {
    if !(RISK_MIN..=RISK_MAX).contains(&fund.risk_level) {
        return Err(DatasetError::RiskLevelOutOfRange {
            id: fund.id.clone(),
            level: fund.risk_level,
            min: RISK_MIN,
            max: RISK_MAX,
        });
    }
    if let Some(bad) = fund
        .holdings
        .iter()
        .find(|h| !h.weight.is_finite() || h.weight < 0.0)
    {
        return Err(DatasetError::InvalidWeight {
            id: fund.id.clone(),
            stock: bad.stock_name.clone(),
            weight: bad.weight,
        });
    }
    Ok(())
}
