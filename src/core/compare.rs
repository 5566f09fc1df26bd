//! Side-by-side comparison of a few funds.

use crate::core::dataset::Dataset;
use crate::core::error::InsufficientFunds;
use crate::core::fund::FundRecord;
use tracing::debug;

pub const MIN_FUNDS: usize = 2;

#[derive(Debug, Clone)]
pub struct Comparison<'a> {
    /// Resolved funds in request order.
    pub funds: Vec<&'a FundRecord>,
    pub not_found: Vec<String>,
}

/// Resolves `ids` for comparison. Share classes are kept apart: comparing
/// the currency classes of one fund is a legitimate request.
pub fn compare<'a, S: AsRef<str>>(
    dataset: &'a Dataset,
    ids: &[S],
) -> Result<Comparison<'a>, InsufficientFunds> {
    let mut funds = Vec::new();
    let mut not_found = Vec::new();
    for id in ids {
        match dataset.get(id.as_ref()) {
            Some(fund) => funds.push(fund),
            None => not_found.push(id.as_ref().to_string()),
        }
    }

    if funds.len() < MIN_FUNDS {
        debug!("Comparison needs {MIN_FUNDS} funds, not found: {:?}", not_found);
        return Err(InsufficientFunds {
            required: MIN_FUNDS,
            resolved: funds.len(),
            not_found,
            collapsed: Vec::new(),
        });
    }

    Ok(Comparison { funds, not_found })
}
