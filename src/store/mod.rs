//! Sources the fund catalog is loaded from.

pub mod json;

use crate::core::{Dataset, FundRecord};
use anyhow::{Context, Result};
use tracing::info;

/// Produces the full list of fund records, once, at start-up.
pub trait FundSource: Send + Sync {
    fn load(&self) -> Result<Vec<FundRecord>>;

    /// Human readable origin, used in logs and errors.
    fn describe(&self) -> String;
}

/// Loads and indexes the catalog from `source`.
pub fn load_dataset(source: &dyn FundSource) -> Result<Dataset> {
    let funds = source.load()?;
    let dataset = Dataset::new(funds)
        .with_context(|| format!("Invalid fund catalog in {}", source.describe()))?;
    info!(
        "Loaded {} fund records from {}",
        dataset.len(),
        source.describe()
    );
    Ok(dataset)
}
