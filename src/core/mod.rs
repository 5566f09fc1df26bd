//! Core fund query engine

pub mod advisor;
pub mod compare;
pub mod config;
pub mod dataset;
pub mod dedup;
pub mod error;
pub mod fund;
pub mod holding;
pub mod log;
pub mod overlap;
pub mod query;
pub mod ranking;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for cleaner imports
pub use dataset::Dataset;
pub use error::{DatasetError, InsufficientFunds};
pub use fund::{AssetClass, DividendFrequency, FundRecord, Holding, Period};
pub use query::{SearchCriteria, search};
pub use ranking::{Metric, ReturnRange, top_performers};
