//! Typed errors raised by the query engine.

use thiserror::Error;

/// Errors found while building a [`Dataset`](crate::core::dataset::Dataset).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DatasetError {
    #[error("Duplicate fund identifier: {id}")]
    DuplicateId { id: String },

    #[error("Risk level {level} of fund '{id}' is outside {min}..={max}")]
    RiskLevelOutOfRange { id: String, level: u8, min: u8, max: u8 },

    #[error("Invalid weight for holding '{stock}' of fund '{id}': {weight}")]
    InvalidWeight { id: String, stock: String, weight: f64 },
}

/// Fewer than two usable funds were supplied to a multi-fund operation.
///
/// `not_found` lists the identifiers that did not resolve, `collapsed` the
/// ones dropped as share classes of a fund already in the request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("At least {required} valid funds are required, found {resolved}")]
pub struct InsufficientFunds {
    pub required: usize,
    pub resolved: usize,
    pub not_found: Vec<String>,
    pub collapsed: Vec<String>,
}
