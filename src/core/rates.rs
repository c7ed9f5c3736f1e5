//! Rate table and rate source abstractions

use crate::core::currency::CurrencyCode;
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Units of the keyed currency per one unit of the base currency.
///
/// A table is populated wholesale by one successful fetch and is never
/// partially updated. Keys are not validated against the selectable
/// currency set; a missing key degrades at lookup time.
pub type RateTable = HashMap<String, f64>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Rate service returned an empty response")]
    Empty,
    #[error("Could not decode rate response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait RateSource: Send + Sync {
    /// Resolve the rate table for `base`. One request, no retries.
    async fn fetch_rates(&self, base: CurrencyCode) -> Result<RateTable, FetchError>;
}
