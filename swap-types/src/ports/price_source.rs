//! Price source port.
//!
//! This trait defines the interface for token price repositories.
//! Implementations can be HTTP clients, static fixtures, mock providers, etc.

use crate::domain::PriceTable;

/// Error type for price retrieval.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceError {
    /// Retrieval did not complete (transport failure, timeout, non-success status).
    #[error("Price source unavailable: {0}")]
    SourceUnavailable(String),

    /// The payload did not match the expected record shape.
    #[error("Malformed price data: {0}")]
    MalformedData(String),

    /// The caller abandoned the fetch before it completed.
    #[error("Price fetch aborted")]
    Aborted,
}

/// Port trait for price repositories.
#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch, validate and deduplicate the current prices.
    ///
    /// Every call goes back to the source; implementations must not cache.
    /// A single malformed record fails the whole call.
    async fn fetch_prices(&self) -> Result<PriceTable, PriceError>;
}
