//! Conversion Application Service
//!
//! Fetches a fresh price table through the price source port and quotes
//! conversions against it. Contains NO infrastructure logic.

use swap_types::{
    ConversionRequest, ConversionResult, ConvertError, PriceError, PriceSource, PriceTable,
};

use crate::abort::AbortSignal;

/// Application service for token conversions.
///
/// Generic over `S: PriceSource` - the adapter is injected at compile time.
/// Holds no mutable state: every call builds its own price table, so one
/// service can be shared across concurrent requests without locking.
pub struct ConversionService<S: PriceSource> {
    source: S,
}

impl<S: PriceSource> ConversionService<S> {
    /// Creates a new conversion service over the given price source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a reference to the underlying price source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches the current deduplicated price table.
    pub async fn prices(&self) -> Result<PriceTable, ConvertError> {
        Ok(self.source.fetch_prices().await?)
    }

    /// Same as [`prices`](Self::prices), abandoning the fetch if `abort` fires first.
    pub async fn prices_until(&self, abort: AbortSignal) -> Result<PriceTable, ConvertError> {
        Ok(self.fetch_until(abort).await?)
    }

    /// Converts `request.input_amount` from the source to the destination currency.
    ///
    /// Source failures propagate unchanged. A missing or unusable price for
    /// either currency fails with `InvalidTokenPrice`.
    #[tracing::instrument(skip(self), fields(from = %request.source_currency, to = %request.destination_currency))]
    pub async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ConvertError> {
        let table = self.source.fetch_prices().await?;
        table.quote(request)
    }

    /// Same as [`convert`](Self::convert), abandoning the fetch if `abort` fires first.
    ///
    /// The in-flight fetch future is dropped on abort, which cancels the
    /// underlying request.
    #[tracing::instrument(skip(self, abort), fields(from = %request.source_currency, to = %request.destination_currency))]
    pub async fn convert_until(
        &self,
        request: &ConversionRequest,
        abort: AbortSignal,
    ) -> Result<ConversionResult, ConvertError> {
        let table = self.fetch_until(abort).await?;
        table.quote(request)
    }

    async fn fetch_until(&self, abort: AbortSignal) -> Result<PriceTable, PriceError> {
        if abort.is_aborted() {
            return Err(PriceError::Aborted);
        }

        tokio::select! {
            biased;
            _ = abort.aborted() => Err(PriceError::Aborted),
            result = self.source.fetch_prices() => result,
        }
    }
}
