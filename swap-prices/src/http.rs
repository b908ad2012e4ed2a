//! HTTP price feed adapter.

use std::time::Duration;

use reqwest::Client;
use swap_types::{PriceError, PriceSource, PriceTable, parse_price_payload};

/// Price source backed by an HTTP endpoint returning a JSON array of
/// `{currency, date, price}` objects.
pub struct HttpPriceSource {
    url: String,
    http: Client,
}

impl HttpPriceSource {
    /// Creates a new source with no request timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
        }
    }

    /// Sets a timeout covering the whole request, body included.
    pub fn with_timeout(self, timeout: Duration) -> Result<Self, PriceError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PriceError::SourceUnavailable(e.to_string()))?;
        Ok(Self { http, ..self })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl PriceSource for HttpPriceSource {
    async fn fetch_prices(&self) -> Result<PriceTable, PriceError> {
        tracing::debug!(url = %self.url, "Fetching token prices");

        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| PriceError::SourceUnavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, %status, "Price feed returned an error status");
            return Err(PriceError::SourceUnavailable(format!(
                "Failed to fetch prices: HTTP {}",
                status.as_u16()
            )));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| PriceError::SourceUnavailable(e.to_string()))?;

        let table = parse_price_payload(&body).inspect_err(|e| {
            tracing::warn!(url = %self.url, error = %e, "Rejected price feed payload");
        })?;

        tracing::debug!(currencies = table.len(), "Token prices loaded");
        Ok(table)
    }
}
