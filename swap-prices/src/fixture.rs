//! Static price source for local development and tests.

use std::path::PathBuf;

use swap_types::{PriceError, PriceSource, PriceTable, TokenPrice, parse_price_payload};

enum Payload {
    Inline(Vec<u8>),
    File(PathBuf),
}

/// Serves a fixed price feed payload.
///
/// The payload is kept raw and validated on every fetch, so a bad fixture
/// fails the same way a bad HTTP feed would. File-backed sources re-read
/// the file each time.
pub struct StaticPriceSource {
    payload: Payload,
}

impl StaticPriceSource {
    pub fn from_json(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: Payload::Inline(bytes.into()),
        }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            payload: Payload::File(path.into()),
        }
    }

    pub fn from_records(prices: &[TokenPrice]) -> Result<Self, PriceError> {
        let bytes =
            serde_json::to_vec(prices).map_err(|e| PriceError::MalformedData(e.to_string()))?;
        Ok(Self::from_json(bytes))
    }
}

#[async_trait::async_trait]
impl PriceSource for StaticPriceSource {
    async fn fetch_prices(&self) -> Result<PriceTable, PriceError> {
        match &self.payload {
            Payload::Inline(bytes) => parse_price_payload(bytes),
            Payload::File(path) => {
                tracing::debug!(path = %path.display(), "Reading token prices");
                let bytes = tokio::fs::read(path).await.map_err(|e| {
                    PriceError::SourceUnavailable(format!("{}: {}", path.display(), e))
                })?;
                parse_price_payload(&bytes).inspect_err(|e| {
                    tracing::warn!(path = %path.display(), error = %e, "Rejected price file");
                })
            }
        }
    }
}
