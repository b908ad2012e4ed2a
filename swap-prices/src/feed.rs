//! Runtime choice between the price source adapters.

use swap_types::{PriceError, PriceSource, PriceTable};

use crate::{HttpPriceSource, StaticPriceSource};

/// Either adapter behind one concrete type, for binaries that pick the
/// feed from configuration.
pub enum FeedSource {
    Http(HttpPriceSource),
    Static(StaticPriceSource),
}

impl From<HttpPriceSource> for FeedSource {
    fn from(source: HttpPriceSource) -> Self {
        FeedSource::Http(source)
    }
}

impl From<StaticPriceSource> for FeedSource {
    fn from(source: StaticPriceSource) -> Self {
        FeedSource::Static(source)
    }
}

#[async_trait::async_trait]
impl PriceSource for FeedSource {
    async fn fetch_prices(&self) -> Result<PriceTable, PriceError> {
        match self {
            FeedSource::Http(source) => source.fetch_prices().await,
            FeedSource::Static(source) => source.fetch_prices().await,
        }
    }
}
