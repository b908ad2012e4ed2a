//! # Swap Prices
//!
//! Outbound adapters implementing the `PriceSource` port:
//! - [`HttpPriceSource`] fetches a JSON price feed over HTTP(S)
//! - [`StaticPriceSource`] serves a fixed payload from memory or a file
//! - [`FeedSource`] wraps either one when the choice is made at runtime
//!
//! Both run every payload through the same validation and deduplication,
//! and neither caches: each call re-reads the source.

mod feed;
mod fixture;
mod http;

pub use feed::FeedSource;
pub use fixture::StaticPriceSource;
pub use http::HttpPriceSource;
