//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Where token prices come from.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceFeed {
    Url(String),
    File(PathBuf),
}

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub feed: PriceFeed,
    pub fetch_timeout: Option<Duration>,
    /// OTLP collector for trace export; tracing stays local when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = var("PORT").unwrap_or_else(|| "3000".to_string()).parse()?;

        let feed = match (var("TOKEN_PRICES_URL"), var("TOKEN_PRICES_FILE")) {
            (Some(url), _) => PriceFeed::Url(url),
            (None, Some(path)) => PriceFeed::File(path.into()),
            (None, None) => anyhow::bail!(
                "TOKEN_PRICES_URL or TOKEN_PRICES_FILE environment variable is required"
            ),
        };

        let fetch_timeout = var("PRICE_FETCH_TIMEOUT_SECS")
            .map(|secs| secs.parse().map(Duration::from_secs))
            .transpose()?;

        let otlp_endpoint = var("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|e| !e.is_empty());

        Ok(Self {
            port,
            feed,
            fetch_timeout,
            otlp_endpoint,
        })
    }
}
