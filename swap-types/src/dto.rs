//! Data Transfer Objects (DTOs) for the price feed and the HTTP API.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::domain::{ConversionRequest, ConversionResult, PriceRecord, PriceTable};
use crate::error::DomainError;
use crate::ports::PriceError;

// ─────────────────────────────────────────────────────────────────────────────
// Price feed DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// One element of a price feed payload, exactly as the upstream emits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPrice {
    pub currency: String,
    pub date: String,
    pub price: f64,
}

impl TryFrom<TokenPrice> for PriceRecord {
    type Error = DomainError;

    fn try_from(value: TokenPrice) -> Result<Self, Self::Error> {
        PriceRecord::parse(value.currency, &value.date, value.price)
    }
}

impl From<&PriceRecord> for TokenPrice {
    fn from(record: &PriceRecord) -> Self {
        Self {
            currency: record.currency().to_string(),
            date: record
                .observed_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            price: record.price(),
        }
    }
}

/// Validates a raw price feed payload and collapses it into a [`PriceTable`].
///
/// The payload must be a JSON array of [`TokenPrice`] objects. Any element
/// with a missing or wrong-typed field, an unparseable date, an empty
/// currency or a non-finite price fails the whole payload.
pub fn parse_price_payload(bytes: &[u8]) -> Result<PriceTable, PriceError> {
    let prices: Vec<TokenPrice> =
        serde_json::from_slice(bytes).map_err(|e| PriceError::MalformedData(e.to_string()))?;

    let records = prices
        .into_iter()
        .enumerate()
        .map(|(index, price)| {
            PriceRecord::try_from(price)
                .map_err(|e| PriceError::MalformedData(format!("element {}: {}", index, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PriceTable::from_records(records))
}

/// Lists a table in feed format, sorted by currency.
pub fn token_prices(table: &PriceTable) -> Vec<TokenPrice> {
    table.records().into_iter().map(TokenPrice::from).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum amount a user may convert.
pub const MIN_INPUT_AMOUNT: f64 = 1.0;

/// Request to convert an amount between two currencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub input_amount: f64,
    pub input_currency: String,
    pub output_currency: String,
}

impl ConvertRequest {
    /// Applies the user-facing form rules and produces a calculator request.
    pub fn validate(self) -> Result<ConversionRequest, DomainError> {
        if !self.input_amount.is_finite() || self.input_amount < MIN_INPUT_AMOUNT {
            return Err(DomainError::ValidationError(
                "Amount must be at least 1".into(),
            ));
        }
        if self.input_currency.is_empty() {
            return Err(DomainError::ValidationError(
                "Currency to send is required".into(),
            ));
        }
        if self.output_currency.is_empty() {
            return Err(DomainError::ValidationError(
                "Currency to receive is required".into(),
            ));
        }
        if self.input_currency == self.output_currency {
            return Err(DomainError::ValidationError(
                "Input and output currencies cannot be the same".into(),
            ));
        }

        Ok(ConversionRequest::new(
            self.input_amount,
            self.input_currency,
            self.output_currency,
        ))
    }
}

/// Response after a successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub input_currency: String,
    pub output_currency: String,
    pub input_amount: f64,
    pub output_amount: f64,
    pub exchange_rate: f64,
}

impl ConvertResponse {
    pub fn new(request: ConversionRequest, result: ConversionResult) -> Self {
        Self {
            input_currency: request.source_currency,
            output_currency: request.destination_currency,
            input_amount: request.input_amount,
            output_amount: result.output_amount,
            exchange_rate: result.exchange_rate,
        }
    }
}
