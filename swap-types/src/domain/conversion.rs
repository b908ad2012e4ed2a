//! Conversion request and result values.

use serde::{Deserialize, Serialize};

/// A request to convert `input_amount` of one currency into another.
///
/// Carries no validation of its own: zero amounts and identical currencies
/// are legal here. Form-level rules live in [`crate::dto::ConvertRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub input_amount: f64,
    pub source_currency: String,
    pub destination_currency: String,
}

impl ConversionRequest {
    pub fn new(
        input_amount: f64,
        source_currency: impl Into<String>,
        destination_currency: impl Into<String>,
    ) -> Self {
        Self {
            input_amount,
            source_currency: source_currency.into(),
            destination_currency: destination_currency.into(),
        }
    }
}

/// Outcome of a conversion. Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Destination price divided by source price.
    pub exchange_rate: f64,
    /// `exchange_rate * input_amount`.
    pub output_amount: f64,
}
