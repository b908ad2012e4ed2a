//! Deduplicated, currency-keyed view of price records.

use std::collections::HashMap;

use crate::domain::{ConversionRequest, ConversionResult, PriceRecord};
use crate::error::ConvertError;

/// At most one record per currency: the latest observed one.
///
/// Built fresh for every request and never shared between calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    records: HashMap<String, PriceRecord>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from records in the order given, keeping the latest
    /// record per currency. Input does not need to be sorted.
    pub fn from_records(records: impl IntoIterator<Item = PriceRecord>) -> Self {
        let mut table = Self::new();
        for record in records {
            table.insert(record);
        }
        table
    }

    /// Inserts a record unless the table already holds one for the same
    /// currency that is at least as recent. Ties keep the first-seen record.
    ///
    /// Returns true if the record was stored.
    pub fn insert(&mut self, record: PriceRecord) -> bool {
        match self.records.get(record.currency()) {
            Some(existing) if record.observed_at() <= existing.observed_at() => false,
            _ => {
                self.records.insert(record.currency().to_string(), record);
                true
            }
        }
    }

    pub fn get(&self, currency: &str) -> Option<&PriceRecord> {
        self.records.get(currency)
    }

    pub fn price_of(&self, currency: &str) -> Option<f64> {
        self.get(currency).map(PriceRecord::price)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records sorted by currency.
    pub fn records(&self) -> Vec<&PriceRecord> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by(|a, b| a.currency().cmp(b.currency()));
        records
    }

    /// Computes the exchange rate and output amount for a request.
    ///
    /// Fails with `InvalidTokenPrice` when either currency is missing or has
    /// a non-positive price, so the rate is always finite and positive.
    pub fn quote(&self, request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
        let source_price = self.usable_price(&request.source_currency)?;
        let destination_price = self.usable_price(&request.destination_currency)?;

        let exchange_rate = destination_price / source_price;
        Ok(ConversionResult {
            exchange_rate,
            output_amount: exchange_rate * request.input_amount,
        })
    }

    fn usable_price(&self, currency: &str) -> Result<f64, ConvertError> {
        self.price_of(currency)
            .filter(|price| *price > 0.0)
            .ok_or_else(|| ConvertError::InvalidTokenPrice {
                currency: currency.to_string(),
            })
    }
}
