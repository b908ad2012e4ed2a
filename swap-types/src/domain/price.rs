//! A single price observation for one currency.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::DomainError;

/// One (currency, timestamp, price) observation from a price source.
///
/// Fields are private so a record can only exist in a valid state:
/// non-empty currency and a finite price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    currency: String,
    observed_at: DateTime<Utc>,
    price: f64,
}

impl PriceRecord {
    /// Creates a new price record.
    pub fn new(
        currency: impl Into<String>,
        observed_at: DateTime<Utc>,
        price: f64,
    ) -> Result<Self, DomainError> {
        let currency = currency.into();
        if currency.is_empty() {
            return Err(DomainError::EmptyCurrency);
        }
        if !price.is_finite() {
            return Err(DomainError::NonFinitePrice { currency, price });
        }
        Ok(Self {
            currency,
            observed_at,
            price,
        })
    }

    /// Creates a record from the raw date string emitted by price feeds.
    pub fn parse(
        currency: impl Into<String>,
        date: &str,
        price: f64,
    ) -> Result<Self, DomainError> {
        let currency = currency.into();
        let observed_at = parse_observed_at(date).ok_or_else(|| DomainError::InvalidDate {
            currency: currency.clone(),
            date: date.to_string(),
        })?;
        Self::new(currency, observed_at, price)
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// ISO 8601 shapes with an explicit offset, beyond strict RFC 3339.
/// `%#z` also takes `Z` and offsets with or without a colon.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// ISO 8601 shapes without an offset.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses the date formats seen in price feeds.
///
/// Accepts RFC 3339 timestamps, ISO 8601 date-times with minute or second
/// precision (with or without an offset) and plain dates. Anything without
/// an offset is read as UTC.
pub fn parse_observed_at(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_creation() {
        let record = PriceRecord::parse("ETH", "2024-01-01", 2000.0).unwrap();
        assert_eq!(record.currency(), "ETH");
        assert_eq!(record.price(), 2000.0);
        assert_eq!(
            record.observed_at(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_empty_currency_fails() {
        let result = PriceRecord::parse("", "2024-01-01", 1.0);
        assert_eq!(result, Err(DomainError::EmptyCurrency));
    }

    #[test]
    fn test_non_finite_price_fails() {
        let result = PriceRecord::new("USD", Utc::now(), f64::NAN);
        assert!(matches!(result, Err(DomainError::NonFinitePrice { .. })));

        let result = PriceRecord::new("USD", Utc::now(), f64::INFINITY);
        assert!(matches!(result, Err(DomainError::NonFinitePrice { .. })));
    }

    #[test]
    fn test_unparseable_date_fails() {
        let result = PriceRecord::parse("USD", "yesterday", 1.0);
        assert!(matches!(result, Err(DomainError::InvalidDate { .. })));
    }

    #[test]
    fn test_currency_is_case_sensitive() {
        let upper = PriceRecord::parse("USD", "2024-01-01", 1.0).unwrap();
        let lower = PriceRecord::parse("usd", "2024-01-01", 1.0).unwrap();
        assert_ne!(upper.currency(), lower.currency());
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = Utc.with_ymd_and_hms(2023, 8, 29, 7, 10, 40).unwrap();
        assert_eq!(parse_observed_at("2023-08-29T07:10:40.000Z"), Some(expected));
        assert_eq!(parse_observed_at("2023-08-29T09:10:40+02:00"), Some(expected));
        assert_eq!(parse_observed_at("2023-08-29T07:10:40"), Some(expected));
        assert_eq!(
            parse_observed_at("2023-08-29"),
            Some(Utc.with_ymd_and_hms(2023, 8, 29, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_observed_at("29/08/2023"), None);
        assert_eq!(parse_observed_at(""), None);
    }

    #[test]
    fn test_parse_minute_precision_and_compact_offsets() {
        let ten = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let eight = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        assert_eq!(parse_observed_at("2024-01-01T10:00Z"), Some(ten));
        assert_eq!(parse_observed_at("2024-01-01T10:00"), Some(ten));
        assert_eq!(parse_observed_at("2024-01-01T10:00+0200"), Some(eight));
        assert_eq!(parse_observed_at("2024-01-01T10:00:00+0200"), Some(eight));
        assert_eq!(parse_observed_at("2024-01-01T10:00:00.000+0200"), Some(eight));
        assert_eq!(parse_observed_at("2024-01-01T10:00:00.000+02"), Some(eight));
        assert_eq!(parse_observed_at("2024-01-01T10"), None);
    }
}
