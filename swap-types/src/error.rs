//! Error types for the swap pricing service.

use crate::ports::PriceError;

/// Domain-level errors (invariant violations on price data and requests).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("Currency cannot be empty")]
    EmptyCurrency,

    #[error("Price for {currency} is not a finite number: {price}")]
    NonFinitePrice { currency: String, price: f64 },

    #[error("Unparseable date for {currency}: {date:?}")]
    InvalidDate { currency: String, date: String },

    #[error("{0}")]
    ValidationError(String),
}

/// Errors returned by the conversion calculator.
///
/// Price source failures pass through unchanged; `InvalidTokenPrice` is the
/// only kind the calculator raises itself.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Price(#[from] PriceError),

    #[error("Invalid token price!")]
    InvalidTokenPrice { currency: String },
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid token price!")]
    InvalidTokenPrice { currency: String },

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<ConvertError> for AppError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::InvalidTokenPrice { currency } => AppError::InvalidTokenPrice { currency },
            ConvertError::Price(e @ PriceError::SourceUnavailable(_))
            | ConvertError::Price(e @ PriceError::MalformedData(_)) => {
                AppError::Upstream(e.to_string())
            }
            ConvertError::Price(PriceError::Aborted) => {
                AppError::Internal("Price fetch aborted".into())
            }
        }
    }
}
