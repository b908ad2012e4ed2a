//! # Swap Types
//!
//! Domain types and port traits for the token swap pricing service.
//! This crate has ZERO external IO dependencies - only data structures,
//! pricing rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (PriceRecord, PriceTable, ConversionRequest)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for the wire and API boundaries
//! - `error/` - Domain, conversion and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{ConversionRequest, ConversionResult, PriceRecord, PriceTable};
pub use dto::*;
pub use error::{AppError, ConvertError, DomainError};
pub use ports::{PriceError, PriceSource};
