//! # Swap Hex
//!
//! Application service layer and HTTP adapter for the token swap service.
//!
//! ## Architecture
//!
//! - `service/` - Conversion service (fetch prices, then quote)
//! - `abort/` - Cooperative cancellation for in-flight price fetches
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `S: PriceSource`, allowing
//! different price feeds to be injected.

pub mod abort;
pub mod inbound;
pub mod service;


pub use abort::{AbortSignal, AbortTrigger};
pub use service::ConversionService;
