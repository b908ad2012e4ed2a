//! Domain models for price lookup and conversion.

pub mod conversion;
pub mod price;
pub mod table;

pub use conversion::{ConversionRequest, ConversionResult};
pub use price::PriceRecord;
pub use table::PriceTable;
