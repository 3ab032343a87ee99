//! Static-rate currency converter.
//!
//! This module provides:
//! - A hardcoded exchange-rate table relative to INR
//! - Converter input and currency selection
//! - Committing conversions into the shared history

mod currency;
mod state;

pub use currency::{BASE_CURRENCY, Currency, codes, convert, lookup};
pub use state::{ConversionPreview, Converter};
