//! Core conversion and rate-resolution logic

pub mod config;
pub mod convert;
pub mod currency;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use convert::{FALLBACK_RESULT, convert};
pub use currency::CurrencyCode;
pub use rates::{FetchError, RateSource, RateTable};
