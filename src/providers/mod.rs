pub mod exchange_rate_api;
pub mod static_rates;

pub use exchange_rate_api::ExchangeRateApiSource;
pub use static_rates::StaticCrossRateSource;
