//! This crate contains the shared currency domain types and the rate provider.

pub mod currency;
pub mod rate_provider;
pub mod rate_table;

pub use currency::Currency;
pub use rate_provider::ExchangeRateApi;
pub use rate_provider::RateFetchError;
pub use rate_provider::RateProvider;
pub use rate_table::RateTable;
