//! Core business logic abstractions

pub mod amount;
pub mod currency;
pub mod rates;

// Re-export main types for cleaner imports
pub use currency::{CurrencyExchange, ExchangeError};
pub use rates::RateTable;
