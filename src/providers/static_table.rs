use async_trait::async_trait;
use tracing::debug;

use crate::core::currency::{CurrencyExchange, ExchangeError};
use crate::core::rates::RateTable;

/// `CurrencyExchange` backed by a rate table fixed at construction.
pub struct StaticRateProvider {
    rates: RateTable,
}

impl StaticRateProvider {
    pub fn new(rates: RateTable) -> Self {
        StaticRateProvider { rates }
    }
}

impl Default for StaticRateProvider {
    fn default() -> Self {
        Self::new(RateTable::builtin())
    }
}

#[async_trait]
impl CurrencyExchange for StaticRateProvider {
    async fn get_rate(&self, source: &str, target: &str) -> Result<f64, ExchangeError> {
        let result = self.rates.rate(source, target);
        match &result {
            Ok(rate) => debug!(%source, %target, rate, "Rate found"),
            Err(e) => debug!(%source, %target, error = %e, "Rate lookup failed"),
        }
        result
    }
}
