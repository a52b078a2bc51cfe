//! Currency conversion abstractions

use async_trait::async_trait;
use thiserror::Error;

use crate::core::amount::round_to;

/// Number of fractional digits kept in a converted amount.
pub const AMOUNT_PRECISION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeError {
    #[error("rate for source currency {0} not found")]
    UnknownSourceCurrency(String),
    #[error("rate for target currency {0} not found")]
    UnknownTargetCurrency(String),
}

/// Rate lookup and conversion between two currency codes.
///
/// Implementations only need to provide `get_rate`; `convert` multiplies by
/// that rate and rounds the product half away from zero to
/// [`AMOUNT_PRECISION`] decimals.
#[async_trait]
pub trait CurrencyExchange: Send + Sync {
    async fn get_rate(&self, source: &str, target: &str) -> Result<f64, ExchangeError>;

    async fn convert(&self, source: &str, target: &str, amount: f64) -> Result<f64, ExchangeError> {
        let rate = self.get_rate(source, target).await?;
        Ok(round_to(amount * rate, AMOUNT_PRECISION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRate(f64);

    #[async_trait]
    impl CurrencyExchange for FixedRate {
        async fn get_rate(&self, source: &str, target: &str) -> Result<f64, ExchangeError> {
            match (source, target) {
                ("AAA", "BBB") => Ok(self.0),
                ("AAA", _) => Err(ExchangeError::UnknownTargetCurrency(target.to_string())),
                _ => Err(ExchangeError::UnknownSourceCurrency(source.to_string())),
            }
        }
    }

    #[test]
    fn test_error_messages_name_the_missing_code() {
        assert_eq!(
            ExchangeError::UnknownSourceCurrency("XXX".to_string()).to_string(),
            "rate for source currency XXX not found"
        );
        assert_eq!(
            ExchangeError::UnknownTargetCurrency("YYY".to_string()).to_string(),
            "rate for target currency YYY not found"
        );
    }

    #[tokio::test]
    async fn test_default_convert_rounds_product() {
        let exchange = FixedRate(0.125);
        assert_eq!(exchange.convert("AAA", "BBB", 1.0).await, Ok(0.13));
        assert_eq!(exchange.convert("AAA", "BBB", -1.0).await, Ok(-0.13));
        assert_eq!(exchange.convert("AAA", "BBB", 0.0).await, Ok(0.0));
    }

    #[tokio::test]
    async fn test_default_convert_propagates_lookup_error() {
        let exchange = FixedRate(2.0);
        assert_eq!(
            exchange.convert("ZZZ", "BBB", 10.0).await,
            Err(ExchangeError::UnknownSourceCurrency("ZZZ".to_string()))
        );
        assert_eq!(
            exchange.convert("AAA", "CCC", 10.0).await,
            Err(ExchangeError::UnknownTargetCurrency("CCC".to_string()))
        );
    }
}
