//! Exchange rate table keyed by source and then target currency code.
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::core::currency::ExchangeError;

/// Immutable two-level mapping `source -> target -> rate`.
///
/// Every code present as a source is expected to map to itself with a rate
/// of 1. This is a property of the supplied data and is only checked with a
/// warning in [`RateTable::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<String, BTreeMap<String, f64>>,
}

impl RateTable {
    pub fn new(rates: BTreeMap<String, BTreeMap<String, f64>>) -> Self {
        Self { rates }
    }

    /// The rates the service ships with: TWD, JPY and USD.
    pub fn builtin() -> Self {
        let table = [
            ("TWD", [("TWD", 1.0), ("JPY", 3.669), ("USD", 0.03281)]),
            ("JPY", [("TWD", 0.26956), ("JPY", 1.0), ("USD", 0.00885)]),
            ("USD", [("TWD", 30.444), ("JPY", 111.801), ("USD", 1.0)]),
        ];

        let rates = table
            .into_iter()
            .map(|(source, targets)| {
                let targets: BTreeMap<String, f64> = targets
                    .into_iter()
                    .map(|(target, rate)| (target.to_string(), rate))
                    .collect();
                (source.to_string(), targets)
            })
            .collect();
        Self { rates }
    }

    pub fn rate(&self, source: &str, target: &str) -> Result<f64, ExchangeError> {
        let targets = self
            .rates
            .get(source)
            .ok_or_else(|| ExchangeError::UnknownSourceCurrency(source.to_string()))?;
        targets
            .get(target)
            .copied()
            .ok_or_else(|| ExchangeError::UnknownTargetCurrency(target.to_string()))
    }

    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Checks a table read from outside the binary.
    ///
    /// Rates must be finite and positive. A source without its identity entry
    /// is accepted with a warning.
    pub fn validate(&self) -> Result<()> {
        for (source, targets) in &self.rates {
            for (target, rate) in targets {
                if !rate.is_finite() || *rate <= 0.0 {
                    bail!("Invalid rate {rate} for {source} -> {target}: must be a positive number");
                }
            }
            if targets.get(source).is_none_or(|rate| *rate != 1.0) {
                warn!(currency = %source, "Rate table has no identity rate of 1 for currency");
            }
        }
        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}
