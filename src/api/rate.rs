//! `GET /rate` conversion handler.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::SharedExchange;
use crate::api::error::ApiError;
use crate::core::amount::{format_with_commas, parse_amount};
use crate::core::currency::{CurrencyExchange, ExchangeError};

/// Query string of a conversion request. Missing parameters read as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateQuery {
    pub source: String,
    pub target: String,
    pub amount: String,
}

impl RateQuery {
    /// Picks the parameters out of decoded `key=value` pairs. When a key is
    /// repeated the first value is used.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        };
        RateQuery {
            source: first("source"),
            target: first("target"),
            amount: first("amount"),
        }
    }
}

/// JSON body of both the success and the lookup-failure response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateResponse {
    pub source: String,
    pub target: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RateResponse {
    pub fn success(query: RateQuery, converted: f64) -> Self {
        RateResponse {
            source: query.source,
            target: query.target,
            amount: format_with_commas(converted),
            msg: Some("success".to_string()),
            error: None,
        }
    }

    /// Echoes the amount exactly as it was sent.
    pub fn failure(query: RateQuery, cause: &ExchangeError) -> Self {
        RateResponse {
            source: query.source,
            target: query.target,
            amount: query.amount,
            msg: None,
            error: Some(cause.to_string()),
        }
    }
}

pub async fn convert_amount(
    State(exchange): State<SharedExchange>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<RateResponse>, ApiError> {
    let query = RateQuery::from_pairs(&pairs);
    let Some(amount) = parse_amount(&query.amount) else {
        return Err(ApiError::MalformedAmount(query.amount));
    };

    match exchange.convert(&query.source, &query.target, amount).await {
        Ok(converted) => {
            debug!(source = %query.source, target = %query.target, amount, converted, "Converted amount");
            Ok(Json(RateResponse::success(query, converted)))
        }
        Err(cause) => Err(ApiError::RateNotFound { query, cause }),
    }
}
