//! Mapping of request failures onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::debug;

use crate::api::rate::{RateQuery, RateResponse};
use crate::core::currency::ExchangeError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// `amount` is not a number once commas are removed. Answered with a
    /// plain-text 400.
    #[error("Invalid amount format")]
    MalformedAmount(String),

    /// No rate for the requested pair. Answered with a JSON 404 echoing the
    /// request.
    #[error("{cause}")]
    RateNotFound {
        query: RateQuery,
        #[source]
        cause: ExchangeError,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::MalformedAmount(raw) => {
                debug!(amount = %raw, "Rejected malformed amount");
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            ApiError::RateNotFound { query, cause } => {
                debug!(error = %message, "Conversion failed");
                let body = RateResponse::failure(query, &cause);
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
        }
    }
}
