//! HTTP surface of the service.

pub mod error;
pub mod rate;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::core::currency::CurrencyExchange;

/// Conversion service shared read-only by every request.
pub type SharedExchange = Arc<dyn CurrencyExchange>;

pub fn app_router(exchange: SharedExchange) -> Router {
    Router::new()
        .route("/rate", get(rate::convert_amount))
        .layer(TraceLayer::new_for_http())
        .with_state(exchange)
}
