use axum::{routing::get, Router};

use crate::state::AppState;

pub mod handlers;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/crypto/prices", get(handlers::crypto_prices))
        .route("/api/crypto/market-stats", get(handlers::market_stats))
        .route("/api/crypto/trading-pairs", get(handlers::trading_pairs))
}
