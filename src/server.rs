// Read-only HTTP status endpoint
//
// Serves the current portfolio valuation on demand. State is re-read from the
// snapshot file on every request rather than shared in memory, so a response
// may trail the loop by one iteration; the atomic snapshot writes keep it from
// ever being torn.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::error::{BotError, BotResult};
use crate::prices::MockPriceFeed;
use crate::snapshot;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub balance: f64,
    pub positions: HashMap<String, f64>,
    pub total_value_gbp: f64,
}

async fn status(State(config): State<Arc<Config>>) -> Json<StatusResponse> {
    let state = snapshot::load_state(&config.storage.state_file, config.trading.start_balance);
    let total_usd = state.total_value(&MockPriceFeed);
    let total_value_gbp = (total_usd * config.display.gbp_rate * 100.0).round() / 100.0;

    Json(StatusResponse {
        balance: state.balance,
        positions: state.positions,
        total_value_gbp,
    })
}

pub fn router(config: Arc<Config>) -> Router {
    Router::new().route("/", get(status)).with_state(config)
}

/// Bind and serve the status route until process termination
pub async fn serve(config: Arc<Config>) -> BotResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| BotError::Server(format!("bind {}: {}", addr, e)))?;

    info!("🌐 Status endpoint listening on {}", addr);

    axum::serve(listener, router(config))
        .await
        .map_err(|e| BotError::Server(e.to_string()))
}
