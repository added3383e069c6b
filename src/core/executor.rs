// Simulated trade execution against the in-memory portfolio

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::core::portfolio::PortfolioState;
use crate::core::types::{base_asset, Signal, TradeRecord, TradeSide};

/// Fraction of the cash balance committed to each buy
const BUY_FRACTION: f64 = 0.10;

/// Minimum cash balance required to attempt a buy
const MIN_BUY_BALANCE: f64 = 1.0;

/// Round a monetary amount to 4 decimal places to bound floating drift
pub fn round_money(amount: f64) -> f64 {
    (amount * 10_000.0).round() / 10_000.0
}

/// Apply a Buy/Sell signal to the portfolio. Precondition violations
/// (insufficient balance, nothing to sell) are warnings: the trade is skipped
/// and the state left untouched. Hold never reaches the executor.
pub fn execute_trade(
    state: &mut PortfolioState,
    pair: &str,
    signal: Signal,
    price: f64,
) -> Option<TradeRecord> {
    let base = base_asset(pair);
    match signal {
        Signal::Buy => {
            let notional = state.balance * BUY_FRACTION;
            if notional <= 0.0 || state.balance < MIN_BUY_BALANCE {
                warn!("⚠️ Not enough balance to buy {} (balance={:.4})", base, state.balance);
                return None;
            }
            let quantity = notional / price;
            *state.positions.entry(base.to_string()).or_insert(0.0) += quantity;
            state.balance = round_money(state.balance - notional);
            Some(TradeRecord {
                id: Uuid::new_v4(),
                pair: pair.to_string(),
                side: TradeSide::Buy,
                price,
                quantity,
                notional,
                timestamp: Utc::now(),
            })
        }
        Signal::Sell => {
            let held = state.held(base);
            if held <= 0.0 {
                warn!("⚠️ Nothing to sell for {}", base);
                return None;
            }
            let proceeds = held * price;
            state.balance = round_money(state.balance + proceeds);
            state.positions.insert(base.to_string(), 0.0);
            Some(TradeRecord {
                id: Uuid::new_v4(),
                pair: pair.to_string(),
                side: TradeSide::Sell,
                price,
                quantity: held,
                notional: proceeds,
                timestamp: Utc::now(),
            })
        }
        Signal::Hold => None,
    }
}
