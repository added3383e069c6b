// Core trading types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Trading signal emitted by the decider each cycle. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Buy => write!(f, "BUY"),
            Signal::Sell => write!(f, "SELL"),
            Signal::Hold => write!(f, "HOLD"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// Record of one executed simulated trade, appended to the trade log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: Uuid,
    pub pair: String,
    pub side: TradeSide,
    pub price: f64,
    pub quantity: f64,
    pub notional: f64, // cash spent on a buy, proceeds on a sell
    pub timestamp: DateTime<Utc>,
}

impl TradeRecord {
    /// Human-readable trade notice for the notification sink
    pub fn notice(&self) -> String {
        let base = base_asset(&self.pair);
        match self.side {
            TradeSide::Buy => format!(
                "🟢 BUY {} {:.6} @ {:.2} (spent ${:.2})",
                base, self.quantity, self.price, self.notional
            ),
            TradeSide::Sell => format!(
                "🔴 SELL {} {:.6} @ {:.2} (received ${:.2})",
                base, self.quantity, self.price, self.notional
            ),
        }
    }
}

/// Base asset of a BASE/QUOTE trading pair ("BTC/USDT" -> "BTC")
pub fn base_asset(pair: &str) -> &str {
    pair.split('/').next().unwrap_or(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_asset() {
        assert_eq!(base_asset("BTC/USDT"), "BTC");
        assert_eq!(base_asset("ETH/USDT"), "ETH");
        assert_eq!(base_asset("SOLO"), "SOLO");
    }

    #[test]
    fn test_signal_display() {
        assert_eq!(Signal::Buy.to_string(), "BUY");
        assert_eq!(Signal::Sell.to_string(), "SELL");
        assert_eq!(Signal::Hold.to_string(), "HOLD");
    }

    #[test]
    fn test_trade_notice_format() {
        let record = TradeRecord {
            id: Uuid::new_v4(),
            pair: "BTC/USDT".to_string(),
            side: TradeSide::Buy,
            price: 100.0,
            quantity: 10.0,
            notional: 1000.0,
            timestamp: Utc::now(),
        };
        let notice = record.notice();
        assert!(notice.contains("BUY BTC"));
        assert!(notice.contains("$1000.00"));
    }
}
