//! Portfolio summaries and Telegram delivery
//!
//! Delivery is best effort: an unconfigured notifier skips sends with a log
//! line, and network or non-success responses are logged and swallowed. The
//! trading loop never blocks on, retries, or fails because of a notification.

use chrono::Utc;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::TelegramConfig;
use crate::core::{LearningMemory, PortfolioState, TradeRecord};
use crate::prices::PriceSource;

const SEND_TIMEOUT: Duration = Duration::from_secs(8);

fn now_iso() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Outbound chat notifications via the Telegram bot API
#[derive(Debug, Clone)]
pub struct Notifier {
    client: reqwest::Client,
    config: TelegramConfig,
}

impl Notifier {
    pub fn new(config: TelegramConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client, config }
    }

    /// Deliver one message. Never returns an error; failures are logged.
    pub async fn send(&self, text: &str) {
        let (Some(token), Some(chat_id)) = (&self.config.bot_token, &self.config.chat_id) else {
            info!("Telegram not configured (missing bot_token or chat_id), skipping send");
            return;
        };

        let url = format!("https://api.telegram.org/bot{}/sendMessage", token);
        let payload = json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });

        match self.client.post(&url).json(&payload).send().await {
            Ok(resp) if !resp.status().is_success() => {
                warn!("Telegram send failed: {}", resp.status());
            }
            Ok(_) => {}
            Err(e) => warn!("Telegram send error: {}", e),
        }
    }

    pub async fn send_startup(&self) {
        self.send("🤖 *Mock Trading Bot* started — learning active").await;
    }

    pub async fn send_trade(&self, record: &TradeRecord) {
        self.send(&format!("*Trade* — {}", record.notice())).await;
    }
}

/// Render the periodic portfolio summary: balance, open positions, total
/// value in GBP, pnl and per-symbol learning status
pub fn format_summary(
    state: &PortfolioState,
    learning: &LearningMemory,
    prices: &dyn PriceSource,
    gbp_rate: f64,
) -> String {
    let total_usd = state.total_value(prices);
    let total_gbp = (total_usd * gbp_rate * 100.0).round() / 100.0;

    let open = state.open_positions();
    let positions_text = if open.is_empty() {
        "None (all in cash)".to_string()
    } else {
        open.iter()
            .map(|(base, qty)| format!("• {}: {:.6}", base, qty))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut symbols: Vec<&String> = learning.memory.keys().collect();
    symbols.sort();
    let learn_text = if symbols.is_empty() {
        "No learning data yet.".to_string()
    } else {
        symbols
            .iter()
            .map(|sym| {
                let mem = &learning.memory[*sym];
                format!(
                    "📘 {}: avg={:.2}, stability={:.2}",
                    sym,
                    mem.avg.unwrap_or(0.0),
                    mem.stability
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "📊 *Portfolio Summary*\n\n\
        💰 Balance: ${:.2}\n\
        💎 Positions:\n{}\n\n\
        💷 Total (GBP): £{:.2}\n\n\
        📈 PnL: ${:.2}\n\n\
        🧠 *Learning Status*\n{}\n\n\
        🕒 {}",
        state.balance,
        positions_text,
        total_gbp,
        state.pnl,
        learn_text,
        now_iso()
    )
}
