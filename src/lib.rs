// Mock Trading Bot Library
//
// A mock-mode cryptocurrency trading bot: synthetic prices, an adaptive
// per-symbol running average driving BUY/SELL/HOLD signals, simulated
// execution against a JSON-snapshotted portfolio, Telegram summaries and a
// read-only HTTP status endpoint. No real trades are ever placed.

pub mod config;
pub mod core;
pub mod error;
pub mod prices;
pub mod reporter;
pub mod runner;
pub mod server;
pub mod snapshot;

// Re-export core trading types
pub use crate::core::{
    base_asset, execute_trade, round_money, threshold_fraction, LearningMemory, PortfolioState,
    Signal, SymbolMemory, TradeRecord, TradeSide,
};

// Re-export error types
pub use error::{BotError, BotResult};

// Re-export configuration
pub use config::{
    Config, ConfigError, DisplayConfig, ServerConfig, StorageConfig, TelegramConfig, TradingConfig,
};

// Re-export price feeds
pub use prices::{FixedPriceFeed, MockPriceFeed, PriceSource};

// Re-export reporting
pub use reporter::{format_summary, Notifier};
