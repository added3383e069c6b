// Core trading logic modules

pub mod executor;
pub mod learner;
pub mod portfolio;
pub mod types;

// Re-export commonly used types
pub use executor::{execute_trade, round_money};
pub use learner::{threshold_fraction, LearningMemory, SymbolMemory};
pub use portfolio::PortfolioState;
pub use types::{base_asset, Signal, TradeRecord, TradeSide};
