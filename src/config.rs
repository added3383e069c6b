// Configuration management for the mock trading bot

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingConfig {
    pub start_balance: f64,
    pub symbols: Vec<String>,   // trading pairs, e.g. "BTC/USDT"
    pub loop_delay_secs: u64,
    pub summary_every: u64,     // send a portfolio summary every N loops
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub gbp_rate: f64,          // USD -> GBP conversion for summaries
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

impl TelegramConfig {
    /// Both credentials must be present for delivery to be attempted
    pub fn is_configured(&self) -> bool {
        self.bot_token.is_some() && self.chat_id.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub state_file: String,
    pub learning_file: String,
    pub trade_log_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_file: "bot_state.json".to_string(),
            learning_file: "bot_learning.json".to_string(),
            trade_log_file: "bot_trades.jsonl".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub trading: TradingConfig,
    pub display: DisplayConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trading: TradingConfig {
                start_balance: 10000.0,
                symbols: vec!["BTC/USDT".to_string(), "ETH/USDT".to_string()],
                loop_delay_secs: 10,
                summary_every: 6,
            },
            display: DisplayConfig { gbp_rate: 0.78 },
            server: ServerConfig { port: 5000 },
            telegram: TelegramConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, content)
            .map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// Load configuration from file, or create default if file doesn't exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            let config = Self::default();
            config.to_file(&path)?;
            tracing::info!("📁 Created default config file: {}", path.as_ref().display());
            Ok(config)
        }
    }

    /// Apply environment-variable overrides on top of the file values.
    /// Keys match the original deployment environment.
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(v) = read_env("START_BALANCE") {
            self.trading.start_balance = parse_env("START_BALANCE", &v)?;
        }
        if let Some(v) = read_env("SYMBOLS") {
            self.trading.symbols = parse_symbols(&v)?;
        }
        if let Some(v) = read_env("LOOP_DELAY") {
            self.trading.loop_delay_secs = parse_env("LOOP_DELAY", &v)?;
        }
        if let Some(v) = read_env("SUMMARY_EVERY") {
            self.trading.summary_every = parse_env("SUMMARY_EVERY", &v)?;
        }
        if let Some(v) = read_env("GBP_RATE") {
            self.display.gbp_rate = parse_env("GBP_RATE", &v)?;
        }
        if let Some(v) = read_env("PORT") {
            self.server.port = parse_env("PORT", &v)?;
        }
        if let Some(v) = read_env("TELEGRAM_TOKEN") {
            self.telegram.bot_token = Some(v);
        }
        if let Some(v) = read_env("TELEGRAM_CHAT_ID") {
            self.telegram.chat_id = Some(v);
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trading.start_balance <= 0.0 {
            return Err(ConfigError::Validation("start_balance must be positive".to_string()));
        }

        if self.trading.symbols.is_empty() {
            return Err(ConfigError::Validation("symbols must not be empty".to_string()));
        }

        for symbol in &self.trading.symbols {
            if !symbol.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "symbol '{}' is not a BASE/QUOTE pair",
                    symbol
                )));
            }
        }

        if self.trading.loop_delay_secs == 0 {
            return Err(ConfigError::Validation("loop_delay_secs must be greater than 0".to_string()));
        }

        if self.trading.summary_every == 0 {
            return Err(ConfigError::Validation("summary_every must be greater than 0".to_string()));
        }

        if self.display.gbp_rate <= 0.0 {
            return Err(ConfigError::Validation("gbp_rate must be positive".to_string()));
        }

        Ok(())
    }
}

fn read_env(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Validation(format!("invalid value for {}: '{}'", key, value)))
}

/// SYMBOLS accepts either a JSON array (the original deployment format)
/// or a plain comma-separated list.
fn parse_symbols(value: &str) -> Result<Vec<String>, ConfigError> {
    if let Ok(list) = serde_json::from_str::<Vec<String>>(value) {
        return Ok(list);
    }
    let list: Vec<String> = value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if list.is_empty() {
        return Err(ConfigError::Validation(format!("invalid value for SYMBOLS: '{}'", value)));
    }
    Ok(list)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(String),

    #[error("Failed to write config file: {0}")]
    FileWrite(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
