// Common test utilities and helpers

use mock_trading_bot::Config;

/// Create a test configuration with a single symbol and quiet defaults
#[allow(dead_code)]
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.trading.symbols = vec!["BTC/USDT".to_string()];
    config.trading.start_balance = 10000.0;
    config.trading.loop_delay_secs = 1;
    config.trading.summary_every = 6;
    config
}
