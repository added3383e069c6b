// Synthetic price feed standing in for a real market-data connection

use rand::Rng;

/// Source of current prices for trading pairs. The trait exists so valuation
/// and reporting can be exercised with a fixed feed in tests.
pub trait PriceSource: Send + Sync {
    /// A plausible current price for the given pair. Infallible: this is a
    /// stand-in for a market-data feed, not a real one.
    fn price(&self, pair: &str) -> f64;
}

/// Mock feed: a base level per recognized asset class plus bounded uniform
/// jitter, with a wider band for the higher-priced class. Unseeded on purpose.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPriceFeed;

impl PriceSource for MockPriceFeed {
    fn price(&self, pair: &str) -> f64 {
        let (base, band): (f64, f64) = if pair.contains("BTC") {
            (107_000.0, 400.0)
        } else {
            (3_700.0, 40.0)
        };
        let drift = rand::thread_rng().gen_range(-band..=band);
        ((base + drift) * 100.0).round() / 100.0
    }
}

/// Feed returning the same price for every pair; test use only
#[derive(Debug, Clone, Copy)]
pub struct FixedPriceFeed {
    price: f64,
}

impl FixedPriceFeed {
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}

impl PriceSource for FixedPriceFeed {
    fn price(&self, _pair: &str) -> f64 {
        self.price
    }
}
