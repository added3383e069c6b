//! Per-symbol learning memory and signal decision
//!
//! Each symbol carries an exponential running average of observed prices and a
//! stability score in [0,1]. The trading band around the average narrows as
//! stability grows, so a symbol that keeps printing near its average needs a
//! smaller excursion to trigger a BUY or SELL.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

use crate::core::types::Signal;

/// Smoothing factor of the running average
const EMA_ALPHA: f64 = 0.1;

/// Band half-width at zero stability
const BASE_THRESHOLD: f64 = 0.01;

/// Stability beyond this no longer narrows the band
const STABILITY_CLAMP: f64 = 0.9;

const STABILITY_GAIN: f64 = 0.03;
const STABILITY_DECAY: f64 = 0.02;

/// Fraction of the band width a price may sit from the average and still
/// count as a stable observation
const STABLE_DISTANCE_FACTOR: f64 = 1.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolMemory {
    pub avg: Option<f64>,
    pub stability: f64,
}

impl Default for SymbolMemory {
    fn default() -> Self {
        Self { avg: None, stability: 0.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GlobalStats {
    pub loops: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LearningMemory {
    pub memory: HashMap<String, SymbolMemory>,
    pub global: GlobalStats,
}

/// Trading-band half-width as a fraction of the running average
pub fn threshold_fraction(stability: f64) -> f64 {
    BASE_THRESHOLD * (1.0 - stability.min(STABILITY_CLAMP))
}

impl LearningMemory {
    /// Make sure every configured symbol has a memory entry, as a freshly
    /// loaded snapshot may predate a config change
    pub fn ensure_symbols(&mut self, symbols: &[String]) {
        for symbol in symbols {
            self.memory.entry(symbol.clone()).or_default();
        }
    }

    /// Bump the global loop counter at the start of an iteration
    pub fn begin_loop(&mut self) -> u64 {
        self.global.loops += 1;
        self.global.loops
    }

    /// Observe one price for one symbol: emit a signal against the current
    /// running average, then fold the price into the memory entry. The memory
    /// update happens every cycle regardless of the signal.
    pub fn observe(&mut self, symbol: &str, price: f64) -> Signal {
        let entry = self.memory.entry(symbol.to_string()).or_default();

        // First observation seeds the average at the price itself
        let (avg, stability) = match entry.avg {
            Some(avg) => (avg, entry.stability),
            None => (price, 0.1),
        };

        let thr = threshold_fraction(stability);
        let signal = if price > avg * (1.0 + thr) {
            Signal::Sell
        } else if price < avg * (1.0 - thr) {
            Signal::Buy
        } else {
            Signal::Hold
        };

        // Distance is measured against the pre-update average
        let distance = (price - avg).abs() / avg.max(1.0);
        let new_avg = avg * (1.0 - EMA_ALPHA) + price * EMA_ALPHA;
        let new_stability = if distance < thr * STABLE_DISTANCE_FACTOR {
            (stability + STABILITY_GAIN).min(1.0)
        } else {
            (stability - STABILITY_DECAY).max(0.0)
        };

        entry.avg = Some(new_avg);
        entry.stability = new_stability;

        let diff_pct = (price - new_avg) / new_avg.max(1.0) * 100.0;
        info!(
            "🧠 Learning {}: avg={:.2}, stability={:.2}, diff={:+.2}%",
            symbol, new_avg, new_stability, diff_pct
        );

        signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_narrows_with_stability() {
        assert!(threshold_fraction(0.5) < threshold_fraction(0.1));
        // Clamped above 0.9
        assert_eq!(threshold_fraction(0.9), threshold_fraction(1.0));
    }

    #[test]
    fn test_first_observation_seeds_average() {
        let mut memory = LearningMemory::default();
        let signal = memory.observe("BTC/USDT", 100.0);
        assert_eq!(signal, Signal::Hold);

        let entry = &memory.memory["BTC/USDT"];
        assert!((entry.avg.unwrap() - 100.0).abs() < 1e-9);
        assert!((entry.stability - 0.13).abs() < 1e-9); // 0.1 seed + gain
    }
}
