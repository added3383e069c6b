// Portfolio state and valuation

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::prices::PriceSource;

/// Cash balance, held positions (base asset -> quantity) and recorded pnl.
/// Persisted wholesale after every loop iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioState {
    pub balance: f64,
    pub positions: HashMap<String, f64>,
    pub pnl: f64,
}

impl PortfolioState {
    pub fn new(start_balance: f64) -> Self {
        Self {
            balance: start_balance,
            positions: HashMap::new(),
            pnl: 0.0,
        }
    }

    /// Quantity held of a base asset, zero when absent
    pub fn held(&self, base: &str) -> f64 {
        self.positions.get(base).copied().unwrap_or(0.0)
    }

    /// Cash plus the marked value of every positive position. Held assets are
    /// repriced against USDT, which assumes every traded pair is quoted in a
    /// stable counter-asset.
    pub fn total_value(&self, prices: &dyn PriceSource) -> f64 {
        let mut total = self.balance;
        for (base, &qty) in &self.positions {
            if qty > 0.0 {
                let price = prices.price(&format!("{}/USDT", base));
                total += qty * price;
            }
        }
        (total * 100.0).round() / 100.0
    }

    /// Bases with a positive holding, sorted for stable output
    pub fn open_positions(&self) -> Vec<(&str, f64)> {
        let mut open: Vec<(&str, f64)> = self
            .positions
            .iter()
            .filter(|(_, &qty)| qty > 0.0)
            .map(|(base, &qty)| (base.as_str(), qty))
            .collect();
        open.sort_by(|a, b| a.0.cmp(b.0));
        open
    }
}
