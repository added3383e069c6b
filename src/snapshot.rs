//! Durable JSON snapshots
//!
//! The loop driver and the status endpoint share state only through these
//! files. Writes go to a temp file first and are renamed into place, so a
//! concurrent reader sees either the previous snapshot or the new one, never
//! a torn file. Missing or corrupt snapshots fall back to defaults; a restart
//! always comes up.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::warn;

use crate::core::{LearningMemory, PortfolioState, TradeRecord};
use crate::error::BotResult;

fn load_or_default<T, P, F>(path: P, default: F) -> T
where
    T: DeserializeOwned,
    P: AsRef<Path>,
    F: FnOnce() -> T,
{
    let path = path.as_ref();
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(value) => return value,
                Err(e) => warn!("Corrupt snapshot {}, using defaults: {}", path.display(), e),
            },
            Err(e) => warn!("Unreadable snapshot {}, using defaults: {}", path.display(), e),
        }
    }
    default()
}

/// Portfolio snapshot, or a fresh portfolio at the configured starting balance
pub fn load_state<P: AsRef<Path>>(path: P, start_balance: f64) -> PortfolioState {
    load_or_default(path, || PortfolioState::new(start_balance))
}

/// Learning snapshot, with entries backfilled for every configured symbol
pub fn load_learning<P: AsRef<Path>>(path: P, symbols: &[String]) -> LearningMemory {
    let mut learning: LearningMemory = load_or_default(path, LearningMemory::default);
    learning.ensure_symbols(symbols);
    learning
}

/// Overwrite a snapshot wholesale via write-temp-then-rename
pub fn save<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> BotResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(value)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Append one executed trade to the JSON-lines trade log
pub fn append_trade<P: AsRef<Path>>(path: P, record: &TradeRecord) -> BotResult<()> {
    let line = serde_json::to_string(record)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}
