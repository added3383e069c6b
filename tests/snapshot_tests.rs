// Tests for durable snapshots and the trade log

use chrono::Utc;
use mock_trading_bot::{snapshot, LearningMemory, PortfolioState, TradeRecord, TradeSide};
use std::fs;
use tempfile::TempDir;
use uuid::Uuid;

fn temp_path(dir: &TempDir, name: &str) -> std::path::PathBuf {
    dir.path().join(name)
}

#[test]
fn test_state_snapshot_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = temp_path(&dir, "state.json");

    let mut state = PortfolioState::new(10000.0);
    state.positions.insert("BTC".to_string(), 1.5);
    state.pnl = 42.0;
    snapshot::save(&path, &state).unwrap();

    let loaded = snapshot::load_state(&path, 999.0);
    assert_eq!(loaded.balance, 10000.0);
    assert_eq!(loaded.positions["BTC"], 1.5);
    assert_eq!(loaded.pnl, 42.0);
}

#[test]
fn test_missing_state_falls_back_to_start_balance() {
    let dir = TempDir::new().unwrap();
    let path = temp_path(&dir, "absent.json");

    let state = snapshot::load_state(&path, 5000.0);
    assert_eq!(state.balance, 5000.0);
    assert!(state.positions.is_empty());
    assert_eq!(state.pnl, 0.0);
}

#[test]
fn test_corrupt_state_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = temp_path(&dir, "state.json");
    fs::write(&path, "{not json at all").unwrap();

    let state = snapshot::load_state(&path, 5000.0);
    assert_eq!(state.balance, 5000.0);
    assert!(state.positions.is_empty());
}

#[test]
fn test_save_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_path(&dir, "state.json");

    snapshot::save(&path, &PortfolioState::new(100.0)).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries, vec!["state.json".to_string()]);
}

#[test]
fn test_save_overwrites_wholesale() {
    let dir = TempDir::new().unwrap();
    let path = temp_path(&dir, "state.json");

    let mut state = PortfolioState::new(100.0);
    state.positions.insert("BTC".to_string(), 1.0);
    snapshot::save(&path, &state).unwrap();

    state.positions.clear();
    state.balance = 200.0;
    snapshot::save(&path, &state).unwrap();

    let loaded = snapshot::load_state(&path, 0.0);
    assert_eq!(loaded.balance, 200.0);
    assert!(loaded.positions.is_empty());
}

#[test]
fn test_learning_snapshot_round_trip_and_backfill() {
    let dir = TempDir::new().unwrap();
    let path = temp_path(&dir, "learning.json");

    let mut learning = LearningMemory::default();
    learning.observe("BTC/USDT", 100.0);
    learning.begin_loop();
    learning.begin_loop();
    snapshot::save(&path, &learning).unwrap();

    let symbols = vec!["BTC/USDT".to_string(), "ETH/USDT".to_string()];
    let loaded = snapshot::load_learning(&path, &symbols);

    assert_eq!(loaded.global.loops, 2);
    assert!((loaded.memory["BTC/USDT"].avg.unwrap() - 100.0).abs() < 1e-9);
    // Newly configured symbol gets a fresh entry
    assert_eq!(loaded.memory["ETH/USDT"].avg, None);
}

#[test]
fn test_corrupt_learning_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = temp_path(&dir, "learning.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let symbols = vec!["BTC/USDT".to_string()];
    let loaded = snapshot::load_learning(&path, &symbols);
    assert_eq!(loaded.global.loops, 0);
    assert!(loaded.memory.contains_key("BTC/USDT"));
}

#[test]
fn test_trade_log_lines_parse_back() {
    let dir = TempDir::new().unwrap();
    let path = temp_path(&dir, "trades.jsonl");

    for side in [TradeSide::Buy, TradeSide::Sell] {
        let record = TradeRecord {
            id: Uuid::new_v4(),
            pair: "BTC/USDT".to_string(),
            side,
            price: 100.0,
            quantity: 1.0,
            notional: 100.0,
            timestamp: Utc::now(),
        };
        snapshot::append_trade(&path, &record).unwrap();
    }

    let contents = fs::read_to_string(&path).unwrap();
    let records: Vec<TradeRecord> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].side, TradeSide::Buy);
    assert_eq!(records[1].side, TradeSide::Sell);
}
