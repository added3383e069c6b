// End-to-end style tests composing the loop's pieces: price -> signal ->
// execution -> snapshot, the way one driver iteration runs them

mod common;

use common::create_test_config;
use mock_trading_bot::{execute_trade, format_summary, snapshot, FixedPriceFeed, Signal};
use tempfile::TempDir;

/// Run `iterations` loop bodies against a scripted price sequence
fn run_iterations(prices: &[f64], state_path: &std::path::Path, learning_path: &std::path::Path) {
    let config = create_test_config();
    let pair = &config.trading.symbols[0];

    let mut state = snapshot::load_state(state_path, config.trading.start_balance);
    let mut learning = snapshot::load_learning(learning_path, &config.trading.symbols);

    for &price in prices {
        learning.begin_loop();
        let signal = learning.observe(pair, price);
        if signal != Signal::Hold {
            let _ = execute_trade(&mut state, pair, signal, price);
        }
        snapshot::save(state_path, &state).unwrap();
        snapshot::save(learning_path, &learning).unwrap();
    }
}

#[test]
fn test_iterations_persist_state_and_learning() {
    let dir = TempDir::new().unwrap();
    let state_path = dir.path().join("state.json");
    let learning_path = dir.path().join("learning.json");

    // Seed at 100, then a dip deep enough to buy
    run_iterations(&[100.0, 95.0], &state_path, &learning_path);

    let state = snapshot::load_state(&state_path, 0.0);
    let learning = snapshot::load_learning(&learning_path, &[]);

    assert_eq!(learning.global.loops, 2);
    // The dip bought 10% of the balance
    assert!((state.balance - 9000.0).abs() < 1e-9);
    assert!(state.held("BTC") > 0.0);
}

#[test]
fn test_restart_resumes_from_snapshots() {
    let dir = TempDir::new().unwrap();
    let state_path = dir.path().join("state.json");
    let learning_path = dir.path().join("learning.json");

    run_iterations(&[100.0, 95.0], &state_path, &learning_path);
    // "Restart": a second run loads what the first one persisted
    run_iterations(&[95.5], &state_path, &learning_path);

    let learning = snapshot::load_learning(&learning_path, &[]);
    assert_eq!(learning.global.loops, 3);

    let state = snapshot::load_state(&state_path, 0.0);
    assert!(state.held("BTC") > 0.0);
}

#[test]
fn test_cash_flow_matches_valuation() {
    let dir = TempDir::new().unwrap();
    let state_path = dir.path().join("state.json");
    let learning_path = dir.path().join("learning.json");

    run_iterations(&[100.0, 95.0], &state_path, &learning_path);

    let state = snapshot::load_state(&state_path, 0.0);
    // Marked at the buy price, the portfolio is worth the starting balance
    let feed = FixedPriceFeed::new(95.0);
    assert!((state.total_value(&feed) - 10000.0).abs() < 0.01);
}

#[test]
fn test_summary_reflects_persisted_state() {
    let dir = TempDir::new().unwrap();
    let state_path = dir.path().join("state.json");
    let learning_path = dir.path().join("learning.json");

    run_iterations(&[100.0, 95.0], &state_path, &learning_path);

    let state = snapshot::load_state(&state_path, 0.0);
    let learning = snapshot::load_learning(&learning_path, &[]);
    let feed = FixedPriceFeed::new(95.0);

    let summary = format_summary(&state, &learning, &feed, 0.78);
    assert!(summary.contains("Balance: $9000.00"));
    assert!(summary.contains("• BTC:"));
    assert!(summary.contains("📘 BTC/USDT:"));
}
