//! Loop driver
//!
//! One iteration: bump the loop counter, walk the configured symbols
//! (price -> signal -> simulated trade), persist both snapshots, send the
//! periodic summary, sleep. Runs until the process is killed; iterations that
//! overrun the delay simply run back to back. Snapshot write failures are
//! logged and retried implicitly on the next iteration.

use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tracing::{error, info};

use crate::config::Config;
use crate::core::{execute_trade, Signal};
use crate::prices::{MockPriceFeed, PriceSource};
use crate::reporter::{self, Notifier};
use crate::snapshot;

pub async fn run(config: Arc<Config>) {
    let prices = MockPriceFeed;
    let notifier = Notifier::new(config.telegram.clone());

    let mut state =
        snapshot::load_state(&config.storage.state_file, config.trading.start_balance);
    let mut learning =
        snapshot::load_learning(&config.storage.learning_file, &config.trading.symbols);

    info!(
        "🚀 Starting mock trading bot: {} symbols, {}s loop delay, summary every {} loops",
        config.trading.symbols.len(),
        config.trading.loop_delay_secs,
        config.trading.summary_every
    );
    notifier.send_startup().await;

    loop {
        let loop_count = learning.begin_loop();

        for pair in &config.trading.symbols {
            let price = prices.price(pair);
            let signal = learning.observe(pair, price);
            info!("{} price={:.2} signal={}", pair, price, signal);

            if signal != Signal::Hold {
                if let Some(record) = execute_trade(&mut state, pair, signal, price) {
                    info!("{}", record.notice());
                    if let Err(e) = snapshot::append_trade(&config.storage.trade_log_file, &record)
                    {
                        error!("Trade log append failed ({}): {}", e.category(), e);
                    }
                    notifier.send_trade(&record).await;
                }
            }
        }

        if let Err(e) = snapshot::save(&config.storage.state_file, &state) {
            error!("State snapshot failed ({}): {}", e.category(), e);
        }
        if let Err(e) = snapshot::save(&config.storage.learning_file, &learning) {
            error!("Learning snapshot failed ({}): {}", e.category(), e);
        }

        if loop_count % config.trading.summary_every == 0 {
            let summary =
                reporter::format_summary(&state, &learning, &prices, config.display.gbp_rate);
            info!("Summary:\n{}", summary);
            notifier.send(&summary).await;
        }

        sleep(Duration::from_secs(config.trading.loop_delay_secs)).await;
    }
}
