// Mock Trading Bot - unified CLI
// Single entry point for running the bot and inspecting its state

use clap::{Parser, Subcommand};
use std::path::Path;
use std::sync::Arc;
use tracing::error;

use mock_trading_bot::{runner, server, snapshot, BotResult, Config, MockPriceFeed};

#[derive(Parser)]
#[command(name = "mock-bot")]
#[command(version = "0.1.0")]
#[command(about = "Mock-mode crypto trading bot with learning and Telegram alerts", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the trading loop and the status endpoint
    Run,

    /// Create a default configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Print the current portfolio snapshot
    Status,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => cmd_run(&cli.config).await,
        Commands::Init { force } => cmd_init(&cli.config, force),
        Commands::Status => cmd_status(&cli.config),
    };

    if let Err(e) = result {
        error!("{} error: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn cmd_run(config_path: &str) -> BotResult<()> {
    let config = Config::load_or_create(config_path)?.apply_env_overrides()?;
    let config = Arc::new(config);

    // The loop runs in the background; the status endpoint keeps the
    // foreground task (and the deployment platform) alive.
    tokio::spawn(runner::run(config.clone()));
    server::serve(config).await
}

fn cmd_init(config_path: &str, force: bool) -> BotResult<()> {
    if Path::new(config_path).exists() && !force {
        return Err(format!("{} already exists (use --force to overwrite)", config_path).into());
    }
    Config::default().to_file(config_path)?;
    println!("✅ Created {}", config_path);
    Ok(())
}

fn cmd_status(config_path: &str) -> BotResult<()> {
    let config = Config::load_or_create(config_path)?.apply_env_overrides()?;
    let state = snapshot::load_state(&config.storage.state_file, config.trading.start_balance);

    let prices = MockPriceFeed;
    let total_usd = state.total_value(&prices);
    let total_gbp = (total_usd * config.display.gbp_rate * 100.0).round() / 100.0;

    println!("💰 Balance: ${:.2}", state.balance);
    let open = state.open_positions();
    if open.is_empty() {
        println!("💎 Positions: none (all in cash)");
    } else {
        println!("💎 Positions:");
        for (base, qty) in open {
            println!("   • {}: {:.6}", base, qty);
        }
    }
    println!("💷 Total (GBP): £{:.2}", total_gbp);
    println!("📈 PnL: ${:.2}", state.pnl);
    Ok(())
}
