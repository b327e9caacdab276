//! MLB Homerun Tracker Service
//!
//! Entry point for the home run tracker. Parses the CLI, loads
//! configuration, and runs the monitoring loop under a supervisor that
//! re-initializes from durable state after a fatal error.

use anyhow::Result;
use clap::Parser;
use homerun_service::{config, initialize_logging, HomerunMonitor};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

/// Watches live MLB games and announces home runs by tracked fantasy players
#[derive(Debug, Parser)]
#[command(name = "homerun-tracker", version, about)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory state files are kept in
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Path to the roster file
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Compose announcements but do not post them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.service.data_dir = data_dir;
    }
    if let Some(roster) = cli.roster {
        config.service.roster_file = roster;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.dry_run {
        config.notifier.dry_run = true;
    }
    config::validate_config(&config)?;

    initialize_logging(&config.logging)?;
    info!("Starting MLB Homerun Tracker v{}", env!("CARGO_PKG_VERSION"));

    let cooldown = Duration::from_secs(config.polling.restart_cooldown_secs);

    // Supervisor: a fatal error inside the loop gets a cooldown and a fresh
    // initialization; durable state is reloaded from disk. Initialization
    // failure (bad roster, missing credentials) ends the process instead.
    loop {
        let mut monitor = HomerunMonitor::initialize(config.clone()).await?;

        match monitor.run().await {
            Ok(()) => {
                info!("Tracker shutting down. Goodbye!");
                return Ok(());
            }
            Err(e) => {
                error!("Fatal error in the monitoring loop: {}", e);
                info!("Restarting in {} seconds...", cooldown.as_secs());
                tokio::time::sleep(cooldown).await;
            }
        }
    }
}
