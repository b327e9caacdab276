//! Service configuration management

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use social_notifier::NotifierConfig;
use std::path::{Path, PathBuf};

/// Configuration file picked up from the working directory when none is given
const DEFAULT_CONFIG_FILE: &str = "dinger.toml";

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Service-level settings (paths, state files)
    pub service: ServiceSettings,

    /// Polling cadence
    pub polling: PollingConfig,

    /// Upstream stats API settings
    pub statsapi: StatsApiConfig,

    /// Social notifier settings
    pub notifier: NotifierConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Directory the durable state files live in
    pub data_dir: PathBuf,

    /// Roster file mapping fantasy teams to raw player names
    pub roster_file: PathBuf,

    /// Seen-play history file name, inside the data directory
    pub seen_plays_file: String,

    /// Scoreboard file name, inside the data directory
    pub scoreboard_file: String,
}

/// Polling cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Seconds between schedule refreshes (the live game set)
    pub game_check_interval_secs: u64,

    /// Seconds between scoring play scans of the live games
    pub play_check_interval_secs: u64,

    /// Cooldown before the supervisor re-initializes after a fatal error
    pub restart_cooldown_secs: u64,
}

/// Upstream stats API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsApiConfig {
    /// Base URL of the MLB Stats API
    pub base_url: String,

    /// Start date for the roster-load home run count log line
    pub stats_since: NaiveDate,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty)
    pub format: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            roster_file: PathBuf::from("./dingers.json"),
            seen_plays_file: "seen_plays.json".to_string(),
            scoreboard_file: "scoreboard.json".to_string(),
        }
    }
}

impl ServiceSettings {
    /// Full path of the seen-play history file.
    pub fn seen_plays_path(&self) -> PathBuf {
        self.data_dir.join(&self.seen_plays_file)
    }

    /// Full path of the scoreboard file.
    pub fn scoreboard_path(&self) -> PathBuf {
        self.data_dir.join(&self.scoreboard_file)
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            game_check_interval_secs: 300,
            play_check_interval_secs: 30,
            restart_cooldown_secs: 60,
        }
    }
}

impl Default for StatsApiConfig {
    fn default() -> Self {
        Self {
            base_url: statsapi_fetcher::DEFAULT_BASE_URL.to_string(),
            stats_since: NaiveDate::from_ymd_opt(2025, 7, 16).unwrap(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

/// Load configuration from the TOML file and environment variables.
///
/// An explicitly given file must exist and parse; with no file given, the
/// default file is used when present and built-in defaults otherwise.
pub fn load_config(config_file: Option<&Path>) -> Result<MonitorConfig> {
    let mut config = match config_file {
        Some(path) => load_from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load_from_file(default_path)?
            } else {
                MonitorConfig::default()
            }
        }
    };

    load_from_env(&mut config);
    Ok(config)
}

/// Load configuration from a TOML file
fn load_from_file(path: &Path) -> Result<MonitorConfig> {
    tracing::debug!("Loading configuration from file: {:?}", path);
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Override configuration from environment variables
fn load_from_env(config: &mut MonitorConfig) {
    if let Ok(level) = std::env::var("DINGER_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Ok(format) = std::env::var("DINGER_LOG_FORMAT") {
        config.logging.format = format;
    }

    if let Ok(data_dir) = std::env::var("DINGER_DATA_DIR") {
        config.service.data_dir = PathBuf::from(data_dir);
    }

    if let Ok(roster) = std::env::var("DINGER_ROSTER_FILE") {
        config.service.roster_file = PathBuf::from(roster);
    }

    if let Ok(base_url) = std::env::var("DINGER_STATSAPI_BASE_URL") {
        config.statsapi.base_url = base_url;
    }

    if let Ok(dry_run) = std::env::var("DINGER_DRY_RUN") {
        config.notifier.dry_run = dry_run.parse().unwrap_or(false);
    }
}

/// Validate configuration, creating the data directory if needed
pub fn validate_config(config: &MonitorConfig) -> Result<()> {
    if !config.service.data_dir.exists() {
        std::fs::create_dir_all(&config.service.data_dir).with_context(|| {
            format!("Failed to create data directory: {:?}", config.service.data_dir)
        })?;
    }

    if !config.service.roster_file.exists() {
        anyhow::bail!("Roster file not found: {}", config.service.roster_file.display());
    }

    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => anyhow::bail!("Invalid log level: {}", config.logging.level),
    }

    match config.logging.format.as_str() {
        "json" | "pretty" => {}
        _ => anyhow::bail!("Invalid log format: {}", config.logging.format),
    }

    if config.polling.game_check_interval_secs == 0 || config.polling.play_check_interval_secs == 0
    {
        anyhow::bail!("Polling intervals must be greater than zero");
    }

    Ok(())
}
