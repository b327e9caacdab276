//! The monitoring loop: poll live games, detect home runs, apply side
//! effects in the order the durability contract requires.

use crate::config::MonitorConfig;
use anyhow::{Context, Result};
use chrono::Local;
use dinger_engine::{detect_home_run, GamePk, HomeRunEvent, Roster};
use roster_registry::load_roster;
use social_notifier::SocialClient;
use state_store::{Scoreboard, SeenPlaySet, StateStoreError};
use statsapi_fetcher::{normalize_scoring_plays, StatsApiClient};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{error, info};

/// Errors that end the monitoring loop and bounce back to the supervisor
#[derive(Debug, Error)]
pub enum FatalError {
    /// The seen-play set could not be flushed to disk. Scoring and
    /// notification for the pending event were withheld; after the restart
    /// cooldown the state files are reloaded and the play is retried.
    #[error("could not persist seen-play state: {0}")]
    SeenPlayPersistence(#[from] StateStoreError),
}

/// Long-lived state of one monitoring session
pub struct HomerunMonitor {
    config: MonitorConfig,
    statsapi: StatsApiClient,
    notifier: SocialClient,
    roster: Roster,
    seen_plays: SeenPlaySet,
    scoreboard: Scoreboard,
}

impl HomerunMonitor {
    /// Load roster and durable state and build the API clients.
    pub async fn initialize(config: MonitorConfig) -> Result<Self> {
        let statsapi = StatsApiClient::with_base_url(&config.statsapi.base_url)?;

        info!("[1/4] Loading and normalizing player roster...");
        let roster =
            load_roster(&config.service.roster_file, &statsapi, config.statsapi.stats_since)
                .await
                .context("Could not load roster")?;

        info!("[2/4] Loading scoreboard...");
        let scoreboard =
            Scoreboard::load_or_initialize(config.service.scoreboard_path(), roster.fantasy_teams());

        info!("[3/4] Loading seen plays history...");
        let seen_plays = SeenPlaySet::load_or_empty(config.service.seen_plays_path());

        info!("[4/4] Creating social media client...");
        let notifier =
            SocialClient::new(&config.notifier).context("Could not create social media client")?;

        Ok(Self { config, statsapi, notifier, roster, seen_plays, scoreboard })
    }

    /// Run the polling loop until Ctrl-C (clean exit) or a fatal error.
    pub async fn run(&mut self) -> Result<(), FatalError> {
        info!("Initialization complete. Entering main monitoring loop.");

        let game_check_interval = Duration::from_secs(self.config.polling.game_check_interval_secs);
        let play_check_interval = Duration::from_secs(self.config.polling.play_check_interval_secs);

        let mut active_games: Vec<GamePk> = Vec::new();
        let mut last_game_check: Option<Instant> = None;

        loop {
            if last_game_check.is_none_or(|at| at.elapsed() >= game_check_interval) {
                active_games = self.fetch_active_games().await;
                last_game_check = Some(Instant::now());
            }

            for &game_pk in &active_games {
                if let Some(event) = self.check_game(game_pk).await {
                    self.handle_event(event).await?;
                }
            }

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received. Leaving the monitoring loop.");
                    return Ok(());
                }
                _ = tokio::time::sleep(play_check_interval) => {}
            }
        }
    }

    /// Refresh the set of live games from today's schedule.
    ///
    /// A schedule fetch failure empties the set for this interval; the next
    /// refresh will repopulate it.
    async fn fetch_active_games(&self) -> Vec<GamePk> {
        info!("Checking for active games...");
        let today = Local::now().date_naive();
        match self.statsapi.fetch_active_game_pks(today).await {
            Ok(games) => {
                if games.is_empty() {
                    info!("No live games found. Will check again later.");
                } else {
                    info!("Found {} live game(s). Now monitoring.", games.len());
                }
                games
            }
            Err(e) => {
                error!("Could not fetch schedule from the stats API: {:#}", e);
                Vec::new()
            }
        }
    }

    /// Scan one game's scoring plays for a new home run.
    async fn check_game(&mut self, game_pk: GamePk) -> Option<HomeRunEvent> {
        let plays = match self.statsapi.fetch_scoring_plays(game_pk).await {
            Ok(plays) => plays,
            Err(e) => {
                error!("Could not fetch scoring plays for game {}: {:#}", game_pk, e);
                return None;
            }
        };

        let records = normalize_scoring_plays(game_pk, &plays);
        detect_home_run(&records, &self.roster, &mut self.seen_plays)
    }

    /// Ordered side effects for one confirmed event: persist the seen-play
    /// set, then score, then persist the scoreboard, then announce. If the
    /// seen-play flush fails, the event is neither scored nor announced.
    async fn handle_event(&mut self, event: HomeRunEvent) -> Result<(), FatalError> {
        self.seen_plays.persist()?;

        let new_score = self.scoreboard.increment(&event.fantasy_team);
        info!("Score updated for '{}'. New score: {}", event.fantasy_team, new_score);

        if let Err(e) = self.scoreboard.persist() {
            error!("Could not persist scoreboard: {}. Keeping the in-memory score.", e);
        }

        if let Err(e) = self.notifier.post_home_run(&event, new_score).await {
            error!("Could not post announcement for {}: {:#}", event.player_name, e);
        }

        Ok(())
    }
}
