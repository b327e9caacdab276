//! HTTP client for the MLB Stats API.

use crate::models::{PeopleSearchResponse, PersonRecord, ScheduleResponse, ScoringPlays, StatsResponse};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use dinger_engine::{GamePk, PlayerId};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Production MLB Stats API host
pub const DEFAULT_BASE_URL: &str = "https://statsapi.mlb.com";

/// Schedule statuses that count as live for monitoring purposes
const ACTIVE_STATUSES: [&str; 4] = ["In Progress", "Live", "Warmup", "Pre-Game"];

/// Client for the MLB Stats API
pub struct StatsApiClient {
    client: Client,
    base_url: String,
}

impl StatsApiClient {
    /// Create a client against the production API
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url: base_url.into() })
    }

    /// Fetch the date's schedule and return the gamePk of every live game.
    pub async fn fetch_active_game_pks(&self, date: NaiveDate) -> Result<Vec<GamePk>> {
        let url = format!("{}/api/v1/schedule", self.base_url);
        debug!("Fetching schedule for {} from: {}", date, url);

        let date_param = date.format("%Y-%m-%d").to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("sportId", "1"), ("date", date_param.as_str())])
            .send()
            .await
            .context("Failed to fetch schedule")?;

        if !response.status().is_success() {
            anyhow::bail!("Schedule request failed with status: {}", response.status());
        }

        let schedule: ScheduleResponse =
            response.json().await.context("Failed to parse schedule JSON")?;

        let game_pks: Vec<GamePk> = schedule
            .dates
            .iter()
            .flat_map(|d| &d.games)
            .filter(|game| {
                game.status
                    .as_ref()
                    .and_then(|s| s.detailed_state.as_deref())
                    .is_some_and(|state| ACTIVE_STATUSES.contains(&state))
            })
            .map(|game| game.game_pk)
            .collect();

        debug!("Schedule for {} has {} live game(s)", date, game_pks.len());
        Ok(game_pks)
    }

    /// Fetch the scoring plays for a game, in whichever shape the feed serves.
    pub async fn fetch_scoring_plays(&self, game_pk: GamePk) -> Result<ScoringPlays> {
        let url = format!("{}/api/v1/game/{}/scoringPlays", self.base_url, game_pk);
        debug!("Fetching scoring plays from: {}", url);

        let response =
            self.client.get(&url).send().await.context("Failed to fetch scoring plays")?;

        if !response.status().is_success() {
            anyhow::bail!("Scoring plays request failed with status: {}", response.status());
        }

        response.json().await.context("Failed to parse scoring plays JSON")
    }

    /// Look a player up by name. Returns the first match, or None.
    pub async fn lookup_player(&self, name: &str) -> Result<Option<PersonRecord>> {
        let url = format!("{}/api/v1/people/search", self.base_url);
        debug!("Looking up player '{}'", name);

        let response = self
            .client
            .get(&url)
            .query(&[("names", name)])
            .send()
            .await
            .with_context(|| format!("Failed to look up player '{name}'"))?;

        if !response.status().is_success() {
            anyhow::bail!("Player lookup failed with status: {}", response.status());
        }

        let search: PeopleSearchResponse =
            response.json().await.context("Failed to parse player lookup JSON")?;

        Ok(search.people.into_iter().next())
    }

    /// Total home runs a player has hit since a start date (game log sum).
    pub async fn home_runs_since(
        &self,
        player_id: PlayerId,
        start_date: NaiveDate,
    ) -> Result<u64> {
        let url = format!("{}/api/v1/people/{}/stats", self.base_url, player_id);

        let start_param = start_date.format("%Y-%m-%d").to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("stats", "gameLog"),
                ("group", "hitting"),
                ("startDate", start_param.as_str()),
            ])
            .send()
            .await
            .context("Failed to fetch player game log")?;

        if !response.status().is_success() {
            anyhow::bail!("Player stats request failed with status: {}", response.status());
        }

        let stats: StatsResponse =
            response.json().await.context("Failed to parse player stats JSON")?;

        let total: u64 = stats
            .stats
            .iter()
            .flat_map(|group| &group.splits)
            .filter_map(|split| split.stat.as_ref())
            .filter_map(|stat| stat.home_runs)
            .sum();

        info!("Player {} has {} home run(s) since {}", player_id, total, start_date);
        Ok(total)
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
