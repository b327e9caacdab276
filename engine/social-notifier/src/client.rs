//! HTTP client for the social posting endpoint.

use crate::compose::compose_post;
use anyhow::{Context, Result};
use dinger_engine::HomeRunEvent;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// X API v2 create-post endpoint
pub const DEFAULT_POST_ENDPOINT: &str = "https://api.x.com/2/tweets";

/// Configuration for the social notifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// Endpoint announcements are posted to
    pub endpoint: String,

    /// Environment variable holding the bearer token
    pub token_env: String,

    /// Log posts instead of sending them
    pub dry_run: bool,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_POST_ENDPOINT.to_string(),
            token_env: "DINGER_SOCIAL_TOKEN".to_string(),
            dry_run: false,
        }
    }
}

/// Client that posts home run announcements
pub struct SocialClient {
    http: Client,
    endpoint: String,
    token: Option<String>,
    dry_run: bool,
}

impl SocialClient {
    /// Build the client, reading the bearer token from the environment.
    ///
    /// A missing token is a startup error unless dry-run is on; there is no
    /// point monitoring games the announcements of which can never be sent.
    pub fn new(config: &NotifierConfig) -> Result<Self> {
        let token = if config.dry_run {
            None
        } else {
            let token = std::env::var(&config.token_env).map_err(|_| {
                anyhow::anyhow!(
                    "Social media token not found in environment variable {}",
                    config.token_env
                )
            })?;
            Some(token)
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { http, endpoint: config.endpoint.clone(), token, dry_run: config.dry_run })
    }

    /// Compose and post the announcement for a confirmed home run.
    pub async fn post_home_run(&self, event: &HomeRunEvent, new_score: u64) -> Result<()> {
        let text = compose_post(
            &event.player_name,
            &event.fantasy_team,
            new_score,
            &event.description,
        );

        if self.dry_run {
            info!("Dry run, not posting:\n{}", text);
            return Ok(());
        }

        info!("Posting home run announcement for {}", event.player_name);
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.token.as_deref().unwrap_or_default())
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .context("Failed to send announcement post")?;

        if !response.status().is_success() {
            anyhow::bail!("Announcement post failed with status: {}", response.status());
        }

        info!("Announcement posted successfully");
        Ok(())
    }
}
