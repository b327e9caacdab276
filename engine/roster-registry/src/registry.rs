//! Roster file parsing and player normalization.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use dinger_engine::{Roster, TrackedPlayer};
use regex::Regex;
use statsapi_fetcher::StatsApiClient;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Roster file document: fantasy team name to raw player names
pub type RosterFile = BTreeMap<String, Vec<String>>;

/// Strip parenthesized annotations from a raw roster name and trim it.
///
/// "Aaron Judge (NYY)" becomes "Aaron Judge".
pub fn clean_player_name(raw: &str) -> String {
    static ANNOTATION: OnceLock<Regex> = OnceLock::new();
    let re = ANNOTATION.get_or_init(|| Regex::new(r"\s*\([^)]*\)").expect("annotation regex"));
    re.replace_all(raw, "").trim().to_string()
}

/// Parse the roster file into its raw team-to-names mapping.
pub fn read_roster_file(path: &Path) -> Result<RosterFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse roster file {}", path.display()))
}

/// Load the roster file and normalize every entry to a tracked player.
///
/// Each resolved player also gets a log line with their home run count since
/// `stats_since`; that lookup failing only costs the log line.
pub async fn load_roster(
    path: &Path,
    client: &StatsApiClient,
    stats_since: NaiveDate,
) -> Result<Roster> {
    info!("Loading and normalizing player roster from {}", path.display());
    let file = read_roster_file(path)?;

    let mut players = Vec::new();
    for (fantasy_team, names) in &file {
        info!("Processing team: {}", fantasy_team);
        for raw_name in names {
            let name = clean_player_name(raw_name);
            if name.is_empty() {
                continue;
            }

            match client.lookup_player(&name).await {
                Ok(Some(person)) => {
                    match client.home_runs_since(person.id, stats_since).await {
                        Ok(count) => info!(
                            "Found and mapped '{}' (ID: {}) - {} home run(s) since {}",
                            person.full_name, person.id, count, stats_since
                        ),
                        Err(e) => {
                            info!("Found and mapped '{}' (ID: {})", person.full_name, person.id);
                            warn!("Could not fetch home run count for '{}': {:#}", person.full_name, e);
                        }
                    }
                    players.push(TrackedPlayer {
                        id: person.id,
                        full_name: person.full_name,
                        fantasy_team: fantasy_team.clone(),
                    });
                }
                Ok(None) => {
                    warn!("Could not find player '{}'. Skipping.", name);
                }
                Err(e) => {
                    warn!("Lookup failed for player '{}': {:#}. Skipping.", name, e);
                }
            }
        }
    }

    let roster = Roster::from_players(players);
    if roster.is_empty() {
        anyhow::bail!("Roster normalization produced no tracked players");
    }
    info!("Roster normalization complete. Mapped {} player(s).", roster.len());
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_clean_player_name_strips_annotations() {
        assert_eq!(clean_player_name("Aaron Judge (NYY)"), "Aaron Judge");
        assert_eq!(clean_player_name("  Juan Soto (NYM) "), "Juan Soto");
        assert_eq!(clean_player_name("Shohei Ohtani"), "Shohei Ohtani");
        assert_eq!(clean_player_name("Mike Trout (LAA) (DTD)"), "Mike Trout");
    }

    #[test]
    fn test_clean_player_name_can_empty_out() {
        assert_eq!(clean_player_name("(vacant)"), "");
        assert_eq!(clean_player_name("   "), "");
    }

    #[test]
    fn test_read_roster_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dingers.json");
        fs::write(
            &path,
            r#"{
                "Iron Man": ["Aaron Judge (NYY)", "Juan Soto"],
                "Sho Time": ["Shohei Ohtani (LAD)"]
            }"#,
        )
        .unwrap();

        let file = read_roster_file(&path).unwrap();
        assert_eq!(file.len(), 2);
        assert_eq!(file["Iron Man"], vec!["Aaron Judge (NYY)", "Juan Soto"]);
    }

    #[test]
    fn test_read_roster_file_rejects_wrong_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dingers.json");
        fs::write(&path, r#"["Aaron Judge"]"#).unwrap();

        assert!(read_roster_file(&path).is_err());
    }

    #[test]
    fn test_read_roster_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(read_roster_file(&dir.path().join("nope.json")).is_err());
    }
}
