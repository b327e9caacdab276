//! Persistent per-fantasy-team home run counter.

use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Mapping from fantasy team name to home run count, stored as a JSON object.
#[derive(Debug)]
pub struct Scoreboard {
    path: PathBuf,
    scores: BTreeMap<String, u64>,
}

impl Scoreboard {
    /// Load the scoreboard from disk, or build a fresh one.
    ///
    /// When no usable file exists, every distinct fantasy team in the roster
    /// starts at zero and the new scoreboard is persisted immediately. A
    /// corrupt file gets the same treatment as a missing one; startup never
    /// fails here.
    pub fn load_or_initialize<I, S>(path: impl Into<PathBuf>, known_teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path = path.into();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<BTreeMap<String, u64>>(&contents) {
                Ok(scores) => {
                    info!("Loaded scoreboard with {} teams from {}", scores.len(), path.display());
                    return Self { path, scores };
                }
                Err(e) => {
                    warn!(
                        "Could not parse scoreboard file {}: {}. Starting fresh.",
                        path.display(),
                        e
                    );
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No scoreboard file found at {}. Initializing a new one.", path.display());
            }
            Err(e) => {
                warn!("Could not read scoreboard file {}: {}. Starting fresh.", path.display(), e);
            }
        }

        let scores: BTreeMap<String, u64> =
            known_teams.into_iter().map(|team| (team.into(), 0)).collect();
        let board = Self { path, scores };
        if let Err(e) = board.persist() {
            error!("Could not save freshly initialized scoreboard: {}", e);
        }
        board
    }

    /// Add one home run to a team's tally and return the new total.
    ///
    /// A team missing from the map (stale scoreboard file after a roster
    /// change) starts from zero rather than erroring.
    pub fn increment(&mut self, team: &str) -> u64 {
        let score = self.scores.entry(team.to_string()).or_insert(0);
        *score += 1;
        *score
    }

    /// Current tally for a team; zero for unknown teams.
    pub fn get(&self, team: &str) -> u64 {
        self.scores.get(team).copied().unwrap_or(0)
    }

    /// Rewrite the full scoreboard to disk.
    pub fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.scores)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Number of teams on the board.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the board has no teams.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
