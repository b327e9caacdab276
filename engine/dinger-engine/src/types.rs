//! Domain types shared across the detection pipeline.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// MLB game identifier (the schedule's gamePk)
pub type GamePk = u64;

/// MLB person identifier
pub type PlayerId = u64;

/// A rostered player being tracked for home runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedPlayer {
    /// MLB person id, authoritative for structured-shape attribution
    pub id: PlayerId,
    /// Canonical full name as the stats API reports it
    pub full_name: String,
    /// Fantasy team this player scores for
    pub fantasy_team: String,
}

/// The full set of tracked players, keyed by MLB id.
///
/// Built once at startup by the roster registry and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: HashMap<PlayerId, TrackedPlayer>,
}

impl Roster {
    /// Build a roster from resolved players. Later duplicates of an id win.
    pub fn from_players(players: impl IntoIterator<Item = TrackedPlayer>) -> Self {
        Self { players: players.into_iter().map(|p| (p.id, p)).collect() }
    }

    /// Exact lookup by MLB id.
    pub fn get(&self, id: PlayerId) -> Option<&TrackedPlayer> {
        self.players.get(&id)
    }

    /// Iterate all tracked players (no particular order).
    pub fn players(&self) -> impl Iterator<Item = &TrackedPlayer> {
        self.players.values()
    }

    /// Distinct fantasy team names across the roster.
    pub fn fantasy_teams(&self) -> BTreeSet<String> {
        self.players.values().map(|p| p.fantasy_team.clone()).collect()
    }

    /// Number of tracked players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster has no players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// One upstream play, normalized from whichever shape the feed returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayRecord {
    /// Play object with explicit fields
    Structured {
        game_pk: GamePk,
        /// Ordinal of the at-bat within the game; collision-free play key
        at_bat_index: u32,
        /// MLB id of the batter
        batter_id: PlayerId,
        /// Result description, e.g. "Aaron Judge homers (45) on a fly ball..."
        description: String,
    },
    /// Free-text play, reduced to the first line of its block
    Text {
        game_pk: GamePk,
        /// Exact first line of the play's text block; trailing lines of the
        /// block (inning/score detail) never reach identity or matching
        first_line: String,
    },
}

impl PlayRecord {
    /// Game this play belongs to.
    pub fn game_pk(&self) -> GamePk {
        match self {
            PlayRecord::Structured { game_pk, .. } | PlayRecord::Text { game_pk, .. } => *game_pk,
        }
    }
}

/// Deterministic string key uniquely naming a play for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayId(String);

impl PlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A confirmed, newly-attributed home run, produced at most once per play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeRunEvent {
    /// Full name of the tracked hitter
    pub player_name: String,
    /// Fantasy team credited with the home run
    pub fantasy_team: String,
    /// Human-readable play description for the announcement
    pub description: String,
}
