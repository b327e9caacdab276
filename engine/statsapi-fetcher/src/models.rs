//! Wire models for the MLB Stats API.
//!
//! Fields are optional wherever the feed has been observed to omit them;
//! records missing the fields the pipeline needs are skipped during
//! normalization rather than failing the whole response.

use dinger_engine::{GamePk, PlayerId};
use serde::Deserialize;

/// Scoring plays response, one of three shapes.
///
/// The upstream endpoint sometimes serves the play objects, sometimes a
/// single preformatted text block, and occasionally neither. The unknown
/// case is a first-class variant so callers match it explicitly instead of
/// falling over.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScoringPlays {
    /// Ordered sequence of play objects, oldest first
    Structured(Vec<ScoringPlay>),
    /// One free-text block; plays are separated by blank lines
    Text(String),
    /// Anything else the feed decides to send
    Other(serde_json::Value),
}

/// One structured scoring play
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringPlay {
    pub about: Option<PlayAbout>,
    pub result: Option<PlayResult>,
    pub matchup: Option<PlayMatchup>,
}

/// Positional metadata for a play
#[derive(Debug, Clone, Deserialize)]
pub struct PlayAbout {
    #[serde(rename = "atBatIndex")]
    pub at_bat_index: Option<u32>,
}

/// Outcome of a play
#[derive(Debug, Clone, Deserialize)]
pub struct PlayResult {
    pub description: Option<String>,
}

/// Batter/pitcher matchup for a play
#[derive(Debug, Clone, Deserialize)]
pub struct PlayMatchup {
    pub batter: Option<Batter>,
}

/// The batter involved in a play
#[derive(Debug, Clone, Deserialize)]
pub struct Batter {
    pub id: Option<PlayerId>,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
}

/// Schedule response for a date
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

/// One date's slate of games
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDate {
    #[serde(default)]
    pub games: Vec<ScheduleGame>,
}

/// One scheduled game
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleGame {
    #[serde(rename = "gamePk")]
    pub game_pk: GamePk,
    pub status: Option<GameStatus>,
}

/// Game status as the schedule reports it
#[derive(Debug, Clone, Deserialize)]
pub struct GameStatus {
    #[serde(rename = "detailedState")]
    pub detailed_state: Option<String>,
}

/// People search response
#[derive(Debug, Clone, Deserialize)]
pub struct PeopleSearchResponse {
    #[serde(default)]
    pub people: Vec<PersonRecord>,
}

/// One person from the people search
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    pub id: PlayerId,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

/// Player stats response (game log splits)
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub stats: Vec<StatGroup>,
}

/// One stat grouping
#[derive(Debug, Clone, Deserialize)]
pub struct StatGroup {
    #[serde(default)]
    pub splits: Vec<StatSplit>,
}

/// One game-log split
#[derive(Debug, Clone, Deserialize)]
pub struct StatSplit {
    pub stat: Option<GameStat>,
}

/// Per-game hitting stats, only what the tracker reads
#[derive(Debug, Clone, Deserialize)]
pub struct GameStat {
    #[serde(rename = "homeRuns")]
    pub home_runs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_shape_decodes() {
        let json = r#"[
            {
                "about": {"atBatIndex": 12},
                "result": {"description": "Aaron Judge homers (45) on a fly ball. Home run."},
                "matchup": {"batter": {"id": 592450, "fullName": "Aaron Judge"}}
            }
        ]"#;
        let plays: ScoringPlays = serde_json::from_str(json).unwrap();
        match plays {
            ScoringPlays::Structured(list) => {
                assert_eq!(list.len(), 1);
                assert_eq!(list[0].about.as_ref().unwrap().at_bat_index, Some(12));
                assert_eq!(
                    list[0].matchup.as_ref().unwrap().batter.as_ref().unwrap().id,
                    Some(592450)
                );
            }
            other => panic!("expected structured shape, got {other:?}"),
        }
    }

    #[test]
    fn test_text_shape_decodes() {
        let json = r#""Aaron Judge homers (450 feet) off John Smith.\n\nJuan Soto singles.""#;
        let plays: ScoringPlays = serde_json::from_str(json).unwrap();
        assert!(matches!(plays, ScoringPlays::Text(_)));
    }

    #[test]
    fn test_unknown_shape_decodes_as_other() {
        let json = r#"{"copyright": "whatever", "plays": 3}"#;
        let plays: ScoringPlays = serde_json::from_str(json).unwrap();
        assert!(matches!(plays, ScoringPlays::Other(_)));
    }

    #[test]
    fn test_schedule_decodes_with_camel_case_fields() {
        let json = r#"{
            "dates": [{"games": [
                {"gamePk": 716463, "status": {"detailedState": "In Progress"}},
                {"gamePk": 716464, "status": {"detailedState": "Final"}}
            ]}]
        }"#;
        let schedule: ScheduleResponse = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.dates[0].games.len(), 2);
        assert_eq!(schedule.dates[0].games[0].game_pk, 716463);
    }
}
