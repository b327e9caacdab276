//! Normalization of upstream scoring plays into engine play records.

use crate::models::ScoringPlays;
use dinger_engine::{GamePk, PlayRecord};
use tracing::{debug, warn};

/// Flatten a scoring plays response into play records for the pipeline.
///
/// The structured sequence arrives oldest first and is reversed so the scan
/// starts at the most recent play. Structured records missing the at-bat
/// index or batter id cannot be identified or attributed and are skipped.
/// Text blocks are split on blank lines and reduced to their first line;
/// trailing lines (inning and score detail) carry formatting that drifts
/// between fetches, so they stay out of the record entirely. The unknown
/// shape yields zero candidates.
pub fn normalize_scoring_plays(game_pk: GamePk, plays: &ScoringPlays) -> Vec<PlayRecord> {
    match plays {
        ScoringPlays::Structured(list) => {
            let mut records = Vec::with_capacity(list.len());
            for play in list.iter().rev() {
                let at_bat_index = play.about.as_ref().and_then(|a| a.at_bat_index);
                let batter_id =
                    play.matchup.as_ref().and_then(|m| m.batter.as_ref()).and_then(|b| b.id);
                let (Some(at_bat_index), Some(batter_id)) = (at_bat_index, batter_id) else {
                    debug!("Skipping malformed structured play in game {}", game_pk);
                    continue;
                };
                let description = play
                    .result
                    .as_ref()
                    .and_then(|r| r.description.clone())
                    .unwrap_or_default();
                records.push(PlayRecord::Structured {
                    game_pk,
                    at_bat_index,
                    batter_id,
                    description,
                });
            }
            records
        }
        ScoringPlays::Text(block) => block
            .trim()
            .split("\n\n")
            .filter_map(|play_block| {
                let first_line = play_block.lines().next()?.trim();
                if first_line.is_empty() {
                    return None;
                }
                Some(PlayRecord::Text { game_pk, first_line: first_line.to_string() })
            })
            .collect(),
        ScoringPlays::Other(_) => {
            warn!(
                "Received unexpected data format for scoring plays in game {}. \
                 Expected a play list or a text block. Skipping check.",
                game_pk
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structured_json(plays: &str) -> ScoringPlays {
        serde_json::from_str(plays).unwrap()
    }

    #[test]
    fn test_structured_plays_are_most_recent_first() {
        let plays = structured_json(
            r#"[
                {"about": {"atBatIndex": 3}, "result": {"description": "first"},
                 "matchup": {"batter": {"id": 1}}},
                {"about": {"atBatIndex": 8}, "result": {"description": "second"},
                 "matchup": {"batter": {"id": 2}}}
            ]"#,
        );
        let records = normalize_scoring_plays(716463, &plays);
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            PlayRecord::Structured {
                game_pk: 716463,
                at_bat_index: 8,
                batter_id: 2,
                description: "second".to_string(),
            }
        );
    }

    #[test]
    fn test_structured_play_missing_fields_is_skipped() {
        let plays = structured_json(
            r#"[
                {"result": {"description": "no about"}, "matchup": {"batter": {"id": 1}}},
                {"about": {"atBatIndex": 4}, "result": {"description": "no batter"}},
                {"about": {"atBatIndex": 5}, "result": {"description": "complete"},
                 "matchup": {"batter": {"id": 7}}}
            ]"#,
        );
        let records = normalize_scoring_plays(1, &plays);
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            PlayRecord::Structured {
                game_pk: 1,
                at_bat_index: 5,
                batter_id: 7,
                description: "complete".to_string(),
            }
        );
    }

    #[test]
    fn test_text_block_splits_into_first_lines() {
        let plays = ScoringPlays::Text(
            "Aaron Judge homers (450 feet) off John Smith.\nBottom 4, 2-1 NYY\n\n\
             Juan Soto singles to left.\nTop 6, 2-2"
                .to_string(),
        );
        let records = normalize_scoring_plays(9, &plays);
        assert_eq!(
            records,
            vec![
                PlayRecord::Text {
                    game_pk: 9,
                    first_line: "Aaron Judge homers (450 feet) off John Smith.".to_string(),
                },
                PlayRecord::Text {
                    game_pk: 9,
                    first_line: "Juan Soto singles to left.".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_text_identity_ignores_trailing_block_lines() {
        // Same play, different trailing score detail: one record, same line.
        let a = normalize_scoring_plays(
            9,
            &ScoringPlays::Text("Judge homers.\nBottom 4, 2-1 NYY".to_string()),
        );
        let b = normalize_scoring_plays(
            9,
            &ScoringPlays::Text("Judge homers.\nBottom 4, 3-1 NYY".to_string()),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_and_whitespace_blocks_are_dropped() {
        let plays = ScoringPlays::Text("Soto singles.\n\n   \n\nJudge homers.\n\n".to_string());
        let records = normalize_scoring_plays(9, &plays);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_unknown_shape_yields_no_candidates() {
        let plays: ScoringPlays = serde_json::from_str(r#"{"weird": true}"#).unwrap();
        assert!(normalize_scoring_plays(9, &plays).is_empty());
    }
}
