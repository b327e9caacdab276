//! Stable play identifiers.
//!
//! Two observations of the same real play must always derive the same
//! identifier, including across process restarts, because the identifier is
//! what the durable seen-play set deduplicates on. The structured shape has
//! an exact per-game key (the at-bat index); the text shape has no structural
//! index, so the exact first line of the play's block is digested instead.

use crate::types::{PlayId, PlayRecord};
use sha2::{Digest, Sha256};

/// Derive the deduplication identifier for a play. Pure and total.
pub fn play_id(record: &PlayRecord) -> PlayId {
    match record {
        PlayRecord::Structured { game_pk, at_bat_index, .. } => {
            PlayId::new(format!("{game_pk}-{at_bat_index}"))
        }
        PlayRecord::Text { game_pk, first_line } => {
            let digest = Sha256::digest(first_line.as_bytes());
            PlayId::new(format!("{game_pk}-{digest:x}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_identifier_is_game_and_at_bat() {
        let record = PlayRecord::Structured {
            game_pk: 716463,
            at_bat_index: 5,
            batter_id: 42,
            description: "Aaron Judge homers (45) on a fly ball.".to_string(),
        };
        assert_eq!(play_id(&record).as_str(), "716463-5");
    }

    #[test]
    fn test_identifier_is_deterministic() {
        let record = PlayRecord::Text {
            game_pk: 716463,
            first_line: "Aaron Judge homers (450 feet) off John Smith.".to_string(),
        };
        assert_eq!(play_id(&record), play_id(&record.clone()));
    }

    #[test]
    fn test_distinct_first_lines_get_distinct_identifiers() {
        let a = PlayRecord::Text {
            game_pk: 716463,
            first_line: "Aaron Judge homers (450 feet) off John Smith.".to_string(),
        };
        let b = PlayRecord::Text {
            game_pk: 716463,
            first_line: "Juan Soto homers (401 feet) off John Smith.".to_string(),
        };
        assert_ne!(play_id(&a), play_id(&b));
    }

    #[test]
    fn test_same_line_in_different_games_gets_distinct_identifiers() {
        let line = "Aaron Judge homers (450 feet) off John Smith.".to_string();
        let a = PlayRecord::Text { game_pk: 1, first_line: line.clone() };
        let b = PlayRecord::Text { game_pk: 2, first_line: line };
        assert_ne!(play_id(&a), play_id(&b));
    }

    #[test]
    fn test_text_identifier_embeds_game_prefix() {
        let record = PlayRecord::Text { game_pk: 99, first_line: "Judge homers.".to_string() };
        assert!(play_id(&record).as_str().starts_with("99-"));
    }
}
