//! Home run classification over both play shapes.

use crate::types::PlayRecord;

/// Keyword present in every structured home run description
const HOME_RUN: &str = "home run";

/// Free-text play lines sometimes use the verb form instead
const HOMERS: &str = "homers";

/// Whether this play is a home run. Pure function of the record.
///
/// Structured descriptions always spell out "home run"; free-text lines may
/// use either phrasing, so the text path checks both. Matching is
/// case-insensitive.
pub fn is_home_run(record: &PlayRecord) -> bool {
    match record {
        PlayRecord::Structured { description, .. } => {
            description.to_lowercase().contains(HOME_RUN)
        }
        PlayRecord::Text { first_line, .. } => {
            let line = first_line.to_lowercase();
            line.contains(HOME_RUN) || line.contains(HOMERS)
        }
    }
}

/// Human-readable description of the play, verbatim from the feed.
pub fn description(record: &PlayRecord) -> &str {
    match record {
        PlayRecord::Structured { description, .. } => description,
        PlayRecord::Text { first_line, .. } => first_line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structured(description: &str) -> PlayRecord {
        PlayRecord::Structured {
            game_pk: 1,
            at_bat_index: 0,
            batter_id: 42,
            description: description.to_string(),
        }
    }

    fn text(first_line: &str) -> PlayRecord {
        PlayRecord::Text { game_pk: 1, first_line: first_line.to_string() }
    }

    #[test]
    fn test_structured_home_run_is_classified() {
        assert!(is_home_run(&structured("Aaron Judge homers (45) on a fly ball. Home run.")));
        assert!(is_home_run(&structured("Aaron Judge hits a 2-run HOME RUN to left field.")));
    }

    #[test]
    fn test_structured_non_home_run_is_filtered() {
        assert!(!is_home_run(&structured("Judge singles to center")));
        assert!(!is_home_run(&structured("Judge flies out to right")));
    }

    #[test]
    fn test_structured_shape_ignores_homers_verb() {
        // Only the text path accepts the verb form.
        assert!(!is_home_run(&structured("Judge homers (450 ft)")));
    }

    #[test]
    fn test_text_accepts_both_phrasings() {
        assert!(is_home_run(&text("Aaron Judge homers (450 feet) off John Smith.")));
        assert!(is_home_run(&text("Aaron Judge hits a home run to deep center.")));
        assert!(is_home_run(&text("AARON JUDGE HOMERS!")));
    }

    #[test]
    fn test_text_non_home_run_is_filtered() {
        assert!(!is_home_run(&text("Aaron Judge doubles down the line, Soto scores.")));
    }

    #[test]
    fn test_description_is_verbatim() {
        let record = structured("Judge homers (450 ft)");
        assert_eq!(description(&record), "Judge homers (450 ft)");

        let record = text("Aaron Judge homers (450 feet) off John Smith.");
        assert_eq!(description(&record), "Aaron Judge homers (450 feet) off John Smith.");
    }
}
