//! Announcement text composition.

/// Hard character limit the endpoint enforces per post
pub const POST_CHAR_LIMIT: usize = 280;

/// Compose the home run announcement.
///
/// The long form quotes a detail clause pulled from the play description
/// (its second comma-separated segment, which is where the feed puts
/// distance/RBI detail). If the long form exceeds the character limit, a
/// compact single-line form is used instead.
pub fn compose_post(
    player_name: &str,
    fantasy_team: &str,
    new_score: u64,
    description: &str,
) -> String {
    let play_details = second_segment(description)
        .map(|detail| format!("({detail})"))
        .unwrap_or_default();

    let text = format!(
        "🚨 DINGER ALERT! 🚨\n\n\
         {player_name} just went deep! {play_details}\n\n\
         That's homer #{new_score} for team \"{fantasy_team}\"!\n"
    );

    if text.chars().count() <= POST_CHAR_LIMIT {
        text
    } else {
        format!(
            "🚨 DINGER! 🚨 {player_name} of \"{fantasy_team}\" just crushed one!\n\
             That's team homer #{new_score}!\n"
        )
    }
}

/// Second comma-separated segment of the description, trimmed.
fn second_segment(description: &str) -> Option<&str> {
    let mut parts = description.split(',');
    parts.next()?;
    parts.next().map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_clause_is_second_segment() {
        let text = compose_post(
            "Aaron Judge",
            "Iron Man",
            11,
            "Aaron Judge hits a home run, 450 ft, 2 RBI",
        );
        assert!(text.contains("Aaron Judge just went deep! (450 ft)"));
        assert!(text.contains("That's homer #11 for team \"Iron Man\"!"));
    }

    #[test]
    fn test_no_comma_means_no_detail_clause() {
        let text = compose_post("Aaron Judge", "Iron Man", 1, "Aaron Judge homers (45)");
        assert!(text.contains("Aaron Judge just went deep! \n"));
    }

    #[test]
    fn test_long_post_falls_back_to_compact_form() {
        let description = format!("leadoff blast, {}", "a".repeat(300));
        let text = compose_post("Aaron Judge", "Iron Man", 3, &description);
        assert!(text.chars().count() <= POST_CHAR_LIMIT);
        assert!(text.contains("just crushed one"));
        assert!(text.contains("That's team homer #3!"));
    }

    #[test]
    fn test_normal_post_stays_under_limit() {
        let text = compose_post(
            "Aaron Judge",
            "Iron Man",
            42,
            "Aaron Judge homers (45) on a fly ball to left center field, 451 ft",
        );
        assert!(text.chars().count() <= POST_CHAR_LIMIT);
        assert!(text.starts_with("🚨 DINGER ALERT! 🚨"));
    }
}
