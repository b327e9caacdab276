//! Attribution of a classified home run to a tracked player.
//!
//! The structured shape carries the batter's MLB id, which is authoritative:
//! attribution is an exact roster lookup with no fuzzy fallback. The text
//! shape has no id at all, so attribution falls back to scanning the roster
//! for a player whose last name appears in the play description. Shared
//! surnames and surnames that happen to occur in unrelated text are not
//! disambiguated; the first roster match wins.

use crate::types::{PlayRecord, Roster, TrackedPlayer};
use tracing::debug;

/// Resolve a home run play to the tracked player who hit it, if any.
pub fn resolve<'a>(
    record: &PlayRecord,
    description: &str,
    roster: &'a Roster,
) -> Option<&'a TrackedPlayer> {
    match record {
        PlayRecord::Structured { batter_id, .. } => {
            let player = roster.get(*batter_id);
            if player.is_none() {
                debug!("Batter id {} is not on the tracked roster", batter_id);
            }
            player
        }
        PlayRecord::Text { .. } => roster
            .players()
            .find(|player| description.contains(last_name(&player.full_name))),
    }
}

/// Last whitespace-delimited token of a full name.
fn last_name(full_name: &str) -> &str {
    full_name.split_whitespace().last().unwrap_or(full_name)
}
