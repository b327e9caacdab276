//! Per-game detection pipeline.
//!
//! Scans a normalized sequence of plays and surfaces at most one new home
//! run per call. Every play the scan visits is marked seen in memory, so a
//! later poll never re-classifies it; plays after the returned event are
//! left unvisited and get picked up on the next poll. The caller is
//! responsible for persisting the seen-play set before acting on the
//! returned event.

use crate::classifier::{description, is_home_run};
use crate::identity::play_id;
use crate::resolver::resolve;
use crate::types::{HomeRunEvent, PlayRecord, Roster};
use state_store::SeenPlaySet;
use tracing::{debug, info};

/// Scan plays for the first newly-seen home run by a tracked player.
pub fn detect_home_run(
    records: &[PlayRecord],
    roster: &Roster,
    seen: &mut SeenPlaySet,
) -> Option<HomeRunEvent> {
    for record in records {
        let id = play_id(record);
        if seen.contains(id.as_str()) {
            continue;
        }
        seen.mark_seen(id.as_str());

        if !is_home_run(record) {
            continue;
        }

        let play_text = description(record);
        match resolve(record, play_text, roster) {
            Some(player) => {
                info!(
                    "DINGER detected: {} for fantasy team '{}' ({})",
                    player.full_name, player.fantasy_team, id
                );
                return Some(HomeRunEvent {
                    player_name: player.full_name.clone(),
                    fantasy_team: player.fantasy_team.clone(),
                    description: play_text.to_string(),
                });
            }
            None => {
                debug!("Home run by an untracked hitter, dropping play {}: {}", id, play_text);
            }
        }
    }
    None
}
