//! Persistent set of play identifiers that have already been handled.
//!
//! The set only ever grows. Every play the detection pipeline scans is added
//! here, which is what guarantees at-most-once notification per real-world
//! play across polls and process restarts. Entries are never evicted.

use crate::error::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Restart-durable set of play identifiers, stored as a JSON array of strings.
#[derive(Debug)]
pub struct SeenPlaySet {
    path: PathBuf,
    plays: HashSet<String>,
}

impl SeenPlaySet {
    /// Load the seen-play history from disk.
    ///
    /// A missing, unreadable, or corrupt file yields an empty set. Losing
    /// history is recoverable (at worst a duplicate scan of old plays);
    /// refusing to start is not.
    pub fn load_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Vec<String>>(&contents) {
                Ok(ids) => {
                    info!("Loaded {} seen play IDs from {}", ids.len(), path.display());
                    let plays = ids.into_iter().collect();
                    Self { path, plays }
                }
                Err(e) => {
                    warn!(
                        "Could not parse seen plays file {}: {}. Starting with an empty set.",
                        path.display(),
                        e
                    );
                    Self { path, plays: HashSet::new() }
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "No seen plays file found at {}. Starting with an empty set.",
                    path.display()
                );
                Self { path, plays: HashSet::new() }
            }
            Err(e) => {
                warn!(
                    "Could not read seen plays file {}: {}. Starting with an empty set.",
                    path.display(),
                    e
                );
                Self { path, plays: HashSet::new() }
            }
        }
    }

    /// Whether this play identifier has already been scanned.
    pub fn contains(&self, play_id: &str) -> bool {
        self.plays.contains(play_id)
    }

    /// Record a play identifier as handled. Returns true if it was new.
    pub fn mark_seen(&mut self, play_id: impl Into<String>) -> bool {
        self.plays.insert(play_id.into())
    }

    /// Rewrite the full set to disk.
    ///
    /// Must succeed before any scoreboard update or notification for a newly
    /// detected play is allowed to proceed; the caller fails closed on error.
    pub fn persist(&self) -> Result<()> {
        let mut ids: Vec<&str> = self.plays.iter().map(String::as_str).collect();
        ids.sort_unstable();
        let json = serde_json::to_string_pretty(&ids)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Number of play identifiers retained.
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        let set = SeenPlaySet::load_or_empty(dir.path().join("seen_plays.json"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_mark_seen_and_contains() {
        let dir = TempDir::new().unwrap();
        let mut set = SeenPlaySet::load_or_empty(dir.path().join("seen_plays.json"));

        assert!(set.mark_seen("G1-5"));
        assert!(set.contains("G1-5"));
        assert!(!set.contains("G1-6"));

        // Marking the same play again reports it as already seen.
        assert!(!set.mark_seen("G1-5"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_persist_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seen_plays.json");

        let mut set = SeenPlaySet::load_or_empty(&path);
        set.mark_seen("G1-5");
        set.mark_seen("G1-9");
        set.persist().unwrap();

        let reloaded = SeenPlaySet::load_or_empty(&path);
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.contains("G1-5"));
        assert!(reloaded.contains("G1-9"));
    }

    #[test]
    fn test_corrupt_file_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seen_plays.json");
        fs::write(&path, "{ not json ]").unwrap();

        let set = SeenPlaySet::load_or_empty(&path);
        assert!(set.is_empty());
    }

    #[test]
    fn test_wrong_document_shape_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seen_plays.json");
        fs::write(&path, r#"{"G1-5": true}"#).unwrap();

        let set = SeenPlaySet::load_or_empty(&path);
        assert!(set.is_empty());
    }

    #[test]
    fn test_persist_rewrites_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seen_plays.json");

        let mut set = SeenPlaySet::load_or_empty(&path);
        set.mark_seen("G1-5");
        set.persist().unwrap();
        set.mark_seen("G1-9");
        set.persist().unwrap();

        let ids: Vec<String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(ids, vec!["G1-5".to_string(), "G1-9".to_string()]);
    }
}
