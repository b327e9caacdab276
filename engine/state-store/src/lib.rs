//! # State Store
//!
//! Durable state for the home run tracker: the set of play identifiers that
//! have already been handled, and the per-fantasy-team scoreboard. Both are
//! small human-readable JSON documents that are fully rewritten on every
//! save and reloaded at startup, so detection stays at-most-once across
//! process restarts.

pub mod error;
pub mod scoreboard;
pub mod seen_plays;

pub use error::{Result, StateStoreError};
pub use scoreboard::Scoreboard;
pub use seen_plays::SeenPlaySet;
