//! # StatsAPI Fetcher
//!
//! Client for the MLB Stats API: today's live games, scoring plays per game,
//! player lookup by name, and per-player home run splits. The scoring-play
//! endpoint is loosely structured upstream and may answer with a structured
//! play sequence, a single free-text block, or something else entirely; all
//! three shapes are decoded into the [`ScoringPlays`] union and normalized
//! into the engine's play records.

pub mod client;
pub mod models;
pub mod normalize;

pub use client::{StatsApiClient, DEFAULT_BASE_URL};
pub use models::{PersonRecord, ScoringPlay, ScoringPlays};
pub use normalize::normalize_scoring_plays;
