//! # Dinger Engine
//!
//! Core detection logic for the home run tracker: derive a stable identifier
//! for every upstream play, decide whether the play is a home run, attribute
//! it to a tracked fantasy player, and enforce at-most-once handling via the
//! durable seen-play set.
//!
//! The upstream feed reports plays in two shapes. The structured shape
//! carries an at-bat index and batter id; the text shape is a free-text
//! block where only substring matching is possible. Both flow through here
//! as [`PlayRecord`] variants.

pub mod classifier;
pub mod identity;
pub mod pipeline;
pub mod resolver;
pub mod types;

pub use classifier::{description, is_home_run};
pub use identity::play_id;
pub use pipeline::detect_home_run;
pub use resolver::resolve;
pub use types::{GamePk, HomeRunEvent, PlayId, PlayRecord, PlayerId, Roster, TrackedPlayer};
