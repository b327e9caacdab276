//! # Roster Registry
//!
//! Turns the league's roster file into the immutable set of tracked players
//! the detection engine runs against. The file maps fantasy team names to
//! raw player names as humans typed them ("Aaron Judge (NYY)"); each name is
//! cleaned, resolved to an MLB person id through the stats API, and keyed by
//! that id. Names that cannot be resolved are logged and skipped; an empty
//! result is a startup error.

pub mod registry;

pub use registry::{clean_player_name, load_roster, read_roster_file, RosterFile};
