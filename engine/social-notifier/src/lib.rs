//! # Social Notifier
//!
//! Announcement side of the tracker: composes the home run post and sends it
//! to the social media endpoint. Composition is pure and tested; the HTTP
//! client is a thin bearer-token POST. A failed post is logged and dropped —
//! by the time the notifier runs, the play is already persisted as seen and
//! scored, and neither is ever rolled back.

pub mod client;
pub mod compose;

pub use client::{NotifierConfig, SocialClient, DEFAULT_POST_ENDPOINT};
pub use compose::{compose_post, POST_CHAR_LIMIT};
