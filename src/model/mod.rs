//! Domain models shared across the data, service, and bot layers.
//!
//! Entities (database rows) live in the `entity` crate; the types here are
//! the validated domain vocabulary: challenge categories and difficulties,
//! CTFtime events, the explicit lifecycle state tag, and aggregated stats.

pub mod challenge;
pub mod event;
pub mod stats;

pub use challenge::{Category, Difficulty};
pub use event::{CtfEvent, EventStatus, LifecycleState};
pub use stats::{ProfileStats, ScoreboardEntry};
