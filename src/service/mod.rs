//! Business logic layer.
//!
//! Services orchestrate repositories, the CTFtime adapter, and Discord side
//! effects. The scoring service owns the transactional ledger updates; the
//! lifecycle service is the announce/archive state machine; scoreboard and
//! team stats render and maintain their singleton messages.

pub mod lifecycle;
pub mod scoreboard;
pub mod scoring;
mod singleton;
pub mod team_stats;

#[cfg(test)]
mod test;

pub use lifecycle::CtfLifecycleService;
pub use scoreboard::ScoreboardService;
pub use scoring::ScoringService;
pub use team_stats::TeamStatsService;
