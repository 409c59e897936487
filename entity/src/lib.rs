//! SeaORM entity models for the CTF team bot.
//!
//! One module per table. Discord snowflake IDs are stored as TEXT so they
//! round-trip without signedness issues in SQLite.

pub mod active_challenge;
pub mod bot_config;
pub mod ctf_event;
pub mod ctf_participation;
pub mod solved_challenge;
pub mod user;

pub mod prelude {
    pub use super::active_challenge::Entity as ActiveChallenge;
    pub use super::bot_config::Entity as BotConfig;
    pub use super::ctf_event::Entity as CtfEvent;
    pub use super::ctf_participation::Entity as CtfParticipation;
    pub use super::solved_challenge::Entity as SolvedChallenge;
    pub use super::user::Entity as User;
}
