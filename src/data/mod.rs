//! Database repository layer.
//!
//! One repository struct per table. Repositories hold a borrowed
//! `DatabaseConnection` (injected by the caller, never a global) and keep all
//! SeaORM query construction out of the service and bot layers. Multi-step
//! ledger writes that must be atomic live in `service::scoring`, which runs
//! them inside a single transaction.

pub mod active;
pub mod event;
pub mod participation;
pub mod settings;
pub mod solve;
pub mod user;

#[cfg(test)]
mod test;

pub use active::ActiveChallengeRepository;
pub use event::CtfEventRepository;
pub use participation::ParticipationRepository;
pub use settings::BotConfigRepository;
pub use solve::SolveRepository;
pub use user::UserRepository;
