//! Application error types.
//!
//! `AppError` is the single aggregate error for the bot. Most variants wrap
//! library errors via `#[from]`; the user-facing failures (validation,
//! duplicate solve, not found) carry messages suitable for replying directly
//! in the invoking channel. No error past startup is fatal: command dispatch
//! and the scheduled sweeps catch everything at their boundary.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup. The only fatal class of error.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity. Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// HTTP client error from reqwest (CTFtime unreachable or non-2xx).
    ///
    /// A sweep hitting this aborts for the current tick and retries on the
    /// next scheduled tick; it is never surfaced to end users.
    #[error(transparent)]
    HttpErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Bad command input (unknown category, difficulty, malformed argument).
    #[error("{0}")]
    Validation(String),

    /// The (challenge, user) pair is already recorded.
    #[error("challenge `{0}` is already recorded")]
    DuplicateSolve(String),

    /// A referenced record does not exist.
    #[error("{0}")]
    NotFound(String),
}

/// Reduces the size of the AppError enum, serenity::Error is very large.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Message to show the invoking user, if this failure is theirs to see.
    ///
    /// Validation, duplicate-solve, and not-found errors are reported back in
    /// the channel. Everything else (database, Discord, HTTP) is logged
    /// server-side and the user only gets a generic acknowledgement.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) => Some(msg.clone()),
            Self::DuplicateSolve(_) => Some(self.to_string()),
            _ => None,
        }
    }
}
