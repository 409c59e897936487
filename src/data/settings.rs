//! Key/value settings repository.
//!
//! Holds the singleton message IDs that must survive restarts so the bot can
//! edit its scoreboard and team stats messages in place.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Persisted message ID of the scoreboard singleton.
pub const SCOREBOARD_MESSAGE_ID: &str = "scoreboard_message_id";
/// Persisted message ID of the CTFtime team stats singleton.
pub const TEAM_STATS_MESSAGE_ID: &str = "ctftime_team_message_id";

pub struct BotConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let row = entity::prelude::BotConfig::find_by_id(key.to_string())
            .one(self.db)
            .await?;
        Ok(row.map(|r| r.value))
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<(), DbErr> {
        entity::prelude::BotConfig::insert(entity::bot_config::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::bot_config::Column::Key)
                .update_column(entity::bot_config::Column::Value)
                .to_owned(),
        )
        .exec(self.db)
        .await?;
        Ok(())
    }

    /// Typed accessor for message ID settings. A value that fails to parse
    /// is treated as absent; the singleton-message pattern then posts a fresh
    /// message and overwrites the bad value.
    pub async fn get_message_id(&self, key: &str) -> Result<Option<u64>, DbErr> {
        Ok(self.get(key).await?.and_then(|v| v.parse::<u64>().ok()))
    }

    pub async fn set_message_id(&self, key: &str, message_id: u64) -> Result<(), DbErr> {
        self.set(key, &message_id.to_string()).await
    }
}
