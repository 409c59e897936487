//! Self-healing singleton embed messages.
//!
//! The scoreboard and team stats each live in one pinned-by-convention
//! message whose ID is stored in `bot_config`. Refreshing edits that message
//! in place; if the stored ID is missing or the edit fails (message deleted
//! by hand, channel recreated), a new message is sent and the stored ID is
//! replaced.

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, CreateEmbed, CreateMessage, EditMessage, Http, MessageId};

use crate::data::BotConfigRepository;
use crate::error::AppError;

pub(crate) async fn upsert_embed_message(
    db: &DatabaseConnection,
    http: &Http,
    channel: ChannelId,
    key: &str,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    let settings = BotConfigRepository::new(db);

    if let Some(message_id) = settings.get_message_id(key).await? {
        match channel
            .edit_message(
                http,
                MessageId::new(message_id),
                EditMessage::new().embed(embed.clone()),
            )
            .await
        {
            Ok(_) => return Ok(()),
            Err(err) => {
                tracing::warn!(
                    key,
                    message_id,
                    error = %err,
                    "stored message unreachable, sending a fresh one"
                );
            }
        }
    }

    let message = channel
        .send_message(http, CreateMessage::new().embed(embed))
        .await?;
    settings.set_message_id(key, message.id.get()).await?;
    Ok(())
}
