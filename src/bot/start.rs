use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents, Http};
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::ctftime::CtftimeClient;
use crate::error::AppError;

/// Builds the gateway client and hands back its `Http` handle so the
/// schedulers can talk to Discord without a gateway context.
pub async fn init_bot(
    db: DatabaseConnection,
    ctftime: CtftimeClient,
    config: Arc<Config>,
) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler {
        db,
        ctftime,
        config: config.clone(),
    };

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}
