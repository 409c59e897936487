//! Gateway event handler.
//!
//! Routes messages to the prefix command dispatcher and reactions to the
//! lifecycle service. Handler methods never return errors to serenity:
//! user-facing failures are replied in-channel, everything else is logged.

use sea_orm::DatabaseConnection;
use serenity::all::{ActivityData, Context, EventHandler, Message, Reaction, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::bot::commands;
use crate::config::Config;
use crate::ctftime::CtftimeClient;
use crate::service::{CtfLifecycleService, ScoreboardService};

pub struct Handler {
    pub db: DatabaseConnection,
    pub ctftime: CtftimeClient,
    pub config: Arc<Config>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(user = %ready.user.name, "connected to Discord");
        ctx.set_activity(Some(ActivityData::playing(format!(
            "{}help",
            self.config.command_prefix
        ))));

        // Make sure the scoreboard message exists before anyone solves.
        let scoreboard = ScoreboardService::new(&self.db, &ctx.http);
        if let Err(err) = scoreboard.refresh(self.config.scoreboard_channel_id).await {
            tracing::error!(error = %err, "initial scoreboard refresh failed");
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        if let Err(err) = commands::dispatch(self, &ctx, &msg).await {
            match err.user_message() {
                Some(text) => {
                    if let Err(send_err) = msg.channel_id.say(&ctx.http, text).await {
                        tracing::error!(error = %send_err, "could not send error reply");
                    }
                }
                None => tracing::error!(
                    command = %msg.content,
                    error = %err,
                    "command failed"
                ),
            }
        }
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        let lifecycle =
            CtfLifecycleService::new(&self.db, ctx.http.clone(), &self.ctftime, &self.config);
        if let Err(err) = lifecycle.handle_reaction_add(&reaction).await {
            tracing::error!(error = %err, "reaction add handling failed");
        }
    }

    async fn reaction_remove(&self, ctx: Context, reaction: Reaction) {
        let lifecycle =
            CtfLifecycleService::new(&self.db, ctx.http.clone(), &self.ctftime, &self.config);
        if let Err(err) = lifecycle.handle_reaction_remove(&reaction).await {
            tracing::error!(error = %err, "reaction remove handling failed");
        }
    }
}
