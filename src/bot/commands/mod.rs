//! Prefix command parsing and dispatch.

pub mod admin;
pub mod challenge;
pub mod info;

use serenity::all::{Context, Message};

use crate::bot::handler::Handler;
use crate::error::AppError;

/// Routes a prefixed message to its command. Unknown commands are ignored so
/// the bot stays quiet in ordinary conversation.
pub async fn dispatch(handler: &Handler, ctx: &Context, msg: &Message) -> Result<(), AppError> {
    let Some(rest) = msg.content.strip_prefix(&handler.config.command_prefix) else {
        return Ok(());
    };
    let mut parts = rest.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(());
    };
    let args: Vec<&str> = parts.collect();

    match command.to_ascii_lowercase().as_str() {
        "trying" => challenge::trying(handler, ctx, msg, &args).await,
        "add" => challenge::add(handler, ctx, msg, &args).await,
        "unsolve" => challenge::unsolve(handler, ctx, msg, &args).await,
        "solved" => info::solved(handler, ctx, msg).await,
        "working" => info::working(handler, ctx, msg).await,
        "scoreboard" => info::scoreboard(handler, ctx, msg).await,
        "categories" => info::categories(handler, ctx, msg).await,
        "profile" => info::profile(handler, ctx, msg, &args).await,
        "help" => info::help(handler, ctx, msg).await,
        "reset_scoreboard" => admin::reset_scoreboard(handler, ctx, msg).await,
        "test_announce" => admin::test_announce(handler, ctx, msg).await,
        _ => Ok(()),
    }
}
