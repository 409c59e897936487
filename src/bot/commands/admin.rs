//! Administrator-only commands.

use chrono::{Duration, Utc};
use serenity::all::{Context, Message};

use crate::bot::handler::Handler;
use crate::data::CtfEventRepository;
use crate::error::AppError;
use crate::service::lifecycle::selection;
use crate::service::{CtfLifecycleService, ScoreboardService, ScoringService};

/// How long the dry run waits between "event running" and archival.
const DRY_RUN_EVENT_SECS: u64 = 10;

/// `!reset_scoreboard` — wipes all scoring data and refreshes the scoreboard
/// message to its empty state.
pub async fn reset_scoreboard(
    handler: &Handler,
    ctx: &Context,
    msg: &Message,
) -> Result<(), AppError> {
    ensure_admin(handler, ctx, msg).await?;

    ScoringService::new(&handler.db).reset_all().await?;
    ScoreboardService::new(&handler.db, &ctx.http)
        .refresh(handler.config.scoreboard_channel_id)
        .await?;

    msg.channel_id
        .say(&ctx.http, "Scoreboard wiped. A fresh season begins! 🧹")
        .await?;
    tracing::info!(admin = msg.author.id.get(), "scoreboard reset");
    Ok(())
}

/// `!test_announce` — dry run of the whole lifecycle: announce both
/// shortlisted events now (ignoring the weekday gate), wait a few seconds in
/// place of the real event window, then archive them.
pub async fn test_announce(
    handler: &Handler,
    ctx: &Context,
    msg: &Message,
) -> Result<(), AppError> {
    ensure_admin(handler, ctx, msg).await?;

    let lifecycle = CtfLifecycleService::new(
        &handler.db,
        ctx.http.clone(),
        &handler.ctftime,
        &handler.config,
    );

    let now = Utc::now();
    let events = handler
        .ctftime
        .upcoming_events(now, Duration::days(selection::SELECTION_WINDOW_DAYS))
        .await?;
    let picks = selection::shortlist(events);
    if picks.is_empty() {
        msg.channel_id
            .say(&ctx.http, "No upcoming events found to announce.")
            .await?;
        return Ok(());
    }

    for event in &picks {
        let announced = lifecycle.announce_and_setup(event, now).await?;
        let reply = if announced {
            format!("Announced **{}** and opened its channel.", event.title)
        } else {
            format!("**{}** was already announced, skipping.", event.title)
        };
        msg.channel_id.say(&ctx.http, reply).await?;
    }

    msg.channel_id
        .say(
            &ctx.http,
            format!("Archiving in {} seconds...", DRY_RUN_EVENT_SECS),
        )
        .await?;
    tokio::time::sleep(std::time::Duration::from_secs(DRY_RUN_EVENT_SECS)).await;

    let repo = CtfEventRepository::new(&handler.db);
    for event in &picks {
        let Some(row) = repo.find(&event.id.to_string()).await? else {
            continue;
        };
        if let Err(err) = lifecycle.archive_event(&row).await {
            tracing::warn!(event = %row.title, error = %err, "dry-run archival failed");
        }
    }

    msg.channel_id
        .say(&ctx.http, "Lifecycle dry run complete. 🏁")
        .await?;
    Ok(())
}

async fn ensure_admin(handler: &Handler, ctx: &Context, msg: &Message) -> Result<(), AppError> {
    let member = handler
        .config
        .guild_id
        .member(&ctx.http, msg.author.id)
        .await?;
    let permissions = member.permissions(&ctx.cache)?;
    if !permissions.administrator() {
        return Err(AppError::Validation(
            "This command is restricted to administrators.".to_string(),
        ));
    }
    Ok(())
}
