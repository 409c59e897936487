//! Read-only informational commands.

use serenity::all::{Context, CreateEmbed, CreateMessage, Message};

use crate::bot::handler::Handler;
use crate::data::{ActiveChallengeRepository, SolveRepository};
use crate::error::AppError;
use crate::model::Category;
use crate::service::{scoreboard::SCOREBOARD_SIZE, ScoreboardService, ScoringService};

const LIST_LIMIT: usize = 20;

/// `!solved` — recent solved challenges, newest first.
pub async fn solved(handler: &Handler, ctx: &Context, msg: &Message) -> Result<(), AppError> {
    let solves = SolveRepository::new(&handler.db).list_all().await?;
    if solves.is_empty() {
        msg.channel_id
            .say(&ctx.http, "No challenges solved yet. Get hacking!")
            .await?;
        return Ok(());
    }

    let lines: Vec<String> = solves
        .iter()
        .take(LIST_LIMIT)
        .map(|solve| {
            format!(
                "{}**{}** ({} / {}) — <@{}>",
                if solve.first_blood { "🩸 " } else { "" },
                solve.challenge_name,
                solve.category,
                solve.difficulty,
                solve.user_id,
            )
        })
        .collect();

    let embed = CreateEmbed::new()
        .title(format!("✅ Solved challenges ({})", solves.len()))
        .colour(0x2ECC71)
        .description(lines.join("\n"));
    msg.channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await?;
    Ok(())
}

/// `!working` — currently claimed challenges with their threads.
pub async fn working(handler: &Handler, ctx: &Context, msg: &Message) -> Result<(), AppError> {
    let active = ActiveChallengeRepository::new(&handler.db).list_all().await?;
    if active.is_empty() {
        msg.channel_id
            .say(&ctx.http, "Nobody is working on anything right now.")
            .await?;
        return Ok(());
    }

    let lines: Vec<String> = active
        .iter()
        .take(LIST_LIMIT)
        .map(|claim| {
            format!(
                "**{}** ({}) — <@{}> in <#{}>",
                claim.challenge_name, claim.category, claim.user_id, claim.thread_id,
            )
        })
        .collect();

    let embed = CreateEmbed::new()
        .title("🔧 In progress")
        .colour(0xE67E22)
        .description(lines.join("\n"));
    msg.channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await?;
    Ok(())
}

/// `!scoreboard` — posts the current top-10 where asked, and refreshes the
/// persistent scoreboard message.
pub async fn scoreboard(handler: &Handler, ctx: &Context, msg: &Message) -> Result<(), AppError> {
    let service = ScoreboardService::new(&handler.db, &ctx.http);
    let entries = ScoringService::new(&handler.db)
        .leaderboard(SCOREBOARD_SIZE)
        .await?;
    let embed = service.render(&entries).await;
    msg.channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await?;

    service.refresh(handler.config.scoreboard_channel_id).await?;
    Ok(())
}

/// `!categories` — categories with at least one recorded solve.
pub async fn categories(handler: &Handler, ctx: &Context, msg: &Message) -> Result<(), AppError> {
    let solved = SolveRepository::new(&handler.db).solved_categories().await?;
    if solved.is_empty() {
        let valid: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        msg.channel_id
            .say(
                &ctx.http,
                format!(
                    "No solves recorded yet. Valid categories: {}",
                    valid.join(", ")
                ),
            )
            .await?;
        return Ok(());
    }

    let lines: Vec<String> = solved.iter().map(|c| format!("• `{}`", c)).collect();
    let embed = CreateEmbed::new()
        .title("Categories with solves")
        .colour(0x95A5A6)
        .description(lines.join("\n"));
    msg.channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await?;
    Ok(())
}

/// `!profile [user mention]` — points, rank, and per-category breakdown.
pub async fn profile(
    handler: &Handler,
    ctx: &Context,
    msg: &Message,
    args: &[&str],
) -> Result<(), AppError> {
    let user_id = match args.first() {
        Some(arg) => parse_user_mention(arg).ok_or_else(|| {
            AppError::Validation(format!(
                "Usage: `{}profile [@member]`",
                handler.config.command_prefix
            ))
        })?,
        None => msg.author.id.to_string(),
    };

    let stats = ScoringService::new(&handler.db).profile(&user_id).await?;

    let mut categories: Vec<(&String, &u64)> = stats
        .solves_by_category
        .iter()
        .filter(|(_, count)| **count > 0)
        .collect();
    categories.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    let breakdown = if categories.is_empty() {
        "—".to_string()
    } else {
        categories
            .iter()
            .map(|(category, count)| format!("{}: {}", category, count))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let embed = CreateEmbed::new()
        .title("👤 Member profile")
        .colour(0x9B59B6)
        .description(format!("<@{}>", stats.user_id))
        .field("Rank", format!("#{}", stats.rank), true)
        .field("Points", stats.points.to_string(), true)
        .field(
            "Solves",
            format!("{} ({} 🩸)", stats.solves, stats.first_blood_solves),
            true,
        )
        .field("By category", breakdown, false)
        .field(
            format!("CTFs joined ({})", stats.participated_events.len()),
            joined_events_field(&stats.participated_events),
            false,
        );
    msg.channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await?;
    Ok(())
}

/// `!help` — command reference.
pub async fn help(handler: &Handler, ctx: &Context, msg: &Message) -> Result<(), AppError> {
    let p = &handler.config.command_prefix;
    let embed = CreateEmbed::new()
        .title("Commands")
        .colour(0x3498DB)
        .description(format!(
            "`{p}trying <category> <challenge>` — claim a challenge and open a thread\n\
             `{p}add <category> <challenge> <difficulty> [0|1]` — record a solve (1 = first blood)\n\
             `{p}unsolve <challenge>` — remove one of your recorded solves\n\
             `{p}solved` — recently solved challenges\n\
             `{p}working` — challenges being worked on\n\
             `{p}scoreboard` — current top {size}\n\
             `{p}categories` — categories with recorded solves\n\
             `{p}profile [@member]` — points, rank, and solve breakdown\n\
             `{p}reset_scoreboard` — wipe all scores (admin)\n\
             `{p}test_announce` — dry-run the CTF lifecycle (admin)",
            p = p,
            size = SCOREBOARD_SIZE,
        ));
    msg.channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await?;
    Ok(())
}

fn joined_events_field(event_ids: &[String]) -> String {
    if event_ids.is_empty() {
        return "—".to_string();
    }
    event_ids
        .iter()
        .map(|id| format!("`{}`", id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Accepts `<@123>`, `<@!123>`, or a bare numeric ID.
fn parse_user_mention(arg: &str) -> Option<String> {
    let inner = arg
        .strip_prefix("<@!")
        .or_else(|| arg.strip_prefix("<@"))
        .map(|rest| rest.strip_suffix('>').unwrap_or(rest))
        .unwrap_or(arg);
    inner.parse::<u64>().ok().map(|id| id.to_string())
}
