//! Challenge commands: claim, solve, revoke.

use rand::Rng;
use serenity::all::{
    ChannelType, Colour, Context, CreateEmbed, CreateMessage, CreateThread, EditRole, Message,
    RoleId,
};
use std::str::FromStr;

use crate::bot::handler::Handler;
use crate::data::ActiveChallengeRepository;
use crate::error::AppError;
use crate::model::{Category, Difficulty};
use crate::service::{ScoreboardService, ScoringService};

const THREAD_NAME_MAX_LEN: usize = 100;

/// `!trying <category> <challenge name>` — opens a public discussion thread
/// and records the claim.
pub async fn trying(
    handler: &Handler,
    ctx: &Context,
    msg: &Message,
    args: &[&str],
) -> Result<(), AppError> {
    let (category, name) = parse_trying_args(args, &handler.config.command_prefix)?;
    let user_id = msg.author.id.to_string();

    let active = ActiveChallengeRepository::new(&handler.db);
    if active.find(&user_id, &name).await?.is_some() {
        return Err(AppError::Validation(format!(
            "You are already working on `{}`!",
            name
        )));
    }

    let thread = msg
        .channel_id
        .create_thread(
            &ctx.http,
            CreateThread::new(thread_name(&name)).kind(ChannelType::PublicThread),
        )
        .await?;

    active
        .create(&user_id, &name, category, thread.id.get())
        .await?;

    thread
        .id
        .say(
            &ctx.http,
            format!(
                "<@{}> is working on **{}** ({}). Discuss it here!",
                msg.author.id.get(),
                name,
                category.display_name(),
            ),
        )
        .await?;
    Ok(())
}

/// `!add <category> <challenge name> <difficulty> [0|1]` — records a solve,
/// announces it (mirrored to the first-blood channel when flagged), and
/// refreshes the scoreboard.
pub async fn add(
    handler: &Handler,
    ctx: &Context,
    msg: &Message,
    args: &[&str],
) -> Result<(), AppError> {
    let parsed = parse_add_args(args, &handler.config.command_prefix)?;
    let user_id = msg.author.id.to_string();

    let scoring = ScoringService::new(&handler.db);
    let outcome = scoring
        .record_solve(
            &user_id,
            &parsed.name,
            parsed.category,
            parsed.difficulty,
            parsed.first_blood,
        )
        .await?;

    let embed = solve_embed(&user_id, &parsed, outcome.points_awarded, outcome.total_points);
    msg.channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed.clone()))
        .await?;
    if parsed.first_blood {
        handler
            .config
            .first_blood_channel_id
            .send_message(&ctx.http, CreateMessage::new().embed(embed))
            .await?;
    }

    if outcome.first_solve_in_category {
        congratulate_category_debut(handler, ctx, msg, parsed.category).await?;
    }

    ScoreboardService::new(&handler.db, &ctx.http)
        .refresh(handler.config.scoreboard_channel_id)
        .await?;
    Ok(())
}

/// `!unsolve <challenge name>` — revokes a recorded solve and refreshes the
/// scoreboard.
pub async fn unsolve(
    handler: &Handler,
    ctx: &Context,
    msg: &Message,
    args: &[&str],
) -> Result<(), AppError> {
    if args.is_empty() {
        return Err(AppError::Validation(format!(
            "Usage: `{}unsolve <challenge name>`",
            handler.config.command_prefix
        )));
    }
    let name = args.join(" ");
    let user_id = msg.author.id.to_string();

    ScoringService::new(&handler.db)
        .revoke_solve(&user_id, &name)
        .await?;

    msg.channel_id
        .say(
            &ctx.http,
            format!("Removed **{}** from your solved challenges.", name),
        )
        .await?;

    ScoreboardService::new(&handler.db, &ctx.http)
        .refresh(handler.config.scoreboard_channel_id)
        .await?;
    Ok(())
}

/// First solve in a category grants the matching guild role, creating it
/// with a random colour when it does not exist yet. The congrats goes to the
/// solver's DMs, falling back to the channel for members with closed DMs.
async fn congratulate_category_debut(
    handler: &Handler,
    ctx: &Context,
    msg: &Message,
    category: Category,
) -> Result<(), AppError> {
    let roles = handler.config.guild_id.roles(&ctx.http).await?;
    let role_id = match roles
        .iter()
        .find(|(_, role)| role.name.eq_ignore_ascii_case(category.display_name()))
    {
        Some((role_id, _)) => *role_id,
        None => ensure_category_role(handler, ctx, category).await?,
    };

    ctx.http
        .add_member_role(
            handler.config.guild_id,
            msg.author.id,
            role_id,
            Some("first solve in category"),
        )
        .await?;

    let congrats = format!(
        "🎉 Congratulations on your first **{}** solve! You earned the {} role.",
        category.display_name(),
        category.display_name(),
    );
    let dm = msg
        .author
        .dm(&ctx.http, CreateMessage::new().content(congrats.clone()))
        .await;
    if dm.is_err() {
        msg.channel_id.say(&ctx.http, congrats).await?;
    }
    Ok(())
}

async fn ensure_category_role(
    handler: &Handler,
    ctx: &Context,
    category: Category,
) -> Result<RoleId, AppError> {
    let role = handler
        .config
        .guild_id
        .create_role(
            &ctx.http,
            EditRole::new()
                .name(category.display_name())
                .colour(random_role_colour())
                .mentionable(true),
        )
        .await?;
    tracing::info!(role = %category.display_name(), "created category role");
    Ok(role.id)
}

fn random_role_colour() -> Colour {
    Colour::new(rand::rng().random_range(0..=0xFF_FFFF))
}

fn thread_name(challenge: &str) -> String {
    let mut name = format!("🧩 {}", challenge);
    crate::util::truncate_to_char_boundary(&mut name, THREAD_NAME_MAX_LEN);
    name
}

struct AddArgs {
    category: Category,
    name: String,
    difficulty: Difficulty,
    first_blood: bool,
}

fn parse_trying_args(args: &[&str], prefix: &str) -> Result<(Category, String), AppError> {
    let usage = || {
        AppError::Validation(format!(
            "Usage: `{}trying <category> <challenge name>`",
            prefix
        ))
    };
    let (first, rest) = args.split_first().ok_or_else(usage)?;
    if rest.is_empty() {
        return Err(usage());
    }
    Ok((Category::from_str(first)?, rest.join(" ")))
}

/// `<category> <name...> <difficulty> [0|1]`. The name may span several
/// words; the optional trailing flag marks a first blood.
fn parse_add_args(args: &[&str], prefix: &str) -> Result<AddArgs, AppError> {
    let usage = || {
        AppError::Validation(format!(
            "Usage: `{}add <category> <challenge name> <difficulty> [0|1]`",
            prefix
        ))
    };

    let mut args = args.to_vec();
    let first_blood = match args.last() {
        Some(&"1") => {
            args.pop();
            true
        }
        Some(&"0") => {
            args.pop();
            false
        }
        _ => false,
    };

    if args.len() < 3 {
        return Err(usage());
    }
    let difficulty = Difficulty::from_str(args.pop().unwrap_or_default())?;
    let category = Category::from_str(args.remove(0))?;
    Ok(AddArgs {
        category,
        name: args.join(" "),
        difficulty,
        first_blood,
    })
}

fn solve_embed(user_id: &str, solve: &AddArgs, points_awarded: i32, total_points: i32) -> CreateEmbed {
    let (title, colour) = if solve.first_blood {
        ("🩸 FIRST BLOOD!", 0xC0392B)
    } else {
        ("✅ Challenge solved!", 0x2ECC71)
    };
    CreateEmbed::new()
        .title(title)
        .colour(colour)
        .description(format!(
            "<@{}> solved **{}** ({} / {}) for **{} points** — now at **{}**.",
            user_id,
            solve.name,
            solve.category.display_name(),
            solve.difficulty.as_str(),
            points_awarded,
            total_points,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trying_args_join_multi_word_names() {
        let (category, name) =
            parse_trying_args(&["web", "SQL", "Labyrinth"], "!").unwrap();
        assert_eq!(category, Category::Web);
        assert_eq!(name, "SQL Labyrinth");
    }

    #[test]
    fn trying_args_require_category_and_name() {
        assert!(parse_trying_args(&[], "!").is_err());
        assert!(parse_trying_args(&["web"], "!").is_err());
        assert!(parse_trying_args(&["knitting", "Scarf"], "!").is_err());
    }

    #[test]
    fn add_args_parse_difficulty_and_flag() {
        let parsed = parse_add_args(&["crypto", "Baby", "RSA", "hard", "1"], "!").unwrap();
        assert_eq!(parsed.category, Category::Crypto);
        assert_eq!(parsed.name, "Baby RSA");
        assert_eq!(parsed.difficulty, Difficulty::Hard);
        assert!(parsed.first_blood);
    }

    #[test]
    fn add_args_default_to_no_first_blood() {
        let parsed = parse_add_args(&["pwn", "ropmaster", "medium"], "!").unwrap();
        assert!(!parsed.first_blood);
        assert_eq!(parsed.name, "ropmaster");
    }

    #[test]
    fn add_args_reject_short_input() {
        assert!(parse_add_args(&["pwn", "easy"], "!").is_err());
        assert!(parse_add_args(&["pwn", "chall", "impossible"], "!").is_err());
    }

    #[test]
    fn thread_names_truncate_multibyte_input_safely() {
        let name = thread_name(&"défi-chiffré-".repeat(20));
        assert!(name.len() <= THREAD_NAME_MAX_LEN);
        assert!(name.starts_with("🧩 "));
    }

    #[test]
    fn role_colours_stay_in_rgb_range() {
        for _ in 0..32 {
            assert!(random_role_colour().0 <= 0xFF_FFFF);
        }
    }
}
