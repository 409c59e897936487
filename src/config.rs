use serenity::all::{ChannelId, GuildId};

use crate::error::{config::ConfigError, AppError};

const DEFAULT_CTFTIME_API_URL: &str = "https://ctftime.org/api/v1";
const DEFAULT_COMMAND_PREFIX: &str = "!";

/// Application configuration, read once from the environment at startup.
///
/// All Discord IDs are required: the bot manages a single guild and needs the
/// fixed channels and categories it posts into. `CTFTIME_API_URL` exists so
/// tests and staging can point at a stub server.
pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    pub guild_id: GuildId,
    pub scoreboard_channel_id: ChannelId,
    pub first_blood_channel_id: ChannelId,
    pub upcoming_ctfs_channel_id: ChannelId,
    pub team_stats_channel_id: ChannelId,
    pub running_category_id: ChannelId,
    pub archive_category_id: ChannelId,

    pub ctftime_team_id: u64,
    pub ctftime_api_url: String,

    pub command_prefix: String,
    /// Team name written into event channel topics alongside the generated
    /// placeholder credentials.
    pub team_name: String,
    pub team_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            guild_id: GuildId::new(require_u64("DISCORD_GUILD_ID")?),
            scoreboard_channel_id: ChannelId::new(require_u64("SCOREBOARD_CHANNEL_ID")?),
            first_blood_channel_id: ChannelId::new(require_u64("FIRST_BLOOD_CHANNEL_ID")?),
            upcoming_ctfs_channel_id: ChannelId::new(require_u64("UPCOMING_CTFS_CHANNEL_ID")?),
            team_stats_channel_id: ChannelId::new(require_u64("TEAM_STATS_CHANNEL_ID")?),
            running_category_id: ChannelId::new(require_u64("RUNNING_CATEGORY_ID")?),
            archive_category_id: ChannelId::new(require_u64("ARCHIVE_CATEGORY_ID")?),
            ctftime_team_id: require_u64("CTFTIME_TEAM_ID")?,
            ctftime_api_url: optional("CTFTIME_API_URL", DEFAULT_CTFTIME_API_URL),
            command_prefix: optional("COMMAND_PREFIX", DEFAULT_COMMAND_PREFIX),
            team_name: optional("CTF_TEAM_NAME", "our team"),
            team_email: optional("CTF_TEAM_EMAIL", "team@example.com"),
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn require_u64(name: &str) -> Result<u64, ConfigError> {
    let value = require(name)?;
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            expected: "an unsigned integer ID",
        })
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
