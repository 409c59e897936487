//! Scoreboard rendering and the persistent scoreboard message.

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, CreateEmbed, CreateEmbedFooter, Http, UserId};

use crate::data::settings::SCOREBOARD_MESSAGE_ID;
use crate::error::AppError;
use crate::model::ScoreboardEntry;
use crate::service::{singleton, ScoringService};

/// Entries shown on the persistent scoreboard message.
pub const SCOREBOARD_SIZE: u64 = 10;

pub struct ScoreboardService<'a> {
    db: &'a DatabaseConnection,
    http: &'a Http,
}

impl<'a> ScoreboardService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: &'a Http) -> Self {
        Self { db, http }
    }

    /// Re-renders the top-10 and updates the scoreboard message in place,
    /// recreating it if the stored one is gone. Called after every scoring
    /// change and once at startup.
    pub async fn refresh(&self, channel: ChannelId) -> Result<(), AppError> {
        let entries = ScoringService::new(self.db)
            .leaderboard(SCOREBOARD_SIZE)
            .await?;
        let embed = self.render(&entries).await;
        singleton::upsert_embed_message(self.db, self.http, channel, SCOREBOARD_MESSAGE_ID, embed)
            .await
    }

    /// Builds the scoreboard embed, resolving member display names through
    /// the API. A member we cannot resolve (left the guild, API hiccup)
    /// falls back to a mention, which Discord still renders.
    pub async fn render(&self, entries: &[ScoreboardEntry]) -> CreateEmbed {
        let description = if entries.is_empty() {
            "No solves recorded yet. Get hacking!".to_string()
        } else {
            let mut lines = Vec::with_capacity(entries.len());
            for (index, entry) in entries.iter().enumerate() {
                let name = self.display_name(&entry.user_id).await;
                lines.push(format!(
                    "{} **{}** — {} pts ({} solves, {} 🩸)",
                    medal(index + 1),
                    name,
                    entry.points,
                    entry.solves,
                    entry.first_bloods,
                ));
            }
            lines.join("\n")
        };

        CreateEmbed::new()
            .title("🏆 Scoreboard")
            .colour(0xF1C40F)
            .description(description)
            .footer(CreateEmbedFooter::new(
                "Points: easy 10 / medium 25 / hard 40, first blood bonus on top",
            ))
    }

    async fn display_name(&self, user_id: &str) -> String {
        let Ok(id) = user_id.parse::<u64>() else {
            return user_id.to_string();
        };
        match self.http.get_user(UserId::new(id)).await {
            Ok(user) => user.name.to_string(),
            Err(_) => format!("<@{}>", id),
        }
    }
}

fn medal(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("`#{}`", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_three_get_medals_rest_get_numbers() {
        assert_eq!(medal(1), "🥇");
        assert_eq!(medal(2), "🥈");
        assert_eq!(medal(3), "🥉");
        assert_eq!(medal(4), "`#4`");
        assert_eq!(medal(10), "`#10`");
    }
}
