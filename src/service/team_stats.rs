//! Daily CTFtime team standing message.

use sea_orm::DatabaseConnection;
use serenity::all::{CreateEmbed, CreateEmbedFooter, Http};

use crate::config::Config;
use crate::ctftime::{CtftimeClient, TeamProfile};
use crate::data::settings::TEAM_STATS_MESSAGE_ID;
use crate::error::AppError;
use crate::service::singleton;

pub struct TeamStatsService<'a> {
    db: &'a DatabaseConnection,
    http: &'a Http,
    ctftime: &'a CtftimeClient,
    config: &'a Config,
}

impl<'a> TeamStatsService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http: &'a Http,
        ctftime: &'a CtftimeClient,
        config: &'a Config,
    ) -> Self {
        Self {
            db,
            http,
            ctftime,
            config,
        }
    }

    /// Fetches the team's CTFtime profile and updates the stats message in
    /// place. A fetch failure propagates to the tick, which logs and waits
    /// for the next day.
    pub async fn refresh(&self) -> Result<(), AppError> {
        let profile = self.ctftime.team_profile(self.config.ctftime_team_id).await?;
        singleton::upsert_embed_message(
            self.db,
            self.http,
            self.config.team_stats_channel_id,
            TEAM_STATS_MESSAGE_ID,
            team_embed(&profile, self.config.ctftime_team_id),
        )
        .await
    }
}

fn team_embed(profile: &TeamProfile, team_id: u64) -> CreateEmbed {
    let (rating_place, country_place) = profile.latest_places();

    let mut embed = CreateEmbed::new()
        .title(format!("📊 {} on CTFtime", profile.name))
        .url(format!("https://ctftime.org/team/{}", team_id))
        .colour(0x3498DB)
        .field(
            "Rating points",
            profile
                .rating_points
                .map(|p| format!("{:.2}", p))
                .unwrap_or_else(|| "—".to_string()),
            true,
        )
        .field(
            "Global place",
            rating_place
                .map(|p| format!("#{}", p))
                .unwrap_or_else(|| "unranked".to_string()),
            true,
        )
        .footer(CreateEmbedFooter::new("Updated daily from ctftime.org"));

    if let Some(country) = &profile.country {
        embed = embed.field(
            format!("Place in {}", country),
            country_place
                .map(|p| format!("#{}", p))
                .unwrap_or_else(|| "unranked".to_string()),
            true,
        );
    }
    if let Some(logo) = &profile.logo {
        embed = embed.thumbnail(logo.clone());
    }
    embed
}
