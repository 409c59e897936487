//! CTF event lifecycle: announce, open a channel and role, archive.
//!
//! Progress is persisted per event (`announced` → `channel_created` →
//! `archived`), so a crash between steps leaves a row the next tick can see
//! instead of orphaned Discord objects. Reaction events on announcement
//! messages grant and revoke the event role.

pub mod announce;
pub mod archive;
pub mod selection;

use sea_orm::DatabaseConnection;
use serenity::all::{Http, Reaction, RoleId};
use std::sync::Arc;

use crate::config::Config;
use crate::ctftime::CtftimeClient;
use crate::data::{CtfEventRepository, ParticipationRepository};
use crate::error::AppError;

/// Reaction members click on an announcement to join the event.
pub const ANNOUNCE_EMOJI: &str = "🔥";

pub struct CtfLifecycleService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
    ctftime: &'a CtftimeClient,
    config: &'a Config,
}

impl<'a> CtfLifecycleService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http: Arc<Http>,
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

    /// Grants the event role when a member reacts with 🔥 on an announcement
    /// message, and records their participation. Reactions on unrelated
    /// messages, from bots, or on events without a live role are ignored.
    pub async fn handle_reaction_add(&self, reaction: &Reaction) -> Result<(), AppError> {
        if !reaction.emoji.unicode_eq(ANNOUNCE_EMOJI) {
            return Ok(());
        }
        let Some(user_id) = reaction.user_id else {
            return Ok(());
        };
        let repo = CtfEventRepository::new(self.db);
        let Some(event) = repo.find_by_message_id(reaction.message_id.get()).await? else {
            return Ok(());
        };
        let Some(role_id) = parse_role(event.role_id.as_deref()) else {
            return Ok(());
        };

        let member = self.config.guild_id.member(&self.http, user_id).await?;
        if member.user.bot {
            return Ok(());
        }

        self.http
            .add_member_role(
                self.config.guild_id,
                user_id,
                role_id,
                Some("joined CTF event"),
            )
            .await?;
        ParticipationRepository::new(self.db)
            .record(&user_id.to_string(), &event.event_id)
            .await?;

        tracing::info!(
            user_id = user_id.get(),
            event = %event.title,
            "granted event role"
        );
        Ok(())
    }

    /// Revokes the event role when the reaction is removed. The participation
    /// record stays: they joined, even if they later un-reacted.
    pub async fn handle_reaction_remove(&self, reaction: &Reaction) -> Result<(), AppError> {
        if !reaction.emoji.unicode_eq(ANNOUNCE_EMOJI) {
            return Ok(());
        }
        let Some(user_id) = reaction.user_id else {
            return Ok(());
        };
        let repo = CtfEventRepository::new(self.db);
        let Some(event) = repo.find_by_message_id(reaction.message_id.get()).await? else {
            return Ok(());
        };
        let Some(role_id) = parse_role(event.role_id.as_deref()) else {
            return Ok(());
        };

        let member = self.config.guild_id.member(&self.http, user_id).await?;
        if member.user.bot {
            return Ok(());
        }

        self.http
            .remove_member_role(
                self.config.guild_id,
                user_id,
                role_id,
                Some("left CTF event"),
            )
            .await?;

        tracing::info!(
            user_id = user_id.get(),
            event = %event.title,
            "revoked event role"
        );
        Ok(())
    }
}

fn parse_role(stored: Option<&str>) -> Option<RoleId> {
    stored.and_then(|r| r.parse::<u64>().ok()).map(RoleId::new)
}
