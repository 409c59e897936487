//! Archival sweep: move finished event channels to the archive category.

use chrono::Utc;
use serenity::all::{
    ChannelId, CreateMessage, EditChannel, PermissionOverwrite, PermissionOverwriteType,
    Permissions, RoleId,
};

use super::CtfLifecycleService;
use crate::data::CtfEventRepository;
use crate::error::AppError;

impl CtfLifecycleService<'_> {
    /// Periodic sweep over every unarchived event. Each event is refreshed
    /// from CTFtime and archived once its finish time has passed. Failures
    /// are isolated per event: a fetch error or a Discord error on one event
    /// is logged and the sweep moves on, leaving that row for the next run.
    pub async fn run_archive_tick(&self) -> Result<(), AppError> {
        let now = Utc::now();
        let repo = CtfEventRepository::new(self.db);

        for row in repo.all_unarchived().await? {
            let Ok(ctftime_id) = row.event_id.parse::<u64>() else {
                tracing::warn!(event_id = %row.event_id, "unparseable event ID, skipping");
                continue;
            };

            let event = match self.ctftime.event_details(ctftime_id).await {
                Ok(event) => event,
                Err(err) => {
                    tracing::warn!(
                        event = %row.title,
                        error = %err,
                        "could not refresh event, leaving for next sweep"
                    );
                    continue;
                }
            };
            if !event.finished_by(now) {
                continue;
            }

            if let Err(err) = self.archive_event(&row).await {
                tracing::warn!(
                    event = %row.title,
                    error = %err,
                    "archival failed, will retry next sweep"
                );
            }
        }
        Ok(())
    }

    /// Archives one event: moves its channel under the archive category,
    /// locks it read-only for the event role, posts the farewell, deletes
    /// the event role, opens the channel read-only to the whole guild, and
    /// marks the row archived.
    ///
    /// Role deletion is tolerated as a no-op (someone may have removed it by
    /// hand); everything else propagates so the row stays unarchived and the
    /// sweep retries. An `announced` row whose channel never got created has
    /// nothing to tear down and is marked archived directly.
    pub async fn archive_event(&self, row: &entity::ctf_event::Model) -> Result<(), AppError> {
        let repo = CtfEventRepository::new(self.db);
        let role_id = parse_id(row.role_id.as_deref()).map(RoleId::new);
        let channel_id = parse_id(row.channel_id.as_deref()).map(ChannelId::new);

        if let Some(channel_id) = channel_id {
            channel_id
                .edit(
                    &self.http,
                    EditChannel::new().category(Some(self.config.archive_category_id)),
                )
                .await?;

            // Lock the channel for the event role first so the farewell is
            // the last message its members can see but not answer.
            if let Some(role_id) = role_id {
                channel_id
                    .create_permission(
                        &self.http,
                        PermissionOverwrite {
                            allow: Permissions::VIEW_CHANNEL | Permissions::READ_MESSAGE_HISTORY,
                            deny: Permissions::SEND_MESSAGES,
                            kind: PermissionOverwriteType::Role(role_id),
                        },
                    )
                    .await?;
            }

            channel_id
                .send_message(
                    &self.http,
                    CreateMessage::new().content(end_message(&row.title, role_id)),
                )
                .await?;
        }

        if let Some(role_id) = role_id {
            if let Err(err) = self
                .http
                .delete_role(self.config.guild_id, role_id, Some("event archived"))
                .await
            {
                tracing::warn!(
                    event = %row.title,
                    role_id = role_id.get(),
                    error = %err,
                    "could not delete event role, continuing"
                );
            }
        }

        // The role is gone; replace the private overwrites wholesale so the
        // archive is readable by the whole guild and writable by nobody.
        if let Some(channel_id) = channel_id {
            let everyone = RoleId::new(self.config.guild_id.get());
            channel_id
                .edit(
                    &self.http,
                    EditChannel::new().permissions(vec![PermissionOverwrite {
                        allow: Permissions::VIEW_CHANNEL | Permissions::READ_MESSAGE_HISTORY,
                        deny: Permissions::SEND_MESSAGES,
                        kind: PermissionOverwriteType::Role(everyone),
                    }]),
                )
                .await?;
        }

        repo.mark_archived(&row.event_id).await?;
        tracing::info!(event = %row.title, "archived event");
        Ok(())
    }
}

fn end_message(title: &str, role_id: Option<RoleId>) -> String {
    let mention = role_id
        .map(|r| format!("<@&{}> ", r.get()))
        .unwrap_or_default();
    format!(
        "{}**{}** has ended! This channel is now read-only in the archive. Thanks for playing! 🎉",
        mention, title
    )
}

fn parse_id(stored: Option<&str>) -> Option<u64> {
    stored.and_then(|s| s.parse::<u64>().ok())
}
