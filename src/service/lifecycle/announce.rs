//! Announcement tick: pick an event, post it, open its channel and role.

use chrono::{DateTime, Datelike, Duration, Utc};
use rand::{distr::Alphanumeric, Rng};
use serenity::all::{
    ChannelType, CreateAllowedMentions, CreateChannel, CreateEmbed, CreateEmbedFooter,
    CreateMessage, EditRole, GuildChannel, PermissionOverwrite, PermissionOverwriteType,
    Permissions, ReactionType, Role, RoleId,
};

use super::{selection, CtfLifecycleService, ANNOUNCE_EMOJI};
use crate::error::AppError;
use crate::model::CtfEvent;

const TOPIC_MAX_LEN: usize = 1024;
const PASSWORD_LEN: usize = 14;

impl CtfLifecycleService<'_> {
    /// Daily announcement tick. Fetches the upcoming window only on
    /// announcement days, picks the slot for today's weekday, and runs the
    /// announce/setup sequence. Announcing an already-announced event is a
    /// no-op, so a re-run after a partial day is safe.
    pub async fn run_announce_tick(&self) -> Result<(), AppError> {
        let now = Utc::now();
        if selection::slot_for_weekday(now.weekday()).is_none() {
            return Ok(());
        }

        let events = self
            .ctftime
            .upcoming_events(now, Duration::days(selection::SELECTION_WINDOW_DAYS))
            .await?;
        let Some(event) = selection::select_for_weekday(events, now.weekday()) else {
            tracing::info!("no candidate event to announce today");
            return Ok(());
        };

        self.announce_and_setup(&event, now).await?;
        Ok(())
    }

    /// Posts the announcement, then creates the event role and private
    /// channel and advances the persisted state. Returns `false` when the
    /// event was already announced.
    ///
    /// The lifecycle row is written immediately after the announcement
    /// message: if channel creation fails the event stays `announced` and
    /// the failure surfaces in the tick log rather than producing a second
    /// announcement.
    pub async fn announce_and_setup(
        &self,
        event: &CtfEvent,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let repo = crate::data::CtfEventRepository::new(self.db);
        let event_id = event.id.to_string();

        if repo.is_announced(&event_id).await? {
            tracing::info!(event = %event.title, "already announced, skipping");
            return Ok(false);
        }

        let message = self
            .config
            .upcoming_ctfs_channel_id
            .send_message(
                &self.http,
                CreateMessage::new()
                    .content("@everyone")
                    .allowed_mentions(CreateAllowedMentions::new().everyone(true))
                    .embed(announcement_embed(event, now)),
            )
            .await?;
        message
            .react(&self.http, ReactionType::Unicode(ANNOUNCE_EMOJI.to_string()))
            .await?;
        repo.create_announced(event, message.id.get()).await?;

        let role = self.create_event_role(event).await?;
        let channel = self.create_event_channel(event, role.id).await?;
        channel
            .id
            .send_message(
                &self.http,
                CreateMessage::new().content(start_message(event, role.id)),
            )
            .await?;
        repo.set_channel_created(&event_id, channel.id.get(), role.id.get())
            .await?;

        tracing::info!(
            event = %event.title,
            channel_id = channel.id.get(),
            role_id = role.id.get(),
            "announced event and opened its channel"
        );
        Ok(true)
    }

    /// Creates the mentionable event role, reusing an existing role of the
    /// same name left over from a previous partial run.
    async fn create_event_role(&self, event: &CtfEvent) -> Result<Role, AppError> {
        let name = event.slug();
        let roles = self.config.guild_id.roles(&self.http).await?;
        if let Some(existing) = roles.values().find(|r| r.name == name) {
            tracing::info!(role = %name, "reusing existing event role");
            return Ok(existing.clone());
        }

        let role = self
            .config
            .guild_id
            .create_role(&self.http, EditRole::new().name(&name).mentionable(true))
            .await?;
        Ok(role)
    }

    /// Creates the private event channel under the running category. Hidden
    /// from @everyone, visible to the event role and to administrator roles.
    /// The topic carries the event link and generated placeholder
    /// credentials.
    async fn create_event_channel(
        &self,
        event: &CtfEvent,
        role_id: RoleId,
    ) -> Result<GuildChannel, AppError> {
        let everyone = RoleId::new(self.config.guild_id.get());
        let mut overwrites = vec![
            PermissionOverwrite {
                allow: Permissions::empty(),
                deny: Permissions::VIEW_CHANNEL,
                kind: PermissionOverwriteType::Role(everyone),
            },
            PermissionOverwrite {
                allow: Permissions::VIEW_CHANNEL
                    | Permissions::SEND_MESSAGES
                    | Permissions::READ_MESSAGE_HISTORY,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Role(role_id),
            },
        ];
        for (id, role) in self.config.guild_id.roles(&self.http).await? {
            if role.permissions.administrator() && id != everyone {
                overwrites.push(PermissionOverwrite {
                    allow: Permissions::VIEW_CHANNEL | Permissions::READ_MESSAGE_HISTORY,
                    deny: Permissions::empty(),
                    kind: PermissionOverwriteType::Role(id),
                });
            }
        }

        let password = generate_placeholder_password(PASSWORD_LEN);
        let topic = channel_topic(
            event,
            &self.config.team_name,
            &self.config.team_email,
            &password,
        );

        let channel = self
            .config
            .guild_id
            .create_channel(
                &self.http,
                CreateChannel::new(event.slug().to_lowercase())
                    .kind(ChannelType::Text)
                    .category(self.config.running_category_id)
                    .topic(topic)
                    .permissions(overwrites),
            )
            .await?;
        Ok(channel)
    }
}

fn announcement_embed(event: &CtfEvent, now: DateTime<Utc>) -> CreateEmbed {
    let status = event.status(now);
    let mut embed = CreateEmbed::new()
        .title(format!("🚩 {}", event.title))
        .colour(0xE74C3C)
        .field(
            "Starts",
            event.start.format("%A, %B %d, %Y at %H:%M UTC").to_string(),
            true,
        )
        .field(
            "Ends",
            event
                .finish
                .format("%A, %B %d, %Y at %H:%M UTC")
                .to_string(),
            true,
        )
        .field("Weight", format!("{:.2}", event.weight), true)
        .field(
            "Status",
            format!("{} {}", status.emoji(), status.label()),
            true,
        )
        .footer(CreateEmbedFooter::new(format!(
            "React with {} to participate and get the event role!",
            ANNOUNCE_EMOJI
        )));
    if let Some(url) = &event.url {
        embed = embed.url(url.clone());
    }
    if let Some(logo) = &event.logo {
        embed = embed.thumbnail(logo.clone());
    }
    embed
}

fn start_message(event: &CtfEvent, role_id: RoleId) -> String {
    format!(
        "<@&{}> The channel for **{}** is open! Login details are in the channel topic. Good luck! 🍀",
        role_id.get(),
        event.title
    )
}

/// Channel topic with the event link and shared placeholder credentials.
/// Discord caps topics at 1024 characters.
fn channel_topic(event: &CtfEvent, team_name: &str, team_email: &str, password: &str) -> String {
    let mut topic = format!(
        "CTF: {} | Link: {} | Team Name: {} | Email: {} | Password: {}",
        event.title,
        event.url.as_deref().unwrap_or("n/a"),
        team_name,
        team_email,
        password,
    );
    if let Some(discord) = &event.discord {
        topic.push_str(" | Event Discord: ");
        topic.push_str(discord);
    }
    crate::util::truncate_to_char_boundary(&mut topic, TOPIC_MAX_LEN);
    topic
}

/// Random alphanumeric placeholder the team replaces with real credentials
/// after registering.
fn generate_placeholder_password(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
