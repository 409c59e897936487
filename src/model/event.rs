use chrono::{DateTime, Utc};

/// A CTFtime calendar event, converted from the API's JSON.
///
/// This is external data; nothing here is persisted verbatim. The bot stores
/// only its own lifecycle record (`entity::ctf_event`) keyed by `id`.
#[derive(Clone, Debug, PartialEq)]
pub struct CtfEvent {
    pub id: u64,
    pub title: String,
    pub start: DateTime<Utc>,
    pub finish: DateTime<Utc>,
    pub weight: f64,
    pub url: Option<String>,
    pub logo: Option<String>,
    pub discord: Option<String>,
    /// The API's `format` field was `"canceled"`. Display-only: a canceled
    /// event still progresses through the lifecycle (observed behavior,
    /// intentionally preserved).
    pub canceled: bool,
}

impl CtfEvent {
    /// Display status for announcement embeds.
    pub fn status(&self, now: DateTime<Utc>) -> EventStatus {
        if self.canceled {
            EventStatus::Canceled
        } else if now < self.start {
            EventStatus::Upcoming
        } else if now <= self.finish {
            EventStatus::Ongoing
        } else {
            EventStatus::Ended
        }
    }

    /// Channel- and role-safe name: spaces replaced, truncated with margin
    /// under Discord's 100-character channel name limit.
    pub fn slug(&self) -> String {
        let mut slug = self.title.replace(' ', "-");
        crate::util::truncate_to_char_boundary(&mut slug, 90);
        slug
    }

    pub fn finished_by(&self, now: DateTime<Utc>) -> bool {
        now > self.finish
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Ended,
    Canceled,
}

impl EventStatus {
    pub fn emoji(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "⏳",
            EventStatus::Ongoing => "🟢",
            EventStatus::Ended => "❌",
            EventStatus::Canceled => "❌",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming!",
            EventStatus::Ongoing => "Ongoing!",
            EventStatus::Ended => "Ended!",
            EventStatus::Canceled => "Canceled!",
        }
    }
}

/// Explicit lifecycle tag persisted per announced event.
///
/// Replaces the presence/absence-of-mapping inference: the stored row says
/// exactly how far the event has progressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    /// Announcement posted, channel/role not yet created.
    Announced,
    /// Channel and role exist; the event is running or waiting to run.
    ChannelCreated,
    /// Channel moved to the archive category, role deleted.
    Archived,
}

impl LifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Announced => "announced",
            LifecycleState::ChannelCreated => "channel_created",
            LifecycleState::Archived => "archived",
        }
    }

    /// Parses the persisted tag. Unknown tags map to `None`; the caller
    /// decides whether that is a corrupt-row error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "announced" => Some(LifecycleState::Announced),
            "channel_created" => Some(LifecycleState::ChannelCreated),
            "archived" => Some(LifecycleState::Archived),
            _ => None,
        }
    }
}
