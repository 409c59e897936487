//! CTF event lifecycle row factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for lifecycle rows.
///
/// Defaults: unique event and message IDs, state `channel_created`, a
/// channel and role attached.
pub struct CtfEventFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: String,
    title: String,
    state: String,
    message_id: String,
    channel_id: Option<String>,
    role_id: Option<String>,
}

impl<'a> CtfEventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            event_id: id.to_string(),
            title: format!("Test CTF {}", id),
            state: "channel_created".to_string(),
            message_id: (9000000 + id).to_string(),
            channel_id: Some((8000000 + id).to_string()),
            role_id: Some((7000000 + id).to_string()),
        }
    }

    pub fn event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = event_id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    pub fn channel_id(mut self, channel_id: Option<String>) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn role_id(mut self, role_id: Option<String>) -> Self {
        self.role_id = role_id;
        self
    }

    pub async fn build(self) -> Result<entity::ctf_event::Model, DbErr> {
        entity::ctf_event::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            title: ActiveValue::Set(self.title),
            state: ActiveValue::Set(self.state),
            message_id: ActiveValue::Set(self.message_id),
            channel_id: ActiveValue::Set(self.channel_id),
            role_id: ActiveValue::Set(self.role_id),
            announced_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}
