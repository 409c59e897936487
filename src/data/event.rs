//! CTF event lifecycle repository.
//!
//! Persists one row per announced event with an explicit state tag, instead
//! of inferring progress from which ID mappings happen to exist. Row
//! existence doubles as the announcement idempotency guard. Archival clears
//! the role reference but keeps the row and its channel reference for good.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{CtfEvent, LifecycleState};

pub struct CtfEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CtfEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(&self, event_id: &str) -> Result<Option<entity::ctf_event::Model>, DbErr> {
        entity::prelude::CtfEvent::find_by_id(event_id.to_string())
            .one(self.db)
            .await
    }

    /// Looks up the event whose announcement message carries the reaction.
    pub async fn find_by_message_id(
        &self,
        message_id: u64,
    ) -> Result<Option<entity::ctf_event::Model>, DbErr> {
        entity::prelude::CtfEvent::find()
            .filter(entity::ctf_event::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await
    }

    /// Whether the event already has an announcement row. Announcing twice
    /// must be a silent no-op.
    pub async fn is_announced(&self, event_id: &str) -> Result<bool, DbErr> {
        Ok(self.find(event_id).await?.is_some())
    }

    /// Creates the lifecycle row in `Announced` state.
    pub async fn create_announced(
        &self,
        event: &CtfEvent,
        message_id: u64,
    ) -> Result<entity::ctf_event::Model, DbErr> {
        entity::ctf_event::ActiveModel {
            event_id: ActiveValue::Set(event.id.to_string()),
            title: ActiveValue::Set(event.title.clone()),
            state: ActiveValue::Set(LifecycleState::Announced.as_str().to_string()),
            message_id: ActiveValue::Set(message_id.to_string()),
            channel_id: ActiveValue::Set(None),
            role_id: ActiveValue::Set(None),
            announced_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Advances `Announced` → `ChannelCreated`, recording the channel and
    /// role the tick just created.
    pub async fn set_channel_created(
        &self,
        event_id: &str,
        channel_id: u64,
        role_id: u64,
    ) -> Result<(), DbErr> {
        entity::ctf_event::ActiveModel {
            event_id: ActiveValue::Unchanged(event_id.to_string()),
            state: ActiveValue::Set(LifecycleState::ChannelCreated.as_str().to_string()),
            channel_id: ActiveValue::Set(Some(channel_id.to_string())),
            role_id: ActiveValue::Set(Some(role_id.to_string())),
            ..Default::default()
        }
        .update(self.db)
        .await?;
        Ok(())
    }

    /// Events the archival sweep still has to look at.
    pub async fn all_unarchived(&self) -> Result<Vec<entity::ctf_event::Model>, DbErr> {
        entity::prelude::CtfEvent::find()
            .filter(entity::ctf_event::Column::State.ne(LifecycleState::Archived.as_str()))
            .order_by_asc(entity::ctf_event::Column::EventId)
            .all(self.db)
            .await
    }

    /// Marks the event archived and drops the role reference. The channel
    /// reference is deliberately kept (archived channels stay mapped).
    pub async fn mark_archived(&self, event_id: &str) -> Result<(), DbErr> {
        entity::ctf_event::ActiveModel {
            event_id: ActiveValue::Unchanged(event_id.to_string()),
            state: ActiveValue::Set(LifecycleState::Archived.as_str().to_string()),
            role_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .update(self.db)
        .await?;
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::CtfEvent::find().count(self.db).await
    }
}
