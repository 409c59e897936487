//! CTF event participation repository.
//!
//! Append-only set membership: a row is written when a member reacts to an
//! announcement and is never removed when they un-react. Role membership is
//! revoked separately; the asymmetry is observed behavior and kept.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct ParticipationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records participation; re-reacting is a no-op.
    pub async fn record(&self, user_id: &str, event_id: &str) -> Result<(), DbErr> {
        entity::prelude::CtfParticipation::insert(entity::ctf_participation::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            event_id: ActiveValue::Set(event_id.to_string()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::ctf_participation::Column::UserId,
                entity::ctf_participation::Column::EventId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;
        Ok(())
    }

    /// Event IDs a member has opted into, in insertion-key order.
    pub async fn events_for_user(&self, user_id: &str) -> Result<Vec<String>, DbErr> {
        let rows = entity::prelude::CtfParticipation::find()
            .filter(entity::ctf_participation::Column::UserId.eq(user_id))
            .order_by_asc(entity::ctf_participation::Column::EventId)
            .all(self.db)
            .await?;
        Ok(rows.into_iter().map(|row| row.event_id).collect())
    }
}
