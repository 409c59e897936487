//! Active (claimed-but-unsolved) challenge repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::Category;

pub struct ActiveChallengeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActiveChallengeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        user_id: &str,
        challenge_name: &str,
    ) -> Result<Option<entity::active_challenge::Model>, DbErr> {
        entity::prelude::ActiveChallenge::find()
            .filter(entity::active_challenge::Column::ChallengeName.eq(challenge_name))
            .filter(entity::active_challenge::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Records a claimed challenge with its discussion thread.
    pub async fn create(
        &self,
        user_id: &str,
        challenge_name: &str,
        category: Category,
        thread_id: u64,
    ) -> Result<entity::active_challenge::Model, DbErr> {
        entity::active_challenge::ActiveModel {
            challenge_name: ActiveValue::Set(challenge_name.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            category: ActiveValue::Set(category.as_str().to_string()),
            thread_id: ActiveValue::Set(thread_id.to_string()),
            started_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// All claimed challenges, oldest first.
    pub async fn list_all(&self) -> Result<Vec<entity::active_challenge::Model>, DbErr> {
        entity::prelude::ActiveChallenge::find()
            .order_by_asc(entity::active_challenge::Column::StartedAt)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, user_id: &str, challenge_name: &str) -> Result<(), DbErr> {
        entity::prelude::ActiveChallenge::delete_many()
            .filter(entity::active_challenge::Column::ChallengeName.eq(challenge_name))
            .filter(entity::active_challenge::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
