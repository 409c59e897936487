//! Solved challenge repository.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::model::Category;

pub struct SolveRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SolveRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        user_id: &str,
        challenge_name: &str,
    ) -> Result<Option<entity::solved_challenge::Model>, DbErr> {
        entity::prelude::SolvedChallenge::find()
            .filter(entity::solved_challenge::Column::ChallengeName.eq(challenge_name))
            .filter(entity::solved_challenge::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// All solves, most recent first.
    pub async fn list_all(&self) -> Result<Vec<entity::solved_challenge::Model>, DbErr> {
        entity::prelude::SolvedChallenge::find()
            .order_by_desc(entity::solved_challenge::Column::SolvedAt)
            .all(self.db)
            .await
    }

    pub async fn count_by_user(&self, user_id: &str) -> Result<u64, DbErr> {
        entity::prelude::SolvedChallenge::find()
            .filter(entity::solved_challenge::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    pub async fn count_by_user_in_category(
        &self,
        user_id: &str,
        category: Category,
    ) -> Result<u64, DbErr> {
        entity::prelude::SolvedChallenge::find()
            .filter(entity::solved_challenge::Column::UserId.eq(user_id))
            .filter(entity::solved_challenge::Column::Category.eq(category.as_str()))
            .count(self.db)
            .await
    }

    pub async fn count_first_bloods_by_user(&self, user_id: &str) -> Result<u64, DbErr> {
        entity::prelude::SolvedChallenge::find()
            .filter(entity::solved_challenge::Column::UserId.eq(user_id))
            .filter(entity::solved_challenge::Column::FirstBlood.eq(true))
            .count(self.db)
            .await
    }

    /// Distinct category keys that have at least one recorded solve.
    pub async fn solved_categories(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::SolvedChallenge::find()
            .select_only()
            .column(entity::solved_challenge::Column::Category)
            .distinct()
            .order_by_asc(entity::solved_challenge::Column::Category)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
