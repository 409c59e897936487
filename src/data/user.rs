//! User ledger repository.
//!
//! Reads of the per-user point ledger and the ranked leaderboard. Writes that
//! touch the ledger together with solve rows are transactional and live in
//! `service::scoring`.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::model::ScoreboardEntry;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(&self, user_id: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await
    }

    /// Ranked scoreboard rows: points descending, ties broken by ascending
    /// user ID so ordering is deterministic, joined with each user's solve
    /// count.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of rows to return
    pub async fn leaderboard(&self, limit: u64) -> Result<Vec<ScoreboardEntry>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::Points)
            .order_by_asc(entity::user::Column::UserId)
            .limit(limit)
            .all(self.db)
            .await?;

        let mut entries = Vec::with_capacity(users.len());
        for user in users {
            let solves = entity::prelude::SolvedChallenge::find()
                .filter(entity::solved_challenge::Column::UserId.eq(&user.user_id))
                .count(self.db)
                .await?;
            entries.push(ScoreboardEntry {
                user_id: user.user_id,
                solves,
                points: user.points,
                first_bloods: user.first_bloods,
            });
        }
        Ok(entries)
    }

    /// 1-based rank of a user under the leaderboard ordering, or `None` if
    /// the user has no ledger row.
    pub async fn rank_of(&self, user_id: &str) -> Result<Option<u64>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::Points)
            .order_by_asc(entity::user::Column::UserId)
            .all(self.db)
            .await?;

        Ok(users
            .iter()
            .position(|u| u.user_id == user_id)
            .map(|idx| idx as u64 + 1))
    }
}
