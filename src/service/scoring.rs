//! Scoring engine: the point table and the transactional solve ledger.
//!
//! Every multi-step ledger write (record, revoke, reset) runs inside one
//! SeaORM transaction: either all of the solved-row insert, ledger update,
//! and active-row delete apply, or none do. SQLite serializes writers, so
//! concurrent solve/revoke calls for the same user cannot produce lost
//! updates.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, TransactionTrait,
};
use std::str::FromStr;

use crate::data::{ParticipationRepository, SolveRepository, UserRepository};
use crate::error::AppError;
use crate::model::{Category, Difficulty, ProfileStats, ScoreboardEntry};

/// Points awarded for a solve. Base: easy=10, medium=25, hard=40.
/// First blood adds (not multiplies) easy=+10, medium=+15, hard=+20.
pub fn points_for(difficulty: Difficulty, first_blood: bool) -> i32 {
    let base = match difficulty {
        Difficulty::Easy => 10,
        Difficulty::Medium => 25,
        Difficulty::Hard => 40,
    };
    let bonus = if first_blood {
        match difficulty {
            Difficulty::Easy => 10,
            Difficulty::Medium => 15,
            Difficulty::Hard => 20,
        }
    } else {
        0
    };
    base + bonus
}

/// What `record_solve` did, for the command layer's messaging.
#[derive(Clone, Copy, Debug)]
pub struct SolveOutcome {
    pub points_awarded: i32,
    pub total_points: i32,
    pub total_first_bloods: i32,
    /// True when this was the member's first solve in the category, which
    /// triggers the category role congratulations.
    pub first_solve_in_category: bool,
}

pub struct ScoringService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScoringService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a solve: inserts the solved row, credits the ledger (creating
    /// the user lazily), and removes any matching active challenge — one
    /// atomic unit.
    ///
    /// # Errors
    /// - `DuplicateSolve` if this (challenge, user) pair is already recorded
    pub async fn record_solve(
        &self,
        user_id: &str,
        challenge_name: &str,
        category: Category,
        difficulty: Difficulty,
        first_blood: bool,
    ) -> Result<SolveOutcome, AppError> {
        let txn = self.db.begin().await?;

        let existing = entity::prelude::SolvedChallenge::find()
            .filter(entity::solved_challenge::Column::ChallengeName.eq(challenge_name))
            .filter(entity::solved_challenge::Column::UserId.eq(user_id))
            .one(&txn)
            .await?;
        if existing.is_some() {
            // Transaction rolls back on drop.
            return Err(AppError::DuplicateSolve(challenge_name.to_string()));
        }

        let points = points_for(difficulty, first_blood);

        entity::solved_challenge::ActiveModel {
            challenge_name: ActiveValue::Set(challenge_name.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            category: ActiveValue::Set(category.as_str().to_string()),
            difficulty: ActiveValue::Set(difficulty.as_str().to_string()),
            first_blood: ActiveValue::Set(first_blood),
            solved_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        let fb_delta = i32::from(first_blood);
        let (total_points, total_first_bloods) =
            match entity::prelude::User::find_by_id(user_id.to_string())
                .one(&txn)
                .await?
            {
                Some(user) => {
                    let totals = (user.points + points, user.first_bloods + fb_delta);
                    let mut active: entity::user::ActiveModel = user.into();
                    active.points = ActiveValue::Set(totals.0);
                    active.first_bloods = ActiveValue::Set(totals.1);
                    active.update(&txn).await?;
                    totals
                }
                None => {
                    entity::user::ActiveModel {
                        user_id: ActiveValue::Set(user_id.to_string()),
                        points: ActiveValue::Set(points),
                        first_bloods: ActiveValue::Set(fb_delta),
                    }
                    .insert(&txn)
                    .await?;
                    (points, fb_delta)
                }
            };

        entity::prelude::ActiveChallenge::delete_many()
            .filter(entity::active_challenge::Column::ChallengeName.eq(challenge_name))
            .filter(entity::active_challenge::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        let category_solves = entity::prelude::SolvedChallenge::find()
            .filter(entity::solved_challenge::Column::UserId.eq(user_id))
            .filter(entity::solved_challenge::Column::Category.eq(category.as_str()))
            .count(&txn)
            .await?;

        txn.commit().await?;

        Ok(SolveOutcome {
            points_awarded: points,
            total_points,
            total_first_bloods,
            first_solve_in_category: category_solves == 1,
        })
    }

    /// Revokes a recorded solve: subtracts the same point value (computed
    /// from the stored difficulty and first-blood flag), floors points and
    /// first bloods at zero, and deletes the solved row — one atomic unit.
    ///
    /// # Errors
    /// - `NotFound` if no such solve is recorded for the user
    pub async fn revoke_solve(&self, user_id: &str, challenge_name: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let solve = entity::prelude::SolvedChallenge::find()
            .filter(entity::solved_challenge::Column::ChallengeName.eq(challenge_name))
            .filter(entity::solved_challenge::Column::UserId.eq(user_id))
            .one(&txn)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Challenge `{}` not found in your solved list.",
                    challenge_name
                ))
            })?;

        // Stored difficulties went through validation; a row that fails to
        // parse anyway contributes zero points.
        let points = Difficulty::from_str(&solve.difficulty)
            .map(|d| points_for(d, solve.first_blood))
            .unwrap_or(0);
        let fb_delta = i32::from(solve.first_blood);

        entity::prelude::SolvedChallenge::delete_many()
            .filter(entity::solved_challenge::Column::ChallengeName.eq(challenge_name))
            .filter(entity::solved_challenge::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        if let Some(user) = entity::prelude::User::find_by_id(user_id.to_string())
            .one(&txn)
            .await?
        {
            let new_points = (user.points - points).max(0);
            let new_fbs = (user.first_bloods - fb_delta).max(0);
            let mut active: entity::user::ActiveModel = user.into();
            active.points = ActiveValue::Set(new_points);
            active.first_bloods = ActiveValue::Set(new_fbs);
            active.update(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    pub async fn leaderboard(&self, limit: u64) -> Result<Vec<ScoreboardEntry>, AppError> {
        Ok(UserRepository::new(self.db).leaderboard(limit).await?)
    }

    /// Aggregated stats for one member.
    ///
    /// # Errors
    /// - `NotFound` if the member has no ledger row yet
    pub async fn profile(&self, user_id: &str) -> Result<ProfileStats, AppError> {
        let users = UserRepository::new(self.db);
        let solves = SolveRepository::new(self.db);
        let participation = ParticipationRepository::new(self.db);

        let user = users
            .find(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No data recorded for <@{}>!", user_id)))?;

        let rank = users.rank_of(user_id).await?.unwrap_or(0);
        let solve_count = solves.count_by_user(user_id).await?;
        let first_blood_solves = solves.count_first_bloods_by_user(user_id).await?;

        let mut solves_by_category = std::collections::HashMap::new();
        for category in Category::ALL {
            let count = solves.count_by_user_in_category(user_id, category).await?;
            solves_by_category.insert(category.as_str().to_string(), count);
        }

        let participated_events = participation.events_for_user(user_id).await?;

        Ok(ProfileStats {
            user_id: user.user_id,
            points: user.points,
            first_bloods: user.first_bloods,
            rank,
            solves: solve_count,
            first_blood_solves,
            solves_by_category,
            participated_events,
        })
    }

    /// Full reset: clears users, solved challenges, active challenges, and
    /// participation in one transaction. Admin-gated at the command layer.
    pub async fn reset_all(&self) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        entity::prelude::User::delete_many().exec(&txn).await?;
        entity::prelude::SolvedChallenge::delete_many()
            .exec(&txn)
            .await?;
        entity::prelude::ActiveChallenge::delete_many()
            .exec(&txn)
            .await?;
        entity::prelude::CtfParticipation::delete_many()
            .exec(&txn)
            .await?;
        txn.commit().await?;
        Ok(())
    }
}
