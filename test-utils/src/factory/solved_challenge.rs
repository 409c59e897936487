//! Solved challenge factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for recorded solves.
///
/// Defaults: unique challenge name, category `misc`, difficulty `easy`,
/// no first blood, solved now.
pub struct SolvedChallengeFactory<'a> {
    db: &'a DatabaseConnection,
    challenge_name: String,
    user_id: String,
    category: String,
    difficulty: String,
    first_blood: bool,
}

impl<'a> SolvedChallengeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        Self {
            db,
            challenge_name: format!("challenge-{}", next_id()),
            user_id: user_id.into(),
            category: "misc".to_string(),
            difficulty: "easy".to_string(),
            first_blood: false,
        }
    }

    pub fn challenge_name(mut self, name: impl Into<String>) -> Self {
        self.challenge_name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    pub fn first_blood(mut self, first_blood: bool) -> Self {
        self.first_blood = first_blood;
        self
    }

    pub async fn build(self) -> Result<entity::solved_challenge::Model, DbErr> {
        entity::solved_challenge::ActiveModel {
            challenge_name: ActiveValue::Set(self.challenge_name),
            user_id: ActiveValue::Set(self.user_id),
            category: ActiveValue::Set(self.category),
            difficulty: ActiveValue::Set(self.difficulty),
            first_blood: ActiveValue::Set(self.first_blood),
            solved_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}
