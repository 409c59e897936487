use sea_orm::entity::prelude::*;

/// A claimed-but-unsolved challenge with its discussion thread.
///
/// Removed when the matching solve is recorded. Nothing requires a row to
/// exist before a solve is recorded; a solve without a prior `trying` is
/// valid.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "active_challenge")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub challenge_name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub category: String,
    /// Discord thread ID for the discussion thread (snowflake as text).
    pub thread_id: String,
    pub started_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
