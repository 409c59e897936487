use sea_orm::entity::prelude::*;

/// A team member's cumulative score ledger.
///
/// Rows are created lazily on a member's first recorded solve and removed
/// only by a full scoreboard reset. `points` and `first_bloods` never go
/// below zero; revocations floor at zero instead of underflowing.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    /// Discord user ID (snowflake as text).
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub points: i32,
    pub first_bloods: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
