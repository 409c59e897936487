use sea_orm::entity::prelude::*;

/// A recorded challenge solve.
///
/// Identity is the (challenge_name, user_id) pair: a member may record a
/// given challenge name at most once. Deleting a row (revocation) must be
/// paired with reversing the user's ledger in the same transaction.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "solved_challenge")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub challenge_name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub category: String,
    pub difficulty: String,
    pub first_blood: bool,
    pub solved_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
