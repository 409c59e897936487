use sea_orm::entity::prelude::*;

/// Lifecycle record for an announced CTFtime event.
///
/// One row per announced event, keyed by the CTFtime event ID. The `state`
/// column holds the explicit lifecycle tag (`announced`, `channel_created`,
/// `archived`); existence of a row is also the announcement idempotency
/// guard. `channel_id` survives archival, only `role_id` is cleared when the
/// event role is deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ctf_event")]
pub struct Model {
    /// CTFtime event ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: String,
    pub title: String,
    pub state: String,
    /// Announcement message ID (snowflake as text).
    pub message_id: String,
    pub channel_id: Option<String>,
    pub role_id: Option<String>,
    pub announced_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
