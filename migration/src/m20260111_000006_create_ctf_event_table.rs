use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CtfEvent::Table)
                    .if_not_exists()
                    .col(string(CtfEvent::EventId).primary_key())
                    .col(string(CtfEvent::Title))
                    .col(string(CtfEvent::State))
                    .col(string(CtfEvent::MessageId))
                    .col(string_null(CtfEvent::ChannelId))
                    .col(string_null(CtfEvent::RoleId))
                    .col(timestamp_with_time_zone(CtfEvent::AnnouncedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CtfEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum CtfEvent {
    Table,
    EventId,
    Title,
    State,
    MessageId,
    ChannelId,
    RoleId,
    AnnouncedAt,
}
