use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CtfParticipation::Table)
                    .if_not_exists()
                    .col(string(CtfParticipation::UserId))
                    .col(string(CtfParticipation::EventId))
                    .primary_key(
                        Index::create()
                            .col(CtfParticipation::UserId)
                            .col(CtfParticipation::EventId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CtfParticipation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum CtfParticipation {
    Table,
    UserId,
    EventId,
}
