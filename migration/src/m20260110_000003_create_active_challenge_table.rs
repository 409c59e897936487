use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActiveChallenge::Table)
                    .if_not_exists()
                    .col(string(ActiveChallenge::ChallengeName))
                    .col(string(ActiveChallenge::UserId))
                    .col(string(ActiveChallenge::Category))
                    .col(string(ActiveChallenge::ThreadId))
                    .col(timestamp_with_time_zone(ActiveChallenge::StartedAt))
                    .primary_key(
                        Index::create()
                            .col(ActiveChallenge::ChallengeName)
                            .col(ActiveChallenge::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActiveChallenge::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum ActiveChallenge {
    Table,
    ChallengeName,
    UserId,
    Category,
    ThreadId,
    StartedAt,
}
