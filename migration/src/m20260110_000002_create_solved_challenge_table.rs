use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SolvedChallenge::Table)
                    .if_not_exists()
                    .col(string(SolvedChallenge::ChallengeName))
                    .col(string(SolvedChallenge::UserId))
                    .col(string(SolvedChallenge::Category))
                    .col(string(SolvedChallenge::Difficulty))
                    .col(boolean(SolvedChallenge::FirstBlood).default(false))
                    .col(timestamp_with_time_zone(SolvedChallenge::SolvedAt))
                    .primary_key(
                        Index::create()
                            .col(SolvedChallenge::ChallengeName)
                            .col(SolvedChallenge::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SolvedChallenge::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum SolvedChallenge {
    Table,
    ChallengeName,
    UserId,
    Category,
    Difficulty,
    FirstBlood,
    SolvedAt,
}
