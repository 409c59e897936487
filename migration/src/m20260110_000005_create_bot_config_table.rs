use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BotConfig::Table)
                    .if_not_exists()
                    .col(string(BotConfig::Key).primary_key())
                    .col(string(BotConfig::Value))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BotConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum BotConfig {
    Table,
    Key,
    Value,
}
