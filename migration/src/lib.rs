pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_user_table;
mod m20260110_000002_create_solved_challenge_table;
mod m20260110_000003_create_active_challenge_table;
mod m20260110_000004_create_ctf_participation_table;
mod m20260110_000005_create_bot_config_table;
mod m20260111_000006_create_ctf_event_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_user_table::Migration),
            Box::new(m20260110_000002_create_solved_challenge_table::Migration),
            Box::new(m20260110_000003_create_active_challenge_table::Migration),
            Box::new(m20260110_000004_create_ctf_participation_table::Migration),
            Box::new(m20260110_000005_create_bot_config_table::Migration),
            Box::new(m20260111_000006_create_ctf_event_table::Migration),
        ]
    }
}
