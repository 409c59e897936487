use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (in dependency order), then call
/// `build()` to connect to an in-memory SQLite database with those tables
/// created.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, SolvedChallenge};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(SolvedChallenge)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables backing the scoring engine:
    /// User, SolvedChallenge, ActiveChallenge, CtfParticipation.
    ///
    /// Use this when testing solve/revoke/leaderboard functionality.
    pub fn with_scoring_tables(self) -> Self {
        self.with_table(User)
            .with_table(SolvedChallenge)
            .with_table(ActiveChallenge)
            .with_table(CtfParticipation)
    }

    /// Adds every table the bot uses. Equivalent to `with_scoring_tables()`
    /// plus BotConfig and CtfEvent.
    pub fn with_bot_tables(self) -> Self {
        self.with_scoring_tables()
            .with_table(BotConfig)
            .with_table(CtfEvent)
    }

    /// Builds and initializes the test context with configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
