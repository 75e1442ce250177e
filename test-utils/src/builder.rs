use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Planet};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Planet)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements (including composite unique keys), run after all tables.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, plus the entity's secondary indexes so `unique_key` constraints
    /// match the migrated schema. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self.indexes
            .extend(schema.create_index_from_entity(entity));
        self
    }

    /// Adds the planet and character catalog tables.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Planet).with_table(Character)
    }

    /// Adds every table needed for favorite operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Planet
    /// - Character
    /// - PlanetFav
    /// - CharacterFav
    ///
    /// along with the composite unique indexes on both favorite tables.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_favorite_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_favorite_tables(self) -> Self {
        self.with_table(User)
            .with_catalog_tables()
            .with_table(PlanetFav)
            .with_table(CharacterFav)
            .with_index(
                Index::create()
                    .name("idx_planet_fav_user_planet")
                    .table(PlanetFav)
                    .col(entity::planet_fav::Column::UserId)
                    .col(entity::planet_fav::Column::PlanetId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_character_fav_user_character")
                    .table(CharacterFav)
                    .col(entity::character_fav::Column::UserId)
                    .col(entity::character_fav::Column::CharacterId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
    }

    /// Adds an index created after all tables, named like its migration counterpart.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
