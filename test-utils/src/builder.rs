use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Use the builder pattern to add entity tables,
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Estado, Cidade};
///
/// let test = TestBuilder::new()
///     .with_table(Estado)
///     .with_table(Cidade)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in the
    /// order they were added.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. Chain multiple calls to add multiple
    /// tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the geographic hierarchy tables: Estado, Cidade, Unidade, and
    /// Setor.
    ///
    /// Use this when testing sector-level functionality that needs the full
    /// reference chain but no motorcycles.
    pub fn with_geo_tables(self) -> Self {
        self.with_table(Estado)
            .with_table(Cidade)
            .with_table(Unidade)
            .with_table(Setor)
    }

    /// Adds the geographic hierarchy plus the Moto table.
    ///
    /// Most motorcycle-adjacent resources reference a motorcycle, which in
    /// turn references a sector, so this is the common baseline for their
    /// tests.
    pub fn with_moto_tables(self) -> Self {
        self.with_geo_tables().with_table(Moto)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_moto_tables()
            .with_table(Defeito)
            .with_table(DefeitoMoto)
            .with_table(Manutencao)
            .with_table(HistoricoManutencao)
            .with_table(Localizacao)
            .with_table(Lora)
            .with_table(Rfid)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all
    /// CREATE TABLE statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context with database and tables
    /// - `Err(TestError::Database)` - Failed to connect or create tables
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
