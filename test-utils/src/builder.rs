use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

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
/// use entity::prelude::{Park, Trail};
///
/// let test = TestBuilder::new()
///     .with_table(Park)
///     .with_table(Trail)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for reservation operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Park
    /// - Trail
    /// - Reservation
    ///
    /// Use this when testing booking, availability, or lifecycle functionality
    /// that doesn't involve visit reports. For report tests, use
    /// `with_report_tables()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_reservation_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_reservation_tables(self) -> Self {
        self.with_table(User)
            .with_table(Park)
            .with_table(Trail)
            .with_table(Reservation)
    }

    /// Adds all tables required for visit report operations.
    ///
    /// Equivalent to `with_reservation_tables()` followed by
    /// `with_table(VisitReport)`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_report_tables(self) -> Self {
        self.with_reservation_tables().with_table(VisitReport)
    }

    /// Builds the configured test context.
    ///
    /// Creates the in-memory database connection and executes all configured
    /// CREATE TABLE statements in order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test context
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
