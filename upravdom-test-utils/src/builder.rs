//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Methods can be chained together, with all operations queued and executed during the
//! final `build()` call.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement},
    DbBackend, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test databases with the property tables and
/// the users table.
pub struct TestBuilder {
    include_property_tables: bool,
    include_user_table: bool,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            include_property_tables: false,
            include_user_table: false,
        }
    }

    /// Add the building, owner, apartment, apartment_info and bill tables.
    ///
    /// Tables are created parents first, together with the unique index on
    /// `(id_building, utility_account)` that the entity definitions cannot express.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_property_tables(mut self) -> Self {
        self.include_property_tables = true;
        self
    }

    /// Add the users table used by Basic authentication.
    pub fn with_user_table(mut self) -> Self {
        self.include_user_table = true;
        self
    }

    /// Build the test setup by creating all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;
        let schema = Schema::new(DbBackend::Sqlite);

        let mut all_tables = Vec::new();
        let mut all_indexes: Vec<IndexCreateStatement> = Vec::new();

        if self.include_property_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Building),
                schema.create_table_from_entity(entity::prelude::Owner),
                schema.create_table_from_entity(entity::prelude::Apartment),
                schema.create_table_from_entity(entity::prelude::ApartmentInfo),
                schema.create_table_from_entity(entity::prelude::Bill),
            ]);

            all_indexes.push(
                Index::create()
                    .name("unique_id_building_utility_account")
                    .table(entity::apartment::Entity)
                    .col(entity::apartment::Column::IdBuilding)
                    .col(entity::apartment::Column::UtilityAccount)
                    .unique()
                    .to_owned(),
            );
        }

        if self.include_user_table {
            all_tables.push(schema.create_table_from_entity(entity::prelude::Users));
        }

        setup.with_statements(all_tables).await?;
        setup.with_statements(all_indexes).await?;

        Ok(setup)
    }
}
