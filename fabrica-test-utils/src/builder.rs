//! Declarative test environment builder.
//!
//! Configure tables and fixtures with chained calls, then `build()` to get
//! a [`TestContext`]. Without `with_content_tables` the database starts
//! empty, which is how error paths for missing tables are exercised.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_content_tables: bool,
    admins: Vec<(String, String)>, // (username, password)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_content_tables: false,
            admins: Vec::new(),
        }
    }

    /// Create every content table plus the per-language unique indexes the
    /// migrations add in production.
    pub fn with_content_tables(mut self) -> Self {
        self.include_content_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queue an admin account with an argon2-hashed password.
    pub fn with_admin(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.admins.push((username.into(), password.into()));
        self
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_content_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Market),
                schema.create_table_from_entity(entity::prelude::MarketTranslation),
                schema.create_table_from_entity(entity::prelude::MarketContent),
                schema.create_table_from_entity(entity::prelude::ProductGroup),
                schema.create_table_from_entity(entity::prelude::ProductGroupTranslation),
                schema.create_table_from_entity(entity::prelude::Product),
                schema.create_table_from_entity(entity::prelude::ProductTranslation),
                schema.create_table_from_entity(entity::prelude::Solution),
                schema.create_table_from_entity(entity::prelude::SolutionTranslation),
                schema.create_table_from_entity(entity::prelude::QmDocument),
                schema.create_table_from_entity(entity::prelude::QmDocumentTranslation),
                schema.create_table_from_entity(entity::prelude::AboutPage),
                schema.create_table_from_entity(entity::prelude::AboutPageTranslation),
                schema.create_table_from_entity(entity::prelude::ExtraContent),
                schema.create_table_from_entity(entity::prelude::Catalog),
                schema.create_table_from_entity(entity::prelude::CatalogTranslation),
                schema.create_table_from_entity(entity::prelude::Admin),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        if self.include_content_tables {
            setup.with_unique_translation_indexes().await?;
        }

        for (username, password) in self.admins {
            setup.content().insert_admin(&username, &password).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_creates_content_tables() {
        let result = TestBuilder::new().with_content_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_chains_fixtures() {
        let test = TestBuilder::new()
            .with_content_tables()
            .with_admin("editor", "hunter2")
            .build()
            .await
            .unwrap();

        let fixture = test.content().insert_market("automotive").await;
        assert!(fixture.is_ok());
    }
}
