//! Test context: an in-memory SQLite database plus a throwaway uploads
//! directory.

use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection,
};
use tempfile::TempDir;

use crate::{error::TestError, fixtures::content::ContentFixtures};

/// Result of [`crate::TestBuilder::build`].
///
/// Holds the database connection and a temporary directory to use as the
/// uploads root; both are dropped with the context.
pub struct TestContext {
    pub db: DatabaseConnection,
    pub upload_dir: TempDir,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;
        let upload_dir = TempDir::new()?;

        Ok(TestContext { db, upload_dir })
    }

    pub(crate) async fn with_tables(
        &self,
        tables: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in tables {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub(crate) async fn with_unique_translation_indexes(&self) -> Result<(), TestError> {
        // Schema::create_table_from_entity cannot express composite unique
        // indexes, so the (parent, language) invariant is added here the
        // same way the migrations do it.
        let statements = [
            "CREATE UNIQUE INDEX idx_market_translation_market_id_language \
             ON market_translation (market_id, language)",
            "CREATE UNIQUE INDEX idx_product_group_translation_product_group_id_language \
             ON product_group_translation (product_group_id, language)",
            "CREATE UNIQUE INDEX idx_product_translation_product_id_language \
             ON product_translation (product_id, language)",
            "CREATE UNIQUE INDEX idx_solution_translation_solution_id_language \
             ON solution_translation (solution_id, language)",
            "CREATE UNIQUE INDEX idx_qm_document_translation_qm_document_id_language \
             ON qm_document_translation (qm_document_id, language)",
            "CREATE UNIQUE INDEX idx_about_page_translation_about_page_id_language \
             ON about_page_translation (about_page_id, language)",
            "CREATE UNIQUE INDEX idx_catalog_translation_catalog_id_language \
             ON catalog_translation (catalog_id, language)",
        ];

        for sql in statements {
            self.db.execute_unprepared(sql).await?;
        }

        Ok(())
    }

    /// Fixture helpers for inserting content rows.
    pub fn content(&self) -> ContentFixtures<'_> {
        ContentFixtures::new(&self.db)
    }
}
