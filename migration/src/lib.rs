pub use sea_orm_migration::prelude::*;

mod m20260715_000001_market;
mod m20260715_000002_product_group;
mod m20260715_000003_product;
mod m20260715_000004_solution;
mod m20260715_000005_qm_document;
mod m20260715_000006_about_page;
mod m20260715_000007_market_content;
mod m20260715_000008_extra_content;
mod m20260715_000009_catalog;
mod m20260715_000010_admin;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260715_000001_market::Migration),
            Box::new(m20260715_000002_product_group::Migration),
            Box::new(m20260715_000003_product::Migration),
            Box::new(m20260715_000004_solution::Migration),
            Box::new(m20260715_000005_qm_document::Migration),
            Box::new(m20260715_000006_about_page::Migration),
            Box::new(m20260715_000007_market_content::Migration),
            Box::new(m20260715_000008_extra_content::Migration),
            Box::new(m20260715_000009_catalog::Migration),
            Box::new(m20260715_000010_admin::Migration),
        ]
    }
}
