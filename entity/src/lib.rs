pub mod about_page;
pub mod about_page_translation;
pub mod admin;
pub mod catalog;
pub mod catalog_translation;
pub mod extra_content;
pub mod market;
pub mod market_content;
pub mod market_translation;
pub mod product;
pub mod product_group;
pub mod product_group_translation;
pub mod product_translation;
pub mod qm_document;
pub mod qm_document_translation;
pub mod solution;
pub mod solution_translation;

pub mod prelude {
    pub use super::about_page::Entity as AboutPage;
    pub use super::about_page_translation::Entity as AboutPageTranslation;
    pub use super::admin::Entity as Admin;
    pub use super::catalog::Entity as Catalog;
    pub use super::catalog_translation::Entity as CatalogTranslation;
    pub use super::extra_content::Entity as ExtraContent;
    pub use super::market::Entity as Market;
    pub use super::market_content::Entity as MarketContent;
    pub use super::market_translation::Entity as MarketTranslation;
    pub use super::product::Entity as Product;
    pub use super::product_group::Entity as ProductGroup;
    pub use super::product_group_translation::Entity as ProductGroupTranslation;
    pub use super::product_translation::Entity as ProductTranslation;
    pub use super::qm_document::Entity as QmDocument;
    pub use super::qm_document_translation::Entity as QmDocumentTranslation;
    pub use super::solution::Entity as Solution;
    pub use super::solution_translation::Entity as SolutionTranslation;
}
