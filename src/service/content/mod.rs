//! Content services: CRUD over parent entities and their translations,
//! market content composition and extra content blocks.

pub mod about;
pub mod catalog;
pub mod composition;
pub mod extra_content;
pub mod market;
pub mod product;
pub mod product_group;
pub mod qm_document;
pub mod solution;

pub use about::AboutPageService;
pub use catalog::CatalogService;
pub use composition::MarketCompositionService;
pub use extra_content::ExtraContentService;
pub use market::MarketService;
pub use product::ProductService;
pub use product_group::ProductGroupService;
pub use qm_document::QmDocumentService;
pub use solution::SolutionService;
