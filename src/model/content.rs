use serde::{Deserialize, Serialize};

/// One localized row of a parent entity.
///
/// `name` doubles as the about page title; `body` is only used by entities
/// that carry long-form localized text.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TranslationDto {
    pub language: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MarketDto {
    pub id: i32,
    pub slug: String,
    pub position: i32,
    pub has_products: bool,
    pub has_solutions: bool,
    pub has_certificates: bool,
    pub image_path: Option<String>,
    pub active: bool,
    /// Full set for admin reads, the single resolved row when a language
    /// was requested. Empty when no translation matched the fallback chain;
    /// clients then fall back to the slug.
    pub translations: Vec<TranslationDto>,
}

#[derive(Clone, Deserialize, utoipa::ToSchema)]
pub struct SaveMarketDto {
    pub slug: String,
    #[serde(default)]
    pub position: i32,
    pub has_products: bool,
    pub has_solutions: bool,
    pub has_certificates: bool,
    #[serde(default = "default_active")]
    pub active: bool,
    pub translations: Vec<TranslationDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProductGroupDto {
    pub id: i32,
    pub slug: String,
    pub position: i32,
    pub image_path: Option<String>,
    pub active: bool,
    pub translations: Vec<TranslationDto>,
}

#[derive(Clone, Deserialize, utoipa::ToSchema)]
pub struct SaveProductGroupDto {
    pub slug: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default = "default_active")]
    pub active: bool,
    pub translations: Vec<TranslationDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub product_group_id: i32,
    pub slug: String,
    pub position: i32,
    pub image_path: Option<String>,
    pub active: bool,
    pub translations: Vec<TranslationDto>,
}

#[derive(Clone, Deserialize, utoipa::ToSchema)]
pub struct SaveProductDto {
    pub product_group_id: i32,
    pub slug: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default = "default_active")]
    pub active: bool,
    pub translations: Vec<TranslationDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SolutionDto {
    pub id: i32,
    pub slug: String,
    pub position: i32,
    pub image_path: Option<String>,
    pub active: bool,
    pub translations: Vec<TranslationDto>,
}

#[derive(Clone, Deserialize, utoipa::ToSchema)]
pub struct SaveSolutionDto {
    pub slug: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default = "default_active")]
    pub active: bool,
    pub translations: Vec<TranslationDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct QmDocumentDto {
    pub id: i32,
    pub file_path: Option<String>,
    pub position: i32,
    pub is_certificate: bool,
    pub active: bool,
    pub translations: Vec<TranslationDto>,
}

#[derive(Clone, Deserialize, utoipa::ToSchema)]
pub struct SaveQmDocumentDto {
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub is_certificate: bool,
    #[serde(default = "default_active")]
    pub active: bool,
    pub translations: Vec<TranslationDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AboutPageDto {
    pub id: i32,
    pub image_path: Option<String>,
    pub translations: Vec<TranslationDto>,
}

#[derive(Clone, Deserialize, utoipa::ToSchema)]
pub struct SaveAboutPageDto {
    pub translations: Vec<TranslationDto>,
}

/// The selection an admin submits when editing which content a market links
/// out to. Reconciled against the stored association rows.
#[derive(Clone, Deserialize, utoipa::ToSchema)]
pub struct MarketSelectionDto {
    #[serde(default)]
    pub product_group_ids: Vec<i32>,
    #[serde(default)]
    pub product_ids: Vec<i32>,
    #[serde(default)]
    pub solution_ids: Vec<i32>,
    #[serde(default)]
    pub include_certificates: bool,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MarketContentDto {
    pub id: i32,
    pub market_id: i32,
    pub content_type: String,
    pub product_group_id: Option<i32>,
    pub product_id: Option<i32>,
    pub solution_id: Option<i32>,
    pub display_name: Option<String>,
    pub target_url: String,
    pub position: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BlockDto {
    pub id: i32,
    pub language: String,
    pub position: i32,
    pub block_type: String,
    pub title: String,
    pub payload: String,
}

#[derive(Clone, Deserialize, utoipa::ToSchema)]
pub struct SaveBlockDto {
    pub language: String,
    /// Appended after the owner's highest position when omitted.
    pub position: Option<i32>,
    pub block_type: String,
    pub title: String,
    pub payload: String,
}

/// One cell of a grouped block row, one per configured language.
#[derive(Clone, Serialize, utoipa::ToSchema)]
pub struct BlockCellDto {
    pub language: String,
    pub block: Option<BlockDto>,
}

/// One display row of the admin block editor: the same logical content slot
/// in every configured language.
#[derive(Clone, Serialize, utoipa::ToSchema)]
pub struct BlockGroupDto {
    pub position: i32,
    pub cells: Vec<BlockCellDto>,
}

#[derive(Clone, Deserialize, utoipa::ToSchema)]
pub struct DeleteBlocksDto {
    pub ids: Vec<i32>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CatalogDto {
    pub id: i32,
    pub product_id: i32,
    pub file_path: String,
    pub translations: Vec<TranslationDto>,
}

fn default_active() -> bool {
    true
}
