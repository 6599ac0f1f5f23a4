use sea_orm::entity::prelude::*;

/// A typed, per-language content fragment attached to a solution or the
/// about page. Rows sharing (owner, position) across languages represent one
/// logical content slot; the grouping itself is computed by the service
/// layer, not stored.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "extra_content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_type: OwnerType,
    pub owner_id: i32,
    pub language: String,
    pub position: i32,
    pub block_type: BlockType,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub payload: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum OwnerType {
    #[sea_orm(string_value = "solution")]
    Solution,
    #[sea_orm(string_value = "about_page")]
    AboutPage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum BlockType {
    #[sea_orm(string_value = "text")]
    Text,
    #[sea_orm(string_value = "table")]
    Table,
    #[sea_orm(string_value = "list")]
    List,
    #[sea_orm(string_value = "mixed")]
    Mixed,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
