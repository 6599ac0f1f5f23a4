use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "market")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub position: i32,
    pub has_products: bool,
    pub has_solutions: bool,
    pub has_certificates: bool,
    pub image_path: Option<String>,
    pub active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::market_translation::Entity")]
    MarketTranslation,
    #[sea_orm(has_many = "super::market_content::Entity")]
    MarketContent,
}

impl Related<super::market_translation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MarketTranslation.def()
    }
}

impl Related<super::market_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MarketContent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
