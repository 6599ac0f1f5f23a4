use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "market_content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub market_id: i32,
    pub content_type: ContentType,
    pub product_group_id: Option<i32>,
    pub product_id: Option<i32>,
    pub solution_id: Option<i32>,
    pub display_name: Option<String>,
    pub target_url: String,
    pub position: i32,
}

/// Which kind of entity a market content row points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ContentType {
    #[sea_orm(string_value = "product_group")]
    ProductGroup,
    #[sea_orm(string_value = "product")]
    Product,
    #[sea_orm(string_value = "solution")]
    Solution,
    #[sea_orm(string_value = "certificate")]
    Certificate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::market::Entity",
        from = "Column::MarketId",
        to = "super::market::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Market,
}

impl Related<super::market::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Market.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
