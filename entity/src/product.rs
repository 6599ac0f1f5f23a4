use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_group_id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub position: i32,
    pub image_path: Option<String>,
    pub active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product_group::Entity",
        from = "Column::ProductGroupId",
        to = "super::product_group::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ProductGroup,
    #[sea_orm(has_many = "super::product_translation::Entity")]
    ProductTranslation,
    #[sea_orm(has_many = "super::catalog::Entity")]
    Catalog,
}

impl Related<super::product_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductGroup.def()
    }
}

impl Related<super::product_translation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductTranslation.def()
    }
}

impl Related<super::catalog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Catalog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
