use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_group_translation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_group_id: i32,
    pub language: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
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
}

impl Related<super::product_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
