use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "about_page")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub image_path: Option<String>,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::about_page_translation::Entity")]
    AboutPageTranslation,
}

impl Related<super::about_page_translation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AboutPageTranslation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
