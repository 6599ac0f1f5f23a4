use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "about_page_translation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub about_page_id: i32,
    pub language: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub body: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::about_page::Entity",
        from = "Column::AboutPageId",
        to = "super::about_page::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AboutPage,
}

impl Related<super::about_page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AboutPage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
