use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "solution")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
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
    #[sea_orm(has_many = "super::solution_translation::Entity")]
    SolutionTranslation,
}

impl Related<super::solution_translation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SolutionTranslation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
