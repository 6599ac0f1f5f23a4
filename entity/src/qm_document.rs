use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "qm_document")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub file_path: Option<String>,
    pub position: i32,
    pub is_certificate: bool,
    pub active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::qm_document_translation::Entity")]
    QmDocumentTranslation,
}

impl Related<super::qm_document_translation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QmDocumentTranslation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
