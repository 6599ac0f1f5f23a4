use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "qm_document_translation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub qm_document_id: i32,
    pub language: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::qm_document::Entity",
        from = "Column::QmDocumentId",
        to = "super::qm_document::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    QmDocument,
}

impl Related<super::qm_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QmDocument.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
