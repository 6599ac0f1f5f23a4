use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use entity::market_content::ContentType;

/// A desired association row computed by the composition service, before it
/// is persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentRow {
    pub content_type: ContentType,
    pub product_group_id: Option<i32>,
    pub product_id: Option<i32>,
    pub solution_id: Option<i32>,
    pub display_name: Option<String>,
    pub target_url: String,
    pub position: i32,
}

impl ContentRow {
    /// Identity of the association regardless of position or display
    /// attributes: what the row points at.
    pub fn key(&self) -> (ContentType, Option<i32>, Option<i32>, Option<i32>) {
        (
            self.content_type,
            self.product_group_id,
            self.product_id,
            self.solution_id,
        )
    }
}

pub struct MarketContentRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> MarketContentRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn list_by_market(
        &self,
        market_id: i32,
    ) -> Result<Vec<entity::market_content::Model>, DbErr> {
        entity::prelude::MarketContent::find()
            .filter(entity::market_content::Column::MarketId.eq(market_id))
            .order_by_asc(entity::market_content::Column::Position)
            .order_by_asc(entity::market_content::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn insert(
        &self,
        market_id: i32,
        row: &ContentRow,
    ) -> Result<entity::market_content::Model, DbErr> {
        let content = entity::market_content::ActiveModel {
            market_id: ActiveValue::Set(market_id),
            content_type: ActiveValue::Set(row.content_type),
            product_group_id: ActiveValue::Set(row.product_group_id),
            product_id: ActiveValue::Set(row.product_id),
            solution_id: ActiveValue::Set(row.solution_id),
            display_name: ActiveValue::Set(row.display_name.clone()),
            target_url: ActiveValue::Set(row.target_url.clone()),
            position: ActiveValue::Set(row.position),
            ..Default::default()
        };

        content.insert(self.conn).await
    }

    /// Refreshes position and target URL of a kept row. The display-name
    /// override is left untouched so re-saving a selection cannot clear it.
    pub async fn update_existing(
        &self,
        existing: entity::market_content::Model,
        row: &ContentRow,
    ) -> Result<entity::market_content::Model, DbErr> {
        let mut content = existing.into_active_model();

        content.target_url = ActiveValue::Set(row.target_url.clone());
        content.position = ActiveValue::Set(row.position);

        content.update(self.conn).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::MarketContent::delete_by_id(id)
            .exec(self.conn)
            .await?;

        Ok(())
    }
}
