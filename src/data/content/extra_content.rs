use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use entity::extra_content::{BlockType, OwnerType};

pub struct ExtraContentRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ExtraContentRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::extra_content::Model>, DbErr> {
        entity::prelude::ExtraContent::find_by_id(id)
            .one(self.conn)
            .await
    }

    /// All blocks of one owner, ordered by position for grouping.
    pub async fn list_by_owner(
        &self,
        owner_type: OwnerType,
        owner_id: i32,
    ) -> Result<Vec<entity::extra_content::Model>, DbErr> {
        entity::prelude::ExtraContent::find()
            .filter(entity::extra_content::Column::OwnerType.eq(owner_type))
            .filter(entity::extra_content::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::extra_content::Column::Position)
            .order_by_asc(entity::extra_content::Column::Id)
            .all(self.conn)
            .await
    }

    /// Highest used position for an owner, for appending new slots.
    pub async fn max_position(
        &self,
        owner_type: OwnerType,
        owner_id: i32,
    ) -> Result<Option<i32>, DbErr> {
        let blocks = self.list_by_owner(owner_type, owner_id).await?;

        Ok(blocks.iter().map(|block| block.position).max())
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        &self,
        owner_type: OwnerType,
        owner_id: i32,
        language: &str,
        position: i32,
        block_type: BlockType,
        title: &str,
        payload: &str,
    ) -> Result<entity::extra_content::Model, DbErr> {
        let block = entity::extra_content::ActiveModel {
            owner_type: ActiveValue::Set(owner_type),
            owner_id: ActiveValue::Set(owner_id),
            language: ActiveValue::Set(language.to_string()),
            position: ActiveValue::Set(position),
            block_type: ActiveValue::Set(block_type),
            title: ActiveValue::Set(title.to_string()),
            payload: ActiveValue::Set(payload.to_string()),
            ..Default::default()
        };

        block.insert(self.conn).await
    }

    pub async fn update(
        &self,
        block: entity::extra_content::Model,
        block_type: BlockType,
        title: &str,
        payload: &str,
    ) -> Result<entity::extra_content::Model, DbErr> {
        let mut block = block.into_active_model();

        block.block_type = ActiveValue::Set(block_type);
        block.title = ActiveValue::Set(title.to_string());
        block.payload = ActiveValue::Set(payload.to_string());

        block.update(self.conn).await
    }

    pub async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::ExtraContent::delete_many()
            .filter(entity::extra_content::Column::Id.is_in(ids.to_vec()))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every block of an owner; called inside the owner's delete
    /// transaction.
    pub async fn delete_by_owner(
        &self,
        owner_type: OwnerType,
        owner_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::ExtraContent::delete_many()
            .filter(entity::extra_content::Column::OwnerType.eq(owner_type))
            .filter(entity::extra_content::Column::OwnerId.eq(owner_id))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use entity::extra_content::{BlockType, OwnerType};
    use fabrica_test_utils::{TestBuilder, TestError};

    use crate::data::content::ExtraContentRepository;

    /// Blocks list in position order regardless of insertion order
    #[tokio::test]
    async fn list_orders_by_position() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let repo = ExtraContentRepository::new(&test.db);

        repo.insert(OwnerType::Solution, 1, "tr", 2, BlockType::Text, "b", "x")
            .await?;
        repo.insert(OwnerType::Solution, 1, "tr", 1, BlockType::Text, "a", "x")
            .await?;

        let blocks = repo.list_by_owner(OwnerType::Solution, 1).await?;

        assert_eq!(blocks[0].position, 1);
        assert_eq!(blocks[1].position, 2);

        Ok(())
    }

    /// Owner-scoped delete does not touch other owners' blocks
    #[tokio::test]
    async fn delete_by_owner_is_scoped() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let repo = ExtraContentRepository::new(&test.db);

        repo.insert(OwnerType::Solution, 1, "tr", 1, BlockType::Text, "a", "x")
            .await?;
        repo.insert(OwnerType::Solution, 2, "tr", 1, BlockType::Text, "b", "x")
            .await?;
        repo.insert(OwnerType::AboutPage, 1, "tr", 1, BlockType::Text, "c", "x")
            .await?;

        let removed = repo.delete_by_owner(OwnerType::Solution, 1).await?;

        assert_eq!(removed, 1);
        assert_eq!(repo.list_by_owner(OwnerType::Solution, 2).await?.len(), 1);
        assert_eq!(repo.list_by_owner(OwnerType::AboutPage, 1).await?.len(), 1);

        Ok(())
    }
}
