use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::content::{SaveSolutionDto, TranslationDto},
    service::translation::TranslationPlan,
};

pub struct SolutionRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> SolutionRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn create(&self, dto: &SaveSolutionDto) -> Result<entity::solution::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let solution = entity::solution::ActiveModel {
            slug: ActiveValue::Set(dto.slug.clone()),
            position: ActiveValue::Set(dto.position),
            image_path: ActiveValue::Set(None),
            active: ActiveValue::Set(dto.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        solution.insert(self.conn).await
    }

    pub async fn update_attrs(
        &self,
        solution: entity::solution::Model,
        dto: &SaveSolutionDto,
    ) -> Result<entity::solution::Model, DbErr> {
        let mut solution = solution.into_active_model();

        solution.slug = ActiveValue::Set(dto.slug.clone());
        solution.position = ActiveValue::Set(dto.position);
        solution.active = ActiveValue::Set(dto.active);
        solution.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        solution.update(self.conn).await
    }

    pub async fn set_image_path(
        &self,
        solution: entity::solution::Model,
        image_path: Option<String>,
    ) -> Result<entity::solution::Model, DbErr> {
        let mut solution = solution.into_active_model();

        solution.image_path = ActiveValue::Set(image_path);
        solution.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        solution.update(self.conn).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::solution::Model>, DbErr> {
        entity::prelude::Solution::find_by_id(id).one(self.conn).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::solution::Model>, DbErr> {
        entity::prelude::Solution::find()
            .filter(entity::solution::Column::Slug.eq(slug))
            .one(self.conn)
            .await
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::solution::Model>, DbErr> {
        entity::prelude::Solution::find()
            .filter(entity::solution::Column::Id.is_in(ids.to_vec()))
            .all(self.conn)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::solution::Model>, DbErr> {
        entity::prelude::Solution::find()
            .order_by_asc(entity::solution::Column::Position)
            .order_by_asc(entity::solution::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Solution::delete_by_id(id)
            .exec(self.conn)
            .await
    }

    pub async fn translations(
        &self,
        solution_id: i32,
    ) -> Result<Vec<entity::solution_translation::Model>, DbErr> {
        entity::prelude::SolutionTranslation::find()
            .filter(entity::solution_translation::Column::SolutionId.eq(solution_id))
            .all(self.conn)
            .await
    }

    pub async fn translations_for_solutions(
        &self,
        solution_ids: &[i32],
    ) -> Result<Vec<entity::solution_translation::Model>, DbErr> {
        entity::prelude::SolutionTranslation::find()
            .filter(entity::solution_translation::Column::SolutionId.is_in(solution_ids.to_vec()))
            .all(self.conn)
            .await
    }

    pub async fn insert_translations(
        &self,
        solution_id: i32,
        translations: &[TranslationDto],
    ) -> Result<(), DbErr> {
        let rows = translations
            .iter()
            .map(|t| entity::solution_translation::ActiveModel {
                solution_id: ActiveValue::Set(solution_id),
                language: ActiveValue::Set(t.language.clone()),
                name: ActiveValue::Set(t.name.clone()),
                description: ActiveValue::Set(t.description.clone()),
                ..Default::default()
            });

        entity::prelude::SolutionTranslation::insert_many(rows)
            .exec(self.conn)
            .await?;

        Ok(())
    }

    pub async fn apply_translation_plan(
        &self,
        solution_id: i32,
        plan: TranslationPlan<entity::solution_translation::Model>,
    ) -> Result<(), DbErr> {
        if !plan.insert.is_empty() {
            self.insert_translations(solution_id, &plan.insert).await?;
        }

        for (row, dto) in plan.update {
            let mut row = row.into_active_model();
            row.name = ActiveValue::Set(dto.name.clone());
            row.description = ActiveValue::Set(dto.description.clone());
            row.update(self.conn).await?;
        }

        for row in plan.remove {
            entity::prelude::SolutionTranslation::delete_by_id(row.id)
                .exec(self.conn)
                .await?;
        }

        Ok(())
    }
}
