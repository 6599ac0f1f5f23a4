//! Fixture helpers inserting content rows directly through the entity
//! layer, without going through the application services.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct ContentFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_market(&self, slug: &str) -> Result<entity::market::Model, TestError> {
        let now = Utc::now().naive_utc();

        let market = entity::market::ActiveModel {
            slug: ActiveValue::Set(slug.to_string()),
            position: ActiveValue::Set(0),
            has_products: ActiveValue::Set(true),
            has_solutions: ActiveValue::Set(true),
            has_certificates: ActiveValue::Set(false),
            image_path: ActiveValue::Set(None),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(market.insert(self.db).await?)
    }

    pub async fn insert_market_translation(
        &self,
        market_id: i32,
        language: &str,
        name: &str,
    ) -> Result<entity::market_translation::Model, TestError> {
        let translation = entity::market_translation::ActiveModel {
            market_id: ActiveValue::Set(market_id),
            language: ActiveValue::Set(language.to_string()),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(None),
            ..Default::default()
        };

        Ok(translation.insert(self.db).await?)
    }

    pub async fn insert_product_group(
        &self,
        slug: &str,
    ) -> Result<entity::product_group::Model, TestError> {
        let now = Utc::now().naive_utc();

        let group = entity::product_group::ActiveModel {
            slug: ActiveValue::Set(slug.to_string()),
            position: ActiveValue::Set(0),
            image_path: ActiveValue::Set(None),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(group.insert(self.db).await?)
    }

    pub async fn insert_product(
        &self,
        product_group_id: i32,
        slug: &str,
    ) -> Result<entity::product::Model, TestError> {
        let now = Utc::now().naive_utc();

        let product = entity::product::ActiveModel {
            product_group_id: ActiveValue::Set(product_group_id),
            slug: ActiveValue::Set(slug.to_string()),
            position: ActiveValue::Set(0),
            image_path: ActiveValue::Set(None),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(product.insert(self.db).await?)
    }

    pub async fn insert_solution(&self, slug: &str) -> Result<entity::solution::Model, TestError> {
        let now = Utc::now().naive_utc();

        let solution = entity::solution::ActiveModel {
            slug: ActiveValue::Set(slug.to_string()),
            position: ActiveValue::Set(0),
            image_path: ActiveValue::Set(None),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(solution.insert(self.db).await?)
    }

    pub async fn insert_solution_translation(
        &self,
        solution_id: i32,
        language: &str,
        name: &str,
    ) -> Result<entity::solution_translation::Model, TestError> {
        let translation = entity::solution_translation::ActiveModel {
            solution_id: ActiveValue::Set(solution_id),
            language: ActiveValue::Set(language.to_string()),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(None),
            ..Default::default()
        };

        Ok(translation.insert(self.db).await?)
    }

    pub async fn insert_block(
        &self,
        owner_type: entity::extra_content::OwnerType,
        owner_id: i32,
        language: &str,
        position: i32,
    ) -> Result<entity::extra_content::Model, TestError> {
        let block = entity::extra_content::ActiveModel {
            owner_type: ActiveValue::Set(owner_type),
            owner_id: ActiveValue::Set(owner_id),
            language: ActiveValue::Set(language.to_string()),
            position: ActiveValue::Set(position),
            block_type: ActiveValue::Set(entity::extra_content::BlockType::Text),
            title: ActiveValue::Set(format!("block-{language}-{position}")),
            payload: ActiveValue::Set("payload".to_string()),
            ..Default::default()
        };

        Ok(block.insert(self.db).await?)
    }

    pub async fn insert_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<entity::admin::Model, TestError> {
        let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .expect("argon2 hashing cannot fail with valid parameters")
            .to_string();

        let admin = entity::admin::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(admin.insert(self.db).await?)
    }
}
