use crate::domain::{models::category::Category, ports::CategoryRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresCategoryRepo {
    pool: PgPool,
}

impl PostgresCategoryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepo {
    async fn create(&self, category: &Category) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (id, restaurant_id, name, description, sort_order, is_active, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id, restaurant_id, name, description, sort_order, is_active, created_at",
        )
            .bind(&category.id)
            .bind(&category.restaurant_id)
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.sort_order)
            .bind(category.is_active)
            .bind(category.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, restaurant_id: &str, id: &str) -> Result<Option<Category>, AppError> {
        sqlx::query_as::<_, Category>(
            "SELECT id, restaurant_id, name, description, sort_order, is_active, created_at FROM categories WHERE restaurant_id = $1 AND id = $2",
        )
            .bind(restaurant_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, restaurant_id: &str) -> Result<Vec<Category>, AppError> {
        sqlx::query_as::<_, Category>(
            "SELECT id, restaurant_id, name, description, sort_order, is_active, created_at FROM categories WHERE restaurant_id = $1 ORDER BY sort_order ASC, name ASC",
        )
            .bind(restaurant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, category: &Category) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET name=$1, description=$2, sort_order=$3, is_active=$4 WHERE id=$5 AND restaurant_id=$6 RETURNING id, restaurant_id, name, description, sort_order, is_active, created_at",
        )
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.sort_order)
            .bind(category.is_active)
            .bind(&category.id)
            .bind(&category.restaurant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, restaurant_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1 AND restaurant_id = $2")
            .bind(id)
            .bind(restaurant_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Category not found".into()));
        }
        Ok(())
    }
}
