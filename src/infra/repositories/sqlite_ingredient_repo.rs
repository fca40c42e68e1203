use crate::domain::{models::ingredient::Ingredient, ports::IngredientRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteIngredientRepo {
    pool: SqlitePool,
}

impl SqliteIngredientRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IngredientRepository for SqliteIngredientRepo {
    async fn create(&self, ingredient: &Ingredient) -> Result<Ingredient, AppError> {
        sqlx::query_as::<_, Ingredient>(
            "INSERT INTO ingredients (id, restaurant_id, name, is_allergen, created_at) VALUES (?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&ingredient.id)
            .bind(&ingredient.restaurant_id)
            .bind(&ingredient.name)
            .bind(ingredient.is_allergen)
            .bind(ingredient.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, restaurant_id: &str, id: &str) -> Result<Option<Ingredient>, AppError> {
        sqlx::query_as::<_, Ingredient>(
            "SELECT * FROM ingredients WHERE restaurant_id = ? AND id = ?",
        )
            .bind(restaurant_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, restaurant_id: &str) -> Result<Vec<Ingredient>, AppError> {
        sqlx::query_as::<_, Ingredient>(
            "SELECT * FROM ingredients WHERE restaurant_id = ? ORDER BY name ASC",
        )
            .bind(restaurant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, ingredient: &Ingredient) -> Result<Ingredient, AppError> {
        sqlx::query_as::<_, Ingredient>(
            "UPDATE ingredients SET name=?, is_allergen=? WHERE id=? AND restaurant_id=? RETURNING *"
        )
            .bind(&ingredient.name)
            .bind(ingredient.is_allergen)
            .bind(&ingredient.id)
            .bind(&ingredient.restaurant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, restaurant_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM ingredients WHERE id = ? AND restaurant_id = ?")
            .bind(id)
            .bind(restaurant_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Ingredient not found".into()));
        }
        Ok(())
    }
}
