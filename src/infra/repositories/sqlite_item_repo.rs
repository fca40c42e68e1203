use crate::domain::{models::item::MenuItem, ports::ItemRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteItemRepo {
    pool: SqlitePool,
}

impl SqliteItemRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepo {
    async fn create(&self, item: &MenuItem) -> Result<MenuItem, AppError> {
        sqlx::query_as::<_, MenuItem>(
            r#"INSERT INTO menu_items (
                id, restaurant_id, category_id, name, description,
                base_price, price, image_url, ingredient_ids,
                is_available, sort_order, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#
        )
            .bind(&item.id)
            .bind(&item.restaurant_id)
            .bind(&item.category_id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.base_price)
            .bind(item.price)
            .bind(&item.image_url)
            .bind(&item.ingredient_ids)
            .bind(item.is_available)
            .bind(item.sort_order)
            .bind(item.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, restaurant_id: &str, id: &str) -> Result<Option<MenuItem>, AppError> {
        sqlx::query_as::<_, MenuItem>(
            "SELECT * FROM menu_items WHERE restaurant_id = ? AND id = ?",
        )
            .bind(restaurant_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, AppError> {
        sqlx::query_as::<_, MenuItem>(
            "SELECT * FROM menu_items WHERE restaurant_id = ? ORDER BY sort_order ASC, name ASC",
        )
            .bind(restaurant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, item: &MenuItem) -> Result<MenuItem, AppError> {
        sqlx::query_as::<_, MenuItem>(
            r#"UPDATE menu_items SET
                category_id=?, name=?, description=?, base_price=?, price=?,
                image_url=?, ingredient_ids=?, is_available=?, sort_order=?
               WHERE id=? AND restaurant_id=? RETURNING *"#
        )
            .bind(&item.category_id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.base_price)
            .bind(item.price)
            .bind(&item.image_url)
            .bind(&item.ingredient_ids)
            .bind(item.is_available)
            .bind(item.sort_order)
            .bind(&item.id)
            .bind(&item.restaurant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, restaurant_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = ? AND restaurant_id = ?")
            .bind(id)
            .bind(restaurant_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Menu item not found".into()));
        }
        Ok(())
    }
}
