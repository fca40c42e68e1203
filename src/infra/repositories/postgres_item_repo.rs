use crate::domain::{models::item::MenuItem, ports::ItemRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresItemRepo {
    pool: PgPool,
}

impl PostgresItemRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepo {
    async fn create(&self, item: &MenuItem) -> Result<MenuItem, AppError> {
        sqlx::query_as::<_, MenuItem>(
            r#"INSERT INTO menu_items (
                id, restaurant_id, category_id, name, description,
                base_price, price, image_url, ingredient_ids,
                is_available, sort_order, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, restaurant_id, category_id, name, description, base_price, price, image_url, ingredient_ids, is_available, sort_order, created_at"#
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
            "SELECT id, restaurant_id, category_id, name, description, base_price, price, image_url, ingredient_ids, is_available, sort_order, created_at FROM menu_items WHERE restaurant_id = $1 AND id = $2",
        )
            .bind(restaurant_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, AppError> {
        sqlx::query_as::<_, MenuItem>(
            "SELECT id, restaurant_id, category_id, name, description, base_price, price, image_url, ingredient_ids, is_available, sort_order, created_at FROM menu_items WHERE restaurant_id = $1 ORDER BY sort_order ASC, name ASC",
        )
            .bind(restaurant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, item: &MenuItem) -> Result<MenuItem, AppError> {
        sqlx::query_as::<_, MenuItem>(
            r#"UPDATE menu_items SET
                category_id=$1, name=$2, description=$3, base_price=$4, price=$5,
                image_url=$6, ingredient_ids=$7, is_available=$8, sort_order=$9
               WHERE id=$10 AND restaurant_id=$11
               RETURNING id, restaurant_id, category_id, name, description, base_price, price, image_url, ingredient_ids, is_available, sort_order, created_at"#
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
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1 AND restaurant_id = $2")
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
