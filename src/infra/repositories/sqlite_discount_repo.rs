use crate::domain::{models::discount::ScheduledDiscount, ports::DiscountRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteDiscountRepo {
    pool: SqlitePool,
}

impl SqliteDiscountRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DiscountRepository for SqliteDiscountRepo {
    async fn create(&self, discount: &ScheduledDiscount) -> Result<ScheduledDiscount, AppError> {
        sqlx::query_as::<_, ScheduledDiscount>(
            r#"INSERT INTO scheduled_discounts (
                id, restaurant_id, category_id, name, discount_percentage,
                days_of_week, start_time, end_time, is_active, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#
        )
            .bind(&discount.id)
            .bind(&discount.restaurant_id)
            .bind(&discount.category_id)
            .bind(&discount.name)
            .bind(discount.discount_percentage)
            .bind(&discount.days_of_week)
            .bind(&discount.start_time)
            .bind(&discount.end_time)
            .bind(discount.is_active)
            .bind(discount.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, restaurant_id: &str, id: &str) -> Result<Option<ScheduledDiscount>, AppError> {
        sqlx::query_as::<_, ScheduledDiscount>(
            "SELECT * FROM scheduled_discounts WHERE restaurant_id = ? AND id = ?",
        )
            .bind(restaurant_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    // Creation order keeps the apply tie-break stable across reads.
    async fn list(&self, restaurant_id: &str) -> Result<Vec<ScheduledDiscount>, AppError> {
        sqlx::query_as::<_, ScheduledDiscount>(
            "SELECT * FROM scheduled_discounts WHERE restaurant_id = ? ORDER BY created_at ASC, id ASC",
        )
            .bind(restaurant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, discount: &ScheduledDiscount) -> Result<ScheduledDiscount, AppError> {
        sqlx::query_as::<_, ScheduledDiscount>(
            r#"UPDATE scheduled_discounts SET
                category_id=?, name=?, discount_percentage=?,
                days_of_week=?, start_time=?, end_time=?, is_active=?
               WHERE id=? AND restaurant_id=? RETURNING *"#
        )
            .bind(&discount.category_id)
            .bind(&discount.name)
            .bind(discount.discount_percentage)
            .bind(&discount.days_of_week)
            .bind(&discount.start_time)
            .bind(&discount.end_time)
            .bind(discount.is_active)
            .bind(&discount.id)
            .bind(&discount.restaurant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, restaurant_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM scheduled_discounts WHERE id = ? AND restaurant_id = ?")
            .bind(id)
            .bind(restaurant_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Discount not found".into()));
        }
        Ok(())
    }
}
