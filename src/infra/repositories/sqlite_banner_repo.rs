use crate::domain::{models::banner::Banner, ports::BannerRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteBannerRepo {
    pool: SqlitePool,
}

impl SqliteBannerRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BannerRepository for SqliteBannerRepo {
    async fn create(&self, banner: &Banner) -> Result<Banner, AppError> {
        sqlx::query_as::<_, Banner>(
            "INSERT INTO banners (id, restaurant_id, title, message, image_url, sort_order, is_active, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&banner.id)
            .bind(&banner.restaurant_id)
            .bind(&banner.title)
            .bind(&banner.message)
            .bind(&banner.image_url)
            .bind(banner.sort_order)
            .bind(banner.is_active)
            .bind(banner.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, restaurant_id: &str, id: &str) -> Result<Option<Banner>, AppError> {
        sqlx::query_as::<_, Banner>(
            "SELECT * FROM banners WHERE restaurant_id = ? AND id = ?",
        )
            .bind(restaurant_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, restaurant_id: &str) -> Result<Vec<Banner>, AppError> {
        sqlx::query_as::<_, Banner>(
            "SELECT * FROM banners WHERE restaurant_id = ? ORDER BY sort_order ASC, created_at ASC",
        )
            .bind(restaurant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, banner: &Banner) -> Result<Banner, AppError> {
        sqlx::query_as::<_, Banner>(
            "UPDATE banners SET title=?, message=?, image_url=?, sort_order=?, is_active=? WHERE id=? AND restaurant_id=? RETURNING *"
        )
            .bind(&banner.title)
            .bind(&banner.message)
            .bind(&banner.image_url)
            .bind(banner.sort_order)
            .bind(banner.is_active)
            .bind(&banner.id)
            .bind(&banner.restaurant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, restaurant_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM banners WHERE id = ? AND restaurant_id = ?")
            .bind(id)
            .bind(restaurant_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Banner not found".into()));
        }
        Ok(())
    }
}
