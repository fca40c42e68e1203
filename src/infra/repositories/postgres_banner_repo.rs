use crate::domain::{models::banner::Banner, ports::BannerRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresBannerRepo {
    pool: PgPool,
}

impl PostgresBannerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BannerRepository for PostgresBannerRepo {
    async fn create(&self, banner: &Banner) -> Result<Banner, AppError> {
        sqlx::query_as::<_, Banner>(
            "INSERT INTO banners (id, restaurant_id, title, message, image_url, sort_order, is_active, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id, restaurant_id, title, message, image_url, sort_order, is_active, created_at",
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
            "SELECT id, restaurant_id, title, message, image_url, sort_order, is_active, created_at FROM banners WHERE restaurant_id = $1 AND id = $2",
        )
            .bind(restaurant_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, restaurant_id: &str) -> Result<Vec<Banner>, AppError> {
        sqlx::query_as::<_, Banner>(
            "SELECT id, restaurant_id, title, message, image_url, sort_order, is_active, created_at FROM banners WHERE restaurant_id = $1 ORDER BY sort_order ASC, created_at ASC",
        )
            .bind(restaurant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, banner: &Banner) -> Result<Banner, AppError> {
        sqlx::query_as::<_, Banner>(
            "UPDATE banners SET title=$1, message=$2, image_url=$3, sort_order=$4, is_active=$5 WHERE id=$6 AND restaurant_id=$7 RETURNING id, restaurant_id, title, message, image_url, sort_order, is_active, created_at",
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
        let result = sqlx::query("DELETE FROM banners WHERE id = $1 AND restaurant_id = $2")
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
