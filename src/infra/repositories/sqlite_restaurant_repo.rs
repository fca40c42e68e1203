use crate::domain::{models::restaurant::Restaurant, ports::RestaurantRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteRestaurantRepo {
    pool: SqlitePool,
}

impl SqliteRestaurantRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for SqliteRestaurantRepo {
    async fn create(&self, restaurant: &Restaurant) -> Result<Restaurant, AppError> {
        sqlx::query_as::<_, Restaurant>(
            "INSERT INTO restaurants (id, name, slug, timezone, currency, logo_url, theme_json, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&restaurant.id)
            .bind(&restaurant.name)
            .bind(&restaurant.slug)
            .bind(&restaurant.timezone)
            .bind(&restaurant.currency)
            .bind(&restaurant.logo_url)
            .bind(&restaurant.theme_json)
            .bind(restaurant.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Restaurant>, AppError> {
        sqlx::query_as::<_, Restaurant>(
            "SELECT * FROM restaurants WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Restaurant>, AppError> {
        sqlx::query_as::<_, Restaurant>(
            "SELECT * FROM restaurants WHERE slug = ?",
        )
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, restaurant: &Restaurant) -> Result<Restaurant, AppError> {
        sqlx::query_as::<_, Restaurant>(
            "UPDATE restaurants SET name=?, timezone=?, currency=?, logo_url=?, theme_json=? WHERE id=? RETURNING *"
        )
            .bind(&restaurant.name)
            .bind(&restaurant.timezone)
            .bind(&restaurant.currency)
            .bind(&restaurant.logo_url)
            .bind(&restaurant.theme_json)
            .bind(&restaurant.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
