use crate::domain::{models::restaurant::Restaurant, ports::RestaurantRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresRestaurantRepo {
    pool: PgPool,
}

impl PostgresRestaurantRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for PostgresRestaurantRepo {
    async fn create(&self, restaurant: &Restaurant) -> Result<Restaurant, AppError> {
        sqlx::query_as::<_, Restaurant>(
            "INSERT INTO restaurants (id, name, slug, timezone, currency, logo_url, theme_json, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id, name, slug, timezone, currency, logo_url, theme_json, created_at",
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
            "SELECT id, name, slug, timezone, currency, logo_url, theme_json, created_at FROM restaurants WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Restaurant>, AppError> {
        sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, slug, timezone, currency, logo_url, theme_json, created_at FROM restaurants WHERE slug = $1",
        )
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, restaurant: &Restaurant) -> Result<Restaurant, AppError> {
        sqlx::query_as::<_, Restaurant>(
            "UPDATE restaurants SET name=$1, timezone=$2, currency=$3, logo_url=$4, theme_json=$5 WHERE id=$6 RETURNING id, name, slug, timezone, currency, logo_url, theme_json, created_at",
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
