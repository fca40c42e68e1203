use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Ingredient {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub is_allergen: bool,
    pub created_at: DateTime<Utc>,
}

impl Ingredient {
    pub fn new(restaurant_id: String, name: String, is_allergen: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            restaurant_id,
            name,
            is_allergen,
            created_at: Utc::now(),
        }
    }
}
