use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Category {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(restaurant_id: String, name: String, sort_order: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            restaurant_id,
            name,
            description: None,
            sort_order,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
