use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Banner {
    pub id: String,
    pub restaurant_id: String,
    pub title: String,
    pub message: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Banner {
    pub fn new(restaurant_id: String, title: String, sort_order: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            restaurant_id,
            title,
            message: None,
            image_url: None,
            sort_order,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
