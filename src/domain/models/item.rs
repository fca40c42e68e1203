use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;

/// A dish on the menu. `base_price` is the current price field; `price` is
/// the legacy name still present in imported data. Exactly one of the two is
/// treated as the source of truth, preferring `base_price`.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub restaurant_id: String,
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    pub base_price: Option<f64>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub ingredient_ids: Json<Vec<String>>,
    pub is_available: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

pub struct NewItemParams {
    pub restaurant_id: String,
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    pub base_price: Option<f64>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub ingredient_ids: Vec<String>,
    pub sort_order: i32,
}

impl MenuItem {
    pub fn new(params: NewItemParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            restaurant_id: params.restaurant_id,
            category_id: params.category_id,
            name: params.name,
            description: params.description,
            base_price: params.base_price,
            price: params.price,
            image_url: params.image_url,
            ingredient_ids: Json(params.ingredient_ids),
            is_available: true,
            sort_order: params.sort_order,
            created_at: Utc::now(),
        }
    }
}
