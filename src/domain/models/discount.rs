use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;

/// A recurring weekly discount on one category.
///
/// `days_of_week` uses 0=Sunday..6=Saturday. `start_time`/`end_time` are
/// wall-clock "HH:MM" strings interpreted in the restaurant's timezone;
/// `end_time` earlier than `start_time` means the window runs past midnight
/// into the next calendar day. The strings are kept raw in the record and
/// parsed at evaluation time, so a row with garbage in it simply never
/// activates instead of poisoning the whole menu.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct ScheduledDiscount {
    pub id: String,
    pub restaurant_id: String,
    pub category_id: String,
    pub name: String,
    pub discount_percentage: f64,
    pub days_of_week: Json<Vec<u8>>,
    pub start_time: String,
    pub end_time: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

pub struct NewDiscountParams {
    pub restaurant_id: String,
    pub category_id: String,
    pub name: String,
    pub discount_percentage: f64,
    pub days_of_week: Vec<u8>,
    pub start_time: String,
    pub end_time: String,
}

impl ScheduledDiscount {
    pub fn new(params: NewDiscountParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            restaurant_id: params.restaurant_id,
            category_id: params.category_id,
            name: params.name,
            discount_percentage: params.discount_percentage,
            days_of_week: Json(params.days_of_week),
            start_time: params.start_time,
            end_time: params.end_time,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
