use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::services::defaults;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// IANA zone id, e.g. "America/Santiago". Drives every schedule evaluation.
    pub timezone: String,
    /// Display symbol only; no conversion happens anywhere.
    pub currency: String,
    pub logo_url: Option<String>,
    pub theme_json: String,
    pub created_at: DateTime<Utc>,
}

impl Restaurant {
    pub fn new(name: String, slug: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            slug,
            timezone: defaults::DEFAULT_TIMEZONE.to_string(),
            currency: defaults::DEFAULT_CURRENCY.to_string(),
            logo_url: None,
            theme_json: defaults::default_theme_json(),
            created_at: Utc::now(),
        }
    }
}
