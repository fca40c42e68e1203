use serde::Serialize;

use crate::domain::services::promotions::{PricedMenuItem, PromotionCountdown};

#[derive(Serialize)]
pub struct RestaurantCreatedResponse {
    pub restaurant_id: String,
    pub admin_username: String,
    pub admin_secret: String,
}

/// Everything the public menu page needs in one response.
#[derive(Serialize)]
pub struct MenuResponse {
    pub restaurant: MenuRestaurant,
    pub banners: Vec<MenuBanner>,
    pub categories: Vec<MenuCategory>,
}

#[derive(Serialize)]
pub struct MenuRestaurant {
    pub name: String,
    pub slug: String,
    pub currency: String,
    pub logo_url: Option<String>,
    pub theme: serde_json::Value,
}

#[derive(Serialize)]
pub struct MenuBanner {
    pub title: String,
    pub message: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Serialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub items: Vec<MenuEntry>,
}

#[derive(Serialize)]
pub struct MenuEntry {
    #[serde(flatten)]
    pub priced: PricedMenuItem,
    pub ingredients: Vec<MenuIngredient>,
}

#[derive(Serialize)]
pub struct MenuIngredient {
    pub name: String,
    pub is_allergen: bool,
}

#[derive(Serialize)]
pub struct DiscountStatusResponse {
    pub discount_id: String,
    pub name: String,
    #[serde(flatten)]
    pub countdown: PromotionCountdown,
}
