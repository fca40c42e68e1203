use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateRestaurantRequest {
    pub name: Option<String>,
    pub timezone: Option<String>,
    pub currency: Option<String>,
    pub logo_url: Option<String>,
    pub theme_json: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateMemberRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateItemRequest {
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    pub base_price: Option<f64>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub ingredient_ids: Option<Vec<String>>,
    pub sort_order: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateItemRequest {
    pub category_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_price: Option<f64>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub ingredient_ids: Option<Vec<String>>,
    pub is_available: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Deserialize)]
pub struct CreateIngredientRequest {
    pub name: String,
    pub is_allergen: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateIngredientRequest {
    pub name: Option<String>,
    pub is_allergen: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateDiscountRequest {
    pub category_id: String,
    pub name: String,
    pub discount_percentage: f64,
    pub days_of_week: Vec<u8>,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Deserialize)]
pub struct UpdateDiscountRequest {
    pub category_id: Option<String>,
    pub name: Option<String>,
    pub discount_percentage: Option<f64>,
    pub days_of_week: Option<Vec<u8>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateBannerRequest {
    pub title: String,
    pub message: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateBannerRequest {
    pub title: Option<String>,
    pub message: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
