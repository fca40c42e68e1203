use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, restaurant::RestaurantId};
use crate::api::dtos::requests::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::domain::models::category::Category;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let categories = state.category_repo.list(&restaurant_id).await?;
    Ok(Json(categories))
}

pub async fn create_category(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Category name must not be empty".into()));
    }

    let mut category = Category::new(restaurant_id, payload.name, payload.sort_order.unwrap_or(0));
    category.description = payload.description;

    let created = state.category_repo.create(&category).await?;
    info!("Created category: {}", created.id);
    Ok(Json(created))
}

pub async fn update_category(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Path((_, category_id)): Path<(String, String)>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut category = state.category_repo.find_by_id(&restaurant_id, &category_id).await?
        .ok_or(AppError::NotFound("Category not found".into()))?;

    if let Some(val) = payload.name {
        if val.trim().is_empty() {
            return Err(AppError::Validation("Category name must not be empty".into()));
        }
        category.name = val;
    }
    if let Some(val) = payload.description { category.description = Some(val); }
    if let Some(val) = payload.sort_order { category.sort_order = val; }
    if let Some(val) = payload.is_active { category.is_active = val; }

    let updated = state.category_repo.update(&category).await?;
    info!("Category updated: {}", category_id);
    Ok(Json(updated))
}

/// Items and discounts pointing at a deleted category are left in place;
/// they drop off the public menu and their discounts stop matching.
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Path((_, category_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.category_repo.delete(&restaurant_id, &category_id).await?;
    info!("Deleted category: {}", category_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
