use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, restaurant::RestaurantId};
use crate::api::dtos::requests::{CreateItemRequest, UpdateItemRequest};
use crate::domain::models::item::{MenuItem, NewItemParams};
use crate::error::AppError;
use std::sync::Arc;
use sqlx::types::Json as SqlxJson;
use tracing::info;

pub async fn list_items(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let items = state.item_repo.list(&restaurant_id).await?;
    Ok(Json(items))
}

pub async fn get_item(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Path((_, item_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.item_repo.find_by_id(&restaurant_id, &item_id).await?
        .ok_or(AppError::NotFound("Menu item not found".into()))?;
    Ok(Json(item))
}

pub async fn create_item(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Json(payload): Json<CreateItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.base_price.is_none() && payload.price.is_none() {
        return Err(AppError::Validation("Item needs a price".into()));
    }
    if payload.base_price.is_some_and(|p| p < 0.0) || payload.price.is_some_and(|p| p < 0.0) {
        return Err(AppError::Validation("Price must not be negative".into()));
    }

    state.category_repo.find_by_id(&restaurant_id, &payload.category_id).await?
        .ok_or(AppError::Validation("Unknown category".into()))?;

    let item = MenuItem::new(NewItemParams {
        restaurant_id,
        category_id: payload.category_id,
        name: payload.name,
        description: payload.description,
        base_price: payload.base_price,
        price: payload.price,
        image_url: payload.image_url,
        ingredient_ids: payload.ingredient_ids.unwrap_or_default(),
        sort_order: payload.sort_order.unwrap_or(0),
    });

    let created = state.item_repo.create(&item).await?;
    info!("Created menu item: {}", created.id);
    Ok(Json(created))
}

pub async fn update_item(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Path((_, item_id)): Path<(String, String)>,
    Json(payload): Json<UpdateItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut item = state.item_repo.find_by_id(&restaurant_id, &item_id).await?
        .ok_or(AppError::NotFound("Menu item not found".into()))?;

    if let Some(val) = payload.category_id {
        state.category_repo.find_by_id(&restaurant_id, &val).await?
            .ok_or(AppError::Validation("Unknown category".into()))?;
        item.category_id = val;
    }
    if let Some(val) = payload.name { item.name = val; }
    if let Some(val) = payload.description { item.description = Some(val); }
    if let Some(val) = payload.base_price {
        if val < 0.0 {
            return Err(AppError::Validation("Price must not be negative".into()));
        }
        item.base_price = Some(val);
    }
    if let Some(val) = payload.price {
        if val < 0.0 {
            return Err(AppError::Validation("Price must not be negative".into()));
        }
        item.price = Some(val);
    }
    if let Some(val) = payload.image_url { item.image_url = Some(val); }
    if let Some(val) = payload.ingredient_ids { item.ingredient_ids = SqlxJson(val); }
    if let Some(val) = payload.is_available { item.is_available = val; }
    if let Some(val) = payload.sort_order { item.sort_order = val; }

    let updated = state.item_repo.update(&item).await?;
    info!("Menu item updated: {}", item_id);
    Ok(Json(updated))
}

pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Path((_, item_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.item_repo.delete(&restaurant_id, &item_id).await?;
    info!("Deleted menu item: {}", item_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
