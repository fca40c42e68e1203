use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, restaurant::RestaurantId};
use crate::api::dtos::requests::{CreateIngredientRequest, UpdateIngredientRequest};
use crate::domain::models::ingredient::Ingredient;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_ingredients(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let ingredients = state.ingredient_repo.list(&restaurant_id).await?;
    Ok(Json(ingredients))
}

pub async fn create_ingredient(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Json(payload): Json<CreateIngredientRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Ingredient name must not be empty".into()));
    }

    let ingredient = Ingredient::new(restaurant_id, payload.name, payload.is_allergen.unwrap_or(false));
    let created = state.ingredient_repo.create(&ingredient).await?;
    info!("Created ingredient: {}", created.id);
    Ok(Json(created))
}

pub async fn update_ingredient(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Path((_, ingredient_id)): Path<(String, String)>,
    Json(payload): Json<UpdateIngredientRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut ingredient = state.ingredient_repo.find_by_id(&restaurant_id, &ingredient_id).await?
        .ok_or(AppError::NotFound("Ingredient not found".into()))?;

    if let Some(val) = payload.name {
        if val.trim().is_empty() {
            return Err(AppError::Validation("Ingredient name must not be empty".into()));
        }
        ingredient.name = val;
    }
    if let Some(val) = payload.is_allergen { ingredient.is_allergen = val; }

    let updated = state.ingredient_repo.update(&ingredient).await?;
    info!("Ingredient updated: {}", ingredient_id);
    Ok(Json(updated))
}

pub async fn delete_ingredient(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Path((_, ingredient_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.ingredient_repo.delete(&restaurant_id, &ingredient_id).await?;
    info!("Deleted ingredient: {}", ingredient_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
