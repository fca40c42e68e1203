use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateRestaurantRequest, UpdateRestaurantRequest},
    responses::RestaurantCreatedResponse
};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::{restaurant::Restaurant, user::{self, User}};
use crate::domain::services::{auth_service, defaults};
use std::sync::Arc;
use crate::error::AppError;
use chrono_tz::Tz;
use tracing::info;

pub async fn create_restaurant(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateRestaurantRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut restaurant = Restaurant::new(payload.name, payload.slug);
    if let Some(logo) = payload.logo_url {
        restaurant.logo_url = Some(logo);
    }
    let created = state.restaurant_repo.create(&restaurant).await?;

    // The secret is shown exactly once; only its hash survives.
    let admin_secret = auth_service::random_token(16);
    let owner = User::new(
        created.id.clone(),
        defaults::DEFAULT_ADMIN_USERNAME.to_string(),
        auth_service::hash_password(&admin_secret)?,
        user::ROLE_OWNER,
    );
    state.user_repo.create(&owner).await?;

    info!(restaurant_id = %created.id, "restaurant registered");

    Ok(Json(RestaurantCreatedResponse {
        restaurant_id: created.id,
        admin_username: owner.username,
        admin_secret,
    }))
}

pub async fn get_restaurant_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = state.restaurant_repo.find_by_slug(&slug).await?
        .ok_or_else(|| AppError::NotFound("restaurant".into()))?;
    Ok(Json(restaurant))
}

pub async fn get_current_restaurant(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = state.restaurant_repo.find_by_id(&caller.restaurant_id).await?
        .ok_or_else(|| AppError::NotFound("restaurant".into()))?;
    Ok(Json(restaurant))
}

pub async fn update_restaurant(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
    Json(payload): Json<UpdateRestaurantRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut restaurant = state.restaurant_repo.find_by_id(&caller.restaurant_id).await?
        .ok_or_else(|| AppError::NotFound("restaurant".into()))?;

    if let Some(name) = payload.name {
        restaurant.name = name;
    }
    if let Some(timezone) = payload.timezone {
        if timezone.parse::<Tz>().is_err() {
            return Err(AppError::Validation("unknown IANA timezone".into()));
        }
        restaurant.timezone = timezone;
    }
    if let Some(currency) = payload.currency {
        restaurant.currency = currency;
    }
    if let Some(logo) = payload.logo_url {
        restaurant.logo_url = Some(logo);
    }
    if let Some(theme) = payload.theme_json {
        if serde_json::from_str::<serde_json::Value>(&theme).is_err() {
            return Err(AppError::Validation("theme_json must be valid JSON".into()));
        }
        restaurant.theme_json = theme;
    }

    let updated = state.restaurant_repo.update(&restaurant).await?;
    info!(restaurant_id = %updated.id, "settings updated");
    Ok(Json(updated))
}
