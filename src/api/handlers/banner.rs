use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, restaurant::RestaurantId};
use crate::api::dtos::requests::{CreateBannerRequest, UpdateBannerRequest};
use crate::domain::models::banner::Banner;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_banners(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let banners = state.banner_repo.list(&restaurant_id).await?;
    Ok(Json(banners))
}

pub async fn create_banner(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Json(payload): Json<CreateBannerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut banner = Banner::new(restaurant_id, payload.title, payload.sort_order.unwrap_or(0));
    banner.message = payload.message;
    banner.image_url = payload.image_url;

    let created = state.banner_repo.create(&banner).await?;
    info!("Created banner: {}", created.id);
    Ok(Json(created))
}

pub async fn update_banner(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Path((_, banner_id)): Path<(String, String)>,
    Json(payload): Json<UpdateBannerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut banner = state.banner_repo.find_by_id(&restaurant_id, &banner_id).await?
        .ok_or(AppError::NotFound("Banner not found".into()))?;

    if let Some(val) = payload.title { banner.title = val; }
    if let Some(val) = payload.message { banner.message = Some(val); }
    if let Some(val) = payload.image_url { banner.image_url = Some(val); }
    if let Some(val) = payload.sort_order { banner.sort_order = val; }
    if let Some(val) = payload.is_active { banner.is_active = val; }

    let updated = state.banner_repo.update(&banner).await?;
    info!("Banner updated: {}", banner_id);
    Ok(Json(updated))
}

pub async fn delete_banner(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Path((_, banner_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.banner_repo.delete(&restaurant_id, &banner_id).await?;
    info!("Deleted banner: {}", banner_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
