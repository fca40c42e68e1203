use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, restaurant::RestaurantId};
use crate::api::dtos::requests::CreateMemberRequest;
use crate::domain::models::user::{self, User};
use crate::domain::services::auth_service::hash_password;
use std::sync::Arc;
use crate::error::AppError;
use tracing::info;

fn require_owner(caller: &AuthUser) -> Result<(), AppError> {
    if caller.role != user::ROLE_OWNER {
        return Err(AppError::Forbidden("only the owner can manage staff".into()));
    }
    Ok(())
}

pub async fn create_member(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    caller: AuthUser,
    Json(payload): Json<CreateMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_owner(&caller)?;

    if state.user_repo.find_by_username(&restaurant_id, &payload.username).await?.is_some() {
        return Err(AppError::Conflict("username already taken".into()));
    }

    let member = User::new(
        restaurant_id,
        payload.username,
        hash_password(&payload.password)?,
        user::ROLE_STAFF,
    );
    let created = state.user_repo.create(&member).await?;

    info!(user_id = %created.id, "staff account created");
    Ok(Json(created))
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _caller: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let members = state.user_repo.list_by_restaurant(&restaurant_id).await?;
    Ok(Json(members))
}

pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    caller: AuthUser,
    Path((_, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    require_owner(&caller)?;

    // Owners lock themselves out otherwise; the restaurant would be orphaned.
    if caller.user_id == user_id {
        return Err(AppError::Conflict("cannot delete your own account".into()));
    }

    let target = state.user_repo.find_by_id(&restaurant_id, &user_id).await?
        .ok_or_else(|| AppError::NotFound("user".into()))?;
    state.user_repo.delete(&restaurant_id, &target.id).await?;

    info!(user_id = %user_id, "staff account deleted");
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
