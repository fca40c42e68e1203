use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, restaurant::RestaurantId};
use crate::api::dtos::{
    requests::{CreateDiscountRequest, UpdateDiscountRequest},
    responses::DiscountStatusResponse
};
use crate::domain::models::discount::{NewDiscountParams, ScheduledDiscount};
use crate::domain::services::promotions;
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use chrono::{DateTime, NaiveTime, Utc};
use sqlx::types::Json as SqlxJson;
use tracing::info;

pub async fn list_discounts(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let discounts = state.discount_repo.list(&restaurant_id).await?;
    Ok(Json(discounts))
}

pub async fn get_discount(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Path((_, discount_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let discount = state.discount_repo.find_by_id(&restaurant_id, &discount_id).await?
        .ok_or(AppError::NotFound("Discount not found".into()))?;
    Ok(Json(discount))
}

pub async fn create_discount(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Json(payload): Json<CreateDiscountRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_schedule(&payload.days_of_week, &payload.start_time, &payload.end_time)?;
    validate_percentage(payload.discount_percentage)?;

    state.category_repo.find_by_id(&restaurant_id, &payload.category_id).await?
        .ok_or(AppError::Validation("Unknown category".into()))?;

    let discount = ScheduledDiscount::new(NewDiscountParams {
        restaurant_id,
        category_id: payload.category_id,
        name: payload.name,
        discount_percentage: payload.discount_percentage,
        days_of_week: payload.days_of_week,
        start_time: payload.start_time,
        end_time: payload.end_time,
    });

    let created = state.discount_repo.create(&discount).await?;
    info!("Created discount: {} ({}%)", created.id, created.discount_percentage);
    Ok(Json(created))
}

pub async fn update_discount(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Path((_, discount_id)): Path<(String, String)>,
    Json(payload): Json<UpdateDiscountRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut discount = state.discount_repo.find_by_id(&restaurant_id, &discount_id).await?
        .ok_or(AppError::NotFound("Discount not found".into()))?;

    if let Some(val) = payload.category_id {
        state.category_repo.find_by_id(&restaurant_id, &val).await?
            .ok_or(AppError::Validation("Unknown category".into()))?;
        discount.category_id = val;
    }
    if let Some(val) = payload.name { discount.name = val; }
    if let Some(val) = payload.discount_percentage {
        validate_percentage(val)?;
        discount.discount_percentage = val;
    }
    if let Some(val) = payload.days_of_week { discount.days_of_week = SqlxJson(val); }
    if let Some(val) = payload.start_time { discount.start_time = val; }
    if let Some(val) = payload.end_time { discount.end_time = val; }
    if let Some(val) = payload.is_active { discount.is_active = val; }

    validate_schedule(&discount.days_of_week.0, &discount.start_time, &discount.end_time)?;

    let updated = state.discount_repo.update(&discount).await?;
    info!("Discount updated: {}", discount_id);
    Ok(Json(updated))
}

pub async fn delete_discount(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Path((_, discount_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.discount_repo.delete(&restaurant_id, &discount_id).await?;
    info!("Deleted discount: {}", discount_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

/// Countdown for one discount: running now, and when the state flips.
pub async fn get_discount_status(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Path((_, discount_id)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = state.restaurant_repo.find_by_id(&restaurant_id).await?
        .ok_or(AppError::NotFound("Restaurant not found".into()))?;
    let discount = state.discount_repo.find_by_id(&restaurant_id, &discount_id).await?
        .ok_or(AppError::NotFound("Discount not found".into()))?;

    let at = parse_at(&params)?;
    let countdown = promotions::next_transition(&discount, &restaurant.timezone, at);

    Ok(Json(DiscountStatusResponse {
        discount_id: discount.id,
        name: discount.name,
        countdown,
    }))
}

/// Countdowns for every discount of the restaurant, in list order.
pub async fn list_discount_statuses(
    State(state): State<Arc<AppState>>,
    RestaurantId(restaurant_id): RestaurantId,
    _user: AuthUser,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = state.restaurant_repo.find_by_id(&restaurant_id).await?
        .ok_or(AppError::NotFound("Restaurant not found".into()))?;
    let discounts = state.discount_repo.list(&restaurant_id).await?;

    let at = parse_at(&params)?;
    let statuses: Vec<DiscountStatusResponse> = discounts
        .into_iter()
        .map(|d| {
            let countdown = promotions::next_transition(&d, &restaurant.timezone, at);
            DiscountStatusResponse {
                discount_id: d.id,
                name: d.name,
                countdown,
            }
        })
        .collect();

    Ok(Json(statuses))
}

// `at` pins the evaluation instant; defaults to the current time.
fn parse_at(params: &HashMap<String, String>) -> Result<DateTime<Utc>, AppError> {
    match params.get("at") {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|_| AppError::Validation("Invalid 'at' timestamp (RFC 3339 expected)".into())),
        None => Ok(Utc::now()),
    }
}

fn validate_percentage(pct: f64) -> Result<(), AppError> {
    if !(0.0..=100.0).contains(&pct) {
        return Err(AppError::Validation("discount_percentage must be between 0 and 100".into()));
    }
    Ok(())
}

fn validate_schedule(days: &[u8], start: &str, end: &str) -> Result<(), AppError> {
    if days.len() > 7 {
        return Err(AppError::Validation("days_of_week takes at most 7 entries".into()));
    }
    if days.iter().any(|d| *d > 6) {
        return Err(AppError::Validation("days_of_week entries must be 0 (Sunday) to 6 (Saturday)".into()));
    }
    for (label, value) in [("start_time", start), ("end_time", end)] {
        if NaiveTime::parse_from_str(value, "%H:%M").is_err() {
            return Err(AppError::Validation(format!("{label} must be HH:MM")));
        }
    }
    Ok(())
}
