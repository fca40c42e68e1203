use axum::{extract::State, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::error::AppError;
use crate::domain::models::auth::{AuthResponse, UserProfile};
use crate::domain::services::auth_service::{
    verify_password, SessionTokens, ACCESS_COOKIE, ACCESS_TTL_MINUTES, REFRESH_COOKIE,
    REFRESH_TTL_DAYS,
};
use std::sync::Arc;
use tower_cookies::{Cookie, Cookies};
use tower_cookies::cookie::SameSite;
use time::Duration;
use tracing::info;

#[derive(serde::Deserialize)]
pub struct LoginRequest {
    pub restaurant_id: String,
    pub username: String,
    pub password: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo
        .find_by_username(&payload.restaurant_id, &payload.username)
        .await?
        .ok_or(AppError::Unauthorized)?;

    verify_password(&payload.password, &user.password_hash)?;

    let tokens = state.auth_service.start_session(&user).await?;
    install_session_cookies(&cookies, &tokens);

    info!(user_id = %user.id, restaurant_id = %user.restaurant_id, "session opened");

    Ok(Json(AuthResponse {
        csrf_token: tokens.csrf_token,
        user: UserProfile::from(&user),
    }))
}

pub async fn refresh(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let presented = cookies.get(REFRESH_COOKIE)
        .ok_or(AppError::Unauthorized)?
        .value()
        .to_string();

    let record = state.auth_service.consume_refresh_token(&presented).await?;

    let user = state.user_repo
        .find_by_id(&record.restaurant_id, &record.user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let tokens = state.auth_service.start_session(&user).await?;
    install_session_cookies(&cookies, &tokens);

    info!(user_id = %user.id, "session rotated");

    Ok(Json(AuthResponse {
        csrf_token: tokens.csrf_token,
        user: UserProfile::from(&user),
    }))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    if let Some(cookie) = cookies.get(REFRESH_COOKIE) {
        // Best effort; an already-gone record still logs the client out.
        let _ = state.auth_service.revoke_refresh_token(cookie.value()).await;
    }

    clear_session_cookies(&cookies);
    info!("session closed");

    Ok(StatusCode::OK)
}

fn session_cookie(name: &'static str, value: String, ttl: Duration) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(ttl)
        .build()
}

fn install_session_cookies(cookies: &Cookies, tokens: &SessionTokens) {
    cookies.add(session_cookie(
        ACCESS_COOKIE,
        tokens.access_jwt.clone(),
        Duration::minutes(ACCESS_TTL_MINUTES),
    ));
    cookies.add(session_cookie(
        REFRESH_COOKIE,
        tokens.refresh_token.clone(),
        Duration::days(REFRESH_TTL_DAYS),
    ));
}

fn clear_session_cookies(cookies: &Cookies) {
    for name in [ACCESS_COOKIE, REFRESH_COOKIE] {
        cookies.remove(Cookie::build((name, "")).path("/").build());
    }
}
