use axum::{
    extract::{FromRef, FromRequestParts, Path},
    http::{request::Parts, Method, StatusCode},
};
use crate::domain::services::auth_service::ACCESS_COOKIE;
use crate::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

/// Identity lifted from a verified access token.
pub struct AuthUser {
    pub user_id: String,
    pub restaurant_id: String,
    pub role: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>()
            .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
        let token = cookies.get(ACCESS_COOKIE)
            .ok_or(StatusCode::UNAUTHORIZED)?
            .value()
            .to_string();

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let claims = app_state.auth_service.verify_access_token(&token)
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        // A token only opens its own restaurant's routes.
        if let Ok(Path(params)) = Path::<HashMap<String, String>>::from_request_parts(parts, state).await {
            if let Some(restaurant_id) = params.get("restaurant_id") {
                if *restaurant_id != claims.restaurant_id {
                    return Err(StatusCode::FORBIDDEN);
                }
            }
        }

        // Cookies travel on their own, so every mutating request must
        // echo the CSRF value baked into the token.
        if !matches!(parts.method, Method::GET | Method::HEAD | Method::OPTIONS) {
            let presented = parts.headers.get("X-CSRF-Token")
                .and_then(|v| v.to_str().ok())
                .ok_or(StatusCode::FORBIDDEN)?;
            if presented != claims.csrf_token {
                return Err(StatusCode::FORBIDDEN);
            }
        }

        Span::current().record("restaurant_id", &claims.restaurant_id);
        Span::current().record("user_id", &claims.sub);

        Ok(AuthUser {
            user_id: claims.sub,
            restaurant_id: claims.restaurant_id,
            role: claims.role,
        })
    }
}
