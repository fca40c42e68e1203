use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("database error")]
    Database(#[from] sqlx::Error),
    #[error("{0} not found")]
    NotFound(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("internal server error")]
    Internal,
}

// SQLite 2067 / Postgres 23505, the unique-constraint codes the
// repositories rely on for duplicate slugs and usernames.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code().map(|c| c == "2067" || c == "23505"))
        .unwrap_or(false)
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database(e) = &self {
            if is_unique_violation(e) {
                let body = Json(json!({ "error": "already exists" }));
                return (StatusCode::CONFLICT, body).into_response();
            }
            error!("database error: {:?}", e);
        }

        // Database details never reach the client.
        let message = match &self {
            AppError::Database(_) => "internal server error".to_string(),
            other => other.to_string(),
        };

        let body = Json(json!({ "error": message }));
        (self.status(), body).into_response()
    }
}
