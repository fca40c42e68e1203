use carta_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::repositories::{
        sqlite_restaurant_repo::SqliteRestaurantRepo,
        sqlite_user_repo::SqliteUserRepo,
        sqlite_auth_repo::SqliteAuthRepo,
        sqlite_category_repo::SqliteCategoryRepo,
        sqlite_item_repo::SqliteItemRepo,
        sqlite_ingredient_repo::SqliteIngredientRepo,
        sqlite_discount_repo::SqliteDiscountRepo,
        sqlite_banner_repo::SqliteBannerRepo,
    },
    domain::services::auth_service::AuthService,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use tower::ServiceExt;
use serde_json::Value;

pub struct AuthHeaders {
    pub access_token: String,
    pub csrf_token: String,
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

/// Value of a named cookie in the response's Set-Cookie headers.
#[allow(dead_code)]
pub fn set_cookie_value(response: &Response<Body>, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    response.headers().get_all(header::SET_COOKIE).iter().find_map(|h| {
        let raw = h.to_str().ok()?;
        let rest = raw.strip_prefix(&prefix)?;
        Some(rest.split(';').next().unwrap_or(rest).to_string())
    })
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("carta_test_{}.db", Uuid::new_v4());
        let database_url = format!("sqlite://{db_filename}?mode=rwc");

        let connect = SqliteConnectOptions::from_str(&database_url)
            .unwrap()
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(connect)
            .await
            .expect("test database should open");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("test migrations should apply");

        let config = Config {
            database_url,
            port: 0,
            jwt_secret_key: include_str!("keys/test_private.pem").to_string(),
            jwt_public_key: include_str!("keys/test_public.pem").to_string(),
            auth_issuer: "https://carta.test".to_string(),
        };

        let auth_repo = Arc::new(SqliteAuthRepo::new(pool.clone()));
        let state = Arc::new(AppState {
            config: config.clone(),
            restaurant_repo: Arc::new(SqliteRestaurantRepo::new(pool.clone())),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            category_repo: Arc::new(SqliteCategoryRepo::new(pool.clone())),
            item_repo: Arc::new(SqliteItemRepo::new(pool.clone())),
            ingredient_repo: Arc::new(SqliteIngredientRepo::new(pool.clone())),
            discount_repo: Arc::new(SqliteDiscountRepo::new(pool.clone())),
            banner_repo: Arc::new(SqliteBannerRepo::new(pool.clone())),
            auth_service: Arc::new(AuthService::new(auth_repo.clone(), config)),
            auth_repo,
        });

        Self {
            router: create_router(state.clone()),
            pool,
            db_filename,
            state,
        }
    }

    /// Registers a restaurant and returns (restaurant_id, admin_secret).
    pub async fn register_restaurant(&self, name: &str, slug: &str) -> (String, String) {
        let body = serde_json::json!({ "name": name, "slug": slug });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/restaurants")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap()
        ).await.unwrap();
        assert!(
            response.status().is_success(),
            "registration helper got {}",
            response.status()
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: Value = serde_json::from_slice(&bytes).unwrap();

        (
            payload["restaurant_id"].as_str().unwrap().to_string(),
            payload["admin_secret"].as_str().unwrap().to_string(),
        )
    }

    pub async fn login(&self, restaurant_id: &str, username: &str, password: &str) -> AuthHeaders {
        let body = serde_json::json!({
            "restaurant_id": restaurant_id,
            "username": username,
            "password": password,
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap()
        ).await.unwrap();
        assert!(
            response.status().is_success(),
            "login helper got {}",
            response.status()
        );

        let access_token = set_cookie_value(&response, "access_token")
            .expect("login set no access_token cookie");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: Value = serde_json::from_slice(&bytes).unwrap();

        AuthHeaders {
            access_token,
            csrf_token: payload["csrf_token"].as_str().expect("no csrf_token in body").to_string(),
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
