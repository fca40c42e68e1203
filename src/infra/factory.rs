use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::ConnectOptions;
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    postgres_restaurant_repo::PostgresRestaurantRepo, postgres_user_repo::PostgresUserRepo,
    postgres_auth_repo::PostgresAuthRepo, postgres_category_repo::PostgresCategoryRepo,
    postgres_item_repo::PostgresItemRepo, postgres_ingredient_repo::PostgresIngredientRepo,
    postgres_discount_repo::PostgresDiscountRepo, postgres_banner_repo::PostgresBannerRepo,
    sqlite_restaurant_repo::SqliteRestaurantRepo, sqlite_user_repo::SqliteUserRepo,
    sqlite_auth_repo::SqliteAuthRepo, sqlite_category_repo::SqliteCategoryRepo,
    sqlite_item_repo::SqliteItemRepo, sqlite_ingredient_repo::SqliteIngredientRepo,
    sqlite_discount_repo::SqliteDiscountRepo, sqlite_banner_repo::SqliteBannerRepo,
};

const SLOW_STATEMENT: Duration = Duration::from_millis(500);

/// The storage backend follows the DATABASE_URL scheme; everything
/// behind the ports is decided here once, at startup.
pub async fn bootstrap_state(config: &Config) -> AppState {
    let url = &config.database_url;
    if url.starts_with("postgres://") || url.starts_with("postgresql://") {
        postgres_state(config).await
    } else {
        sqlite_state(config).await
    }
}

async fn postgres_state(config: &Config) -> AppState {
    info!("connecting to Postgres");

    let opts = config.database_url
        .parse::<PgConnectOptions>()
        .expect("DATABASE_URL is not a valid Postgres URL")
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, SLOW_STATEMENT);

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_with(opts)
        .await
        .expect("Postgres connection failed");

    sqlx::migrate!("./migrations/postgres")
        .run(&pool)
        .await
        .expect("Postgres migrations failed");

    let auth_repo = Arc::new(PostgresAuthRepo::new(pool.clone()));
    AppState {
        config: config.clone(),
        restaurant_repo: Arc::new(PostgresRestaurantRepo::new(pool.clone())),
        user_repo: Arc::new(PostgresUserRepo::new(pool.clone())),
        category_repo: Arc::new(PostgresCategoryRepo::new(pool.clone())),
        item_repo: Arc::new(PostgresItemRepo::new(pool.clone())),
        ingredient_repo: Arc::new(PostgresIngredientRepo::new(pool.clone())),
        discount_repo: Arc::new(PostgresDiscountRepo::new(pool.clone())),
        banner_repo: Arc::new(PostgresBannerRepo::new(pool)),
        auth_service: Arc::new(AuthService::new(auth_repo.clone(), config.clone())),
        auth_repo,
    }
}

async fn sqlite_state(config: &Config) -> AppState {
    info!("connecting to SQLite (WAL)");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("DATABASE_URL is not a valid SQLite path")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, SLOW_STATEMENT);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("SQLite connection failed");

    sqlx::migrate!("./migrations/sqlite")
        .run(&pool)
        .await
        .expect("SQLite migrations failed");

    let auth_repo = Arc::new(SqliteAuthRepo::new(pool.clone()));
    AppState {
        config: config.clone(),
        restaurant_repo: Arc::new(SqliteRestaurantRepo::new(pool.clone())),
        user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
        category_repo: Arc::new(SqliteCategoryRepo::new(pool.clone())),
        item_repo: Arc::new(SqliteItemRepo::new(pool.clone())),
        ingredient_repo: Arc::new(SqliteIngredientRepo::new(pool.clone())),
        discount_repo: Arc::new(SqliteDiscountRepo::new(pool.clone())),
        banner_repo: Arc::new(SqliteBannerRepo::new(pool)),
        auth_service: Arc::new(AuthService::new(auth_repo.clone(), config.clone())),
        auth_repo,
    }
}
