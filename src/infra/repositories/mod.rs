pub mod sqlite_restaurant_repo;
pub mod sqlite_user_repo;
pub mod sqlite_category_repo;
pub mod sqlite_item_repo;
pub mod sqlite_ingredient_repo;
pub mod sqlite_discount_repo;
pub mod sqlite_banner_repo;

pub mod postgres_restaurant_repo;
pub mod postgres_user_repo;
pub mod postgres_category_repo;
pub mod postgres_item_repo;
pub mod postgres_ingredient_repo;
pub mod postgres_discount_repo;
pub mod postgres_banner_repo;

pub mod sqlite_auth_repo;
pub mod postgres_auth_repo;
