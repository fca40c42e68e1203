use std::sync::Arc;
use crate::domain::ports::{
    RestaurantRepository, UserRepository, AuthRepository, CategoryRepository,
    ItemRepository, IngredientRepository, DiscountRepository, BannerRepository
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub restaurant_repo: Arc<dyn RestaurantRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub auth_repo: Arc<dyn AuthRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub item_repo: Arc<dyn ItemRepository>,
    pub ingredient_repo: Arc<dyn IngredientRepository>,
    pub discount_repo: Arc<dyn DiscountRepository>,
    pub banner_repo: Arc<dyn BannerRepository>,
    pub auth_service: Arc<AuthService>,
}
