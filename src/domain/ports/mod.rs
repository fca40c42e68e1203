use crate::domain::models::{
    restaurant::Restaurant, user::User, category::Category, item::MenuItem,
    ingredient::Ingredient, discount::ScheduledDiscount, banner::Banner,
    auth::RefreshTokenRecord
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn create(&self, restaurant: &Restaurant) -> Result<Restaurant, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Restaurant>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Restaurant>, AppError>;
    async fn update(&self, restaurant: &Restaurant) -> Result<Restaurant, AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_username(&self, restaurant_id: &str, username: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, restaurant_id: &str, id: &str) -> Result<Option<User>, AppError>;
    async fn list_by_restaurant(&self, restaurant_id: &str) -> Result<Vec<User>, AppError>;
    async fn delete(&self, restaurant_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn create_refresh_token(&self, record: &RefreshTokenRecord) -> Result<(), AppError>;
    async fn find_refresh_token(&self, token_hash: &str) -> Result<Option<RefreshTokenRecord>, AppError>;
    async fn delete_refresh_token(&self, token_hash: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: &Category) -> Result<Category, AppError>;
    async fn find_by_id(&self, restaurant_id: &str, id: &str) -> Result<Option<Category>, AppError>;
    async fn list(&self, restaurant_id: &str) -> Result<Vec<Category>, AppError>;
    async fn update(&self, category: &Category) -> Result<Category, AppError>;
    async fn delete(&self, restaurant_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create(&self, item: &MenuItem) -> Result<MenuItem, AppError>;
    async fn find_by_id(&self, restaurant_id: &str, id: &str) -> Result<Option<MenuItem>, AppError>;
    async fn list(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, AppError>;
    async fn update(&self, item: &MenuItem) -> Result<MenuItem, AppError>;
    async fn delete(&self, restaurant_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait IngredientRepository: Send + Sync {
    async fn create(&self, ingredient: &Ingredient) -> Result<Ingredient, AppError>;
    async fn find_by_id(&self, restaurant_id: &str, id: &str) -> Result<Option<Ingredient>, AppError>;
    async fn list(&self, restaurant_id: &str) -> Result<Vec<Ingredient>, AppError>;
    async fn update(&self, ingredient: &Ingredient) -> Result<Ingredient, AppError>;
    async fn delete(&self, restaurant_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait DiscountRepository: Send + Sync {
    async fn create(&self, discount: &ScheduledDiscount) -> Result<ScheduledDiscount, AppError>;
    async fn find_by_id(&self, restaurant_id: &str, id: &str) -> Result<Option<ScheduledDiscount>, AppError>;
    async fn list(&self, restaurant_id: &str) -> Result<Vec<ScheduledDiscount>, AppError>;
    async fn update(&self, discount: &ScheduledDiscount) -> Result<ScheduledDiscount, AppError>;
    async fn delete(&self, restaurant_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BannerRepository: Send + Sync {
    async fn create(&self, banner: &Banner) -> Result<Banner, AppError>;
    async fn find_by_id(&self, restaurant_id: &str, id: &str) -> Result<Option<Banner>, AppError>;
    async fn list(&self, restaurant_id: &str) -> Result<Vec<Banner>, AppError>;
    async fn update(&self, banner: &Banner) -> Result<Banner, AppError>;
    async fn delete(&self, restaurant_id: &str, id: &str) -> Result<(), AppError>;
}
