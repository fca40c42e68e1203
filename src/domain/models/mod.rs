pub mod auth;
pub mod banner;
pub mod category;
pub mod discount;
pub mod ingredient;
pub mod item;
pub mod restaurant;
pub mod user;
