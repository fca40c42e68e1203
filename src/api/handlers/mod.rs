pub mod auth;
pub mod banner;
pub mod category;
pub mod discount;
pub mod health;
pub mod ingredient;
pub mod item;
pub mod member;
pub mod menu;
pub mod restaurant;
