pub mod auth;
pub mod restaurant;
