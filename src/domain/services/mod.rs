pub mod auth_service;
pub mod defaults;
pub mod promotions;
