use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, auth, restaurant, member, category, item, ingredient, discount, banner, menu};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{debug, error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/refresh", post(auth::refresh))
        .route("/api/v1/auth/logout", post(auth::logout))

        // Restaurant Public
        .route("/api/v1/restaurants/by-slug/{slug}", get(restaurant::get_restaurant_by_slug))
        .route("/api/v1/menu/{slug}", get(menu::get_public_menu))

        // Restaurant Admin
        .route("/api/v1/restaurants", post(restaurant::create_restaurant).put(restaurant::update_restaurant).get(restaurant::get_current_restaurant))
        .route("/api/v1/{restaurant_id}/members", post(member::create_member).get(member::list_members))
        .route("/api/v1/{restaurant_id}/members/{user_id}", delete(member::delete_member))

        // Catalog
        .route("/api/v1/{restaurant_id}/categories", get(category::list_categories).post(category::create_category))
        .route("/api/v1/{restaurant_id}/categories/{category_id}", delete(category::delete_category).put(category::update_category))
        .route("/api/v1/{restaurant_id}/items", get(item::list_items).post(item::create_item))
        .route("/api/v1/{restaurant_id}/items/{item_id}", get(item::get_item).put(item::update_item).delete(item::delete_item))
        .route("/api/v1/{restaurant_id}/ingredients", get(ingredient::list_ingredients).post(ingredient::create_ingredient))
        .route("/api/v1/{restaurant_id}/ingredients/{ingredient_id}", delete(ingredient::delete_ingredient).put(ingredient::update_ingredient))
        .route("/api/v1/{restaurant_id}/banners", get(banner::list_banners).post(banner::create_banner))
        .route("/api/v1/{restaurant_id}/banners/{banner_id}", delete(banner::delete_banner).put(banner::update_banner))

        // Discounts & schedule status
        .route("/api/v1/{restaurant_id}/discounts", get(discount::list_discounts).post(discount::create_discount))
        .route("/api/v1/{restaurant_id}/discounts/status", get(discount::list_discount_statuses))
        .route("/api/v1/{restaurant_id}/discounts/{discount_id}", get(discount::get_discount).put(discount::update_discount).delete(discount::delete_discount))
        .route("/api/v1/{restaurant_id}/discounts/{discount_id}/status", get(discount::get_discount_status))

        .layer(
            TraceLayer::new_for_http()
                // The extractors fill in restaurant_id/user_id once auth ran.
                .make_span_with(|request: &Request<Body>| {
                    info_span!(
                        "request",
                        request_id = %Uuid::new_v4(),
                        method = %request.method(),
                        uri = %request.uri(),
                        restaurant_id = tracing::field::Empty,
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|_: &Request<Body>, _: &Span| {
                    debug!("accepted");
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "handled"
                    );
                })
                .on_failure(|class: ServerErrorsFailureClass, latency: Duration, _: &Span| {
                    error!(latency_ms = latency.as_millis(), "request failed: {:?}", class);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
