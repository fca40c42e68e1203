mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        panic!("Response body is empty. Status: {}", status);
    }
    match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => panic!("Failed to parse JSON: {:?}. Status: {}. Body: {:?}", e, status, String::from_utf8_lossy(&bytes))
    }
}

#[tokio::test]
async fn test_public_menu_applies_active_discounts() {
    let app = TestApp::new().await;

    // 1. Register restaurant (default timezone UTC) and log in
    let (restaurant_id, admin_secret) = app.register_restaurant("Trattoria Bella", "trattoria-bella").await;
    let auth = app.login(&restaurant_id, "admin", &admin_secret).await;

    // 2. Two categories, in display order
    let starters_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/categories", restaurant_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "Starters", "sort_order": 0}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(starters_res.status(), StatusCode::OK);
    let starters_id = parse_body(starters_res).await["id"].as_str().unwrap().to_string();

    let mains_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/categories", restaurant_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "Mains", "sort_order": 1}).to_string())).unwrap()
    ).await.unwrap();
    let mains_id = parse_body(mains_res).await["id"].as_str().unwrap().to_string();

    // 3. Ingredients, one allergen
    let peanuts_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/ingredients", restaurant_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "Peanuts", "is_allergen": true}).to_string())).unwrap()
    ).await.unwrap();
    let peanuts_id = parse_body(peanuts_res).await["id"].as_str().unwrap().to_string();

    let basil_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/ingredients", restaurant_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "Basil"}).to_string())).unwrap()
    ).await.unwrap();
    let basil_id = parse_body(basil_res).await["id"].as_str().unwrap().to_string();

    // 4. Items: one per category, plus one hidden item
    let bruschetta_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/items", restaurant_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "category_id": starters_id,
                "name": "Bruschetta",
                "price": 8.0,
                "ingredient_ids": [basil_id]
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(bruschetta_res.status(), StatusCode::OK);
    let _ = parse_body(bruschetta_res).await;

    let pad_thai_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/items", restaurant_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "category_id": mains_id,
                "name": "Pad Thai",
                "price": 14.0,
                "ingredient_ids": [peanuts_id, basil_id]
            }).to_string())).unwrap()
    ).await.unwrap();
    let _ = parse_body(pad_thai_res).await;

    let hidden_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/items", restaurant_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "category_id": mains_id,
                "name": "Secret Dish",
                "price": 99.0
            }).to_string())).unwrap()
    ).await.unwrap();
    let hidden_id = parse_body(hidden_res).await["id"].as_str().unwrap().to_string();

    let hide_res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/{}/items/{}", restaurant_id, hidden_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"is_available": false}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(hide_res.status(), StatusCode::OK);

    // 5. Banner
    let banner_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/banners", restaurant_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"title": "Monday Dinner Deal", "message": "25% off mains"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(banner_res.status(), StatusCode::OK);

    // 6. Discount: Mondays 17:00-19:00, 25% off Mains
    let discount_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/discounts", restaurant_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "category_id": mains_id,
                "name": "Dinner Deal",
                "discount_percentage": 25.0,
                "days_of_week": [1],
                "start_time": "17:00",
                "end_time": "19:00"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(discount_res.status(), StatusCode::OK);

    // 7. Monday 18:00 UTC: the window is open
    let menu_res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri("/api/v1/menu/trattoria-bella?at=2025-06-02T18:00:00Z")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(menu_res.status(), StatusCode::OK);
    let menu = parse_body(menu_res).await;

    assert_eq!(menu["restaurant"]["name"], "Trattoria Bella");
    assert_eq!(menu["restaurant"]["currency"], "$");
    assert_eq!(menu["restaurant"]["theme"]["primary_color"], "#1f2937");

    let banners = menu["banners"].as_array().unwrap();
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0]["title"], "Monday Dinner Deal");

    let categories = menu["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0]["name"], "Starters");
    assert_eq!(categories[1]["name"], "Mains");

    let starters_items = categories[0]["items"].as_array().unwrap();
    assert_eq!(starters_items.len(), 1);
    assert_eq!(starters_items[0]["name"], "Bruschetta");
    assert_eq!(starters_items[0]["is_promotion"], false);
    assert!(starters_items[0]["promotion_price"].is_null());

    // Secret Dish is unavailable and must not leak out
    let mains_items = categories[1]["items"].as_array().unwrap();
    assert_eq!(mains_items.len(), 1);
    assert_eq!(mains_items[0]["name"], "Pad Thai");
    assert_eq!(mains_items[0]["is_promotion"], true);
    assert_eq!(mains_items[0]["promotion_price"], 10.5);
    assert_eq!(mains_items[0]["promotion_name"], "Dinner Deal");
    assert_eq!(mains_items[0]["promotion_percentage"], 25.0);

    let pad_thai_ingredients = mains_items[0]["ingredients"].as_array().unwrap();
    assert_eq!(pad_thai_ingredients.len(), 2);
    assert_eq!(pad_thai_ingredients[0]["name"], "Peanuts");
    assert_eq!(pad_thai_ingredients[0]["is_allergen"], true);
    assert_eq!(pad_thai_ingredients[1]["name"], "Basil");
    assert_eq!(pad_thai_ingredients[1]["is_allergen"], false);

    // 8. Tuesday same hour: no discount runs
    let tue_res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri("/api/v1/menu/trattoria-bella?at=2025-06-03T18:00:00Z")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let tue_menu = parse_body(tue_res).await;
    let tue_mains = tue_menu["categories"][1]["items"].as_array().unwrap();
    assert_eq!(tue_mains[0]["is_promotion"], false);
    assert!(tue_mains[0]["promotion_price"].is_null());
    assert!(tue_mains[0]["promotion_name"].is_null());

    // 9. End minute is inclusive; one minute past is not
    let at_end_res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri("/api/v1/menu/trattoria-bella?at=2025-06-02T19:00:00Z")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let at_end = parse_body(at_end_res).await;
    assert_eq!(at_end["categories"][1]["items"][0]["is_promotion"], true);

    let past_end_res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri("/api/v1/menu/trattoria-bella?at=2025-06-02T19:01:00Z")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let past_end = parse_body(past_end_res).await;
    assert_eq!(past_end["categories"][1]["items"][0]["is_promotion"], false);
}

#[tokio::test]
async fn test_menu_hides_inactive_categories_and_banners() {
    let app = TestApp::new().await;

    let (restaurant_id, admin_secret) = app.register_restaurant("Night Owl", "night-owl").await;
    let auth = app.login(&restaurant_id, "admin", &admin_secret).await;

    let cat_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/categories", restaurant_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "Seasonal"}).to_string())).unwrap()
    ).await.unwrap();
    let category_id = parse_body(cat_res).await["id"].as_str().unwrap().to_string();

    let item_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/items", restaurant_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"category_id": category_id, "name": "Pumpkin Soup", "price": 6.5}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(item_res.status(), StatusCode::OK);

    let banner_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/banners", restaurant_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"title": "Closed for holidays"}).to_string())).unwrap()
    ).await.unwrap();
    let banner_id = parse_body(banner_res).await["id"].as_str().unwrap().to_string();

    // Visible while both are active
    let before_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/menu/night-owl")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let before = parse_body(before_res).await;
    assert_eq!(before["categories"].as_array().unwrap().len(), 1);
    assert_eq!(before["banners"].as_array().unwrap().len(), 1);

    // Deactivate both
    let cat_off = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/{}/categories/{}", restaurant_id, category_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"is_active": false}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(cat_off.status(), StatusCode::OK);

    let banner_off = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/{}/banners/{}", restaurant_id, banner_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"is_active": false}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(banner_off.status(), StatusCode::OK);

    let after_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/menu/night-owl")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let after = parse_body(after_res).await;
    assert_eq!(after["categories"].as_array().unwrap().len(), 0);
    assert_eq!(after["banners"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_menu_unknown_slug_and_bad_timestamp() {
    let app = TestApp::new().await;

    let missing_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/menu/no-such-place")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(missing_res.status(), StatusCode::NOT_FOUND);

    let (_, _) = app.register_restaurant("Corner Cafe", "corner-cafe").await;

    let bad_at_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/menu/corner-cafe?at=yesterday")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(bad_at_res.status(), StatusCode::BAD_REQUEST);
}
