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

fn cookie_value(response: &axum::response::Response, name: &str) -> String {
    let prefix = format!("{}=", name);
    response.headers().get_all(header::SET_COOKIE).iter()
        .filter_map(|h| h.to_str().ok())
        .find_map(|c| {
            let start = c.find(&prefix)? + prefix.len();
            let rest = &c[start..];
            let end = rest.find(';').unwrap_or(rest.len());
            Some(rest[..end].to_string())
        })
        .unwrap_or_else(|| panic!("cookie {} not in response", name))
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/health")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "ok");
}

#[tokio::test]
async fn test_login_rejections() {
    let app = TestApp::new().await;
    let (restaurant_id, admin_secret) = app.register_restaurant("Lockbox", "lockbox").await;

    let wrong_pw = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/login")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "restaurant_id": restaurant_id,
                "username": "admin",
                "password": "not-the-secret"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(wrong_pw.status(), StatusCode::UNAUTHORIZED);

    let unknown_user = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/login")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "restaurant_id": restaurant_id,
                "username": "nobody",
                "password": admin_secret
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    // Valid credentials under the wrong restaurant are still rejected
    let wrong_restaurant = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/login")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "restaurant_id": "some-other-restaurant",
                "username": "admin",
                "password": admin_secret
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(wrong_restaurant.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_routes_require_valid_token() {
    let app = TestApp::new().await;
    let (restaurant_id, _) = app.register_restaurant("Vault", "vault").await;

    let no_cookie = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/categories", restaurant_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(no_cookie.status(), StatusCode::UNAUTHORIZED);

    let garbage_cookie = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/categories", restaurant_id))
            .header(header::COOKIE, "access_token=garbage")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(garbage_cookie.status(), StatusCode::UNAUTHORIZED);

    let current_restaurant = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/restaurants")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(current_restaurant.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_csrf_and_tenant_isolation() {
    let app = TestApp::new().await;
    let (restaurant_a, secret_a) = app.register_restaurant("Alpha", "alpha").await;
    let (restaurant_b, _) = app.register_restaurant("Beta", "beta").await;
    let auth_a = app.login(&restaurant_a, "admin", &secret_a).await;

    // Reads need no CSRF token
    let read_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/categories", restaurant_a))
            .header(header::COOKIE, format!("access_token={}", auth_a.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(read_res.status(), StatusCode::OK);

    // Writes without the header are rejected
    let no_csrf = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/categories", restaurant_a))
            .header(header::COOKIE, format!("access_token={}", auth_a.access_token))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "Blocked"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(no_csrf.status(), StatusCode::FORBIDDEN);

    let wrong_csrf = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/categories", restaurant_a))
            .header(header::COOKIE, format!("access_token={}", auth_a.access_token))
            .header("X-CSRF-Token", "stolen-or-stale")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "Blocked"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(wrong_csrf.status(), StatusCode::FORBIDDEN);

    // A token minted for Alpha opens nothing under Beta
    let cross_read = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/categories", restaurant_b))
            .header(header::COOKIE, format!("access_token={}", auth_a.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(cross_read.status(), StatusCode::FORBIDDEN);

    let cross_write = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/categories", restaurant_b))
            .header(header::COOKIE, format!("access_token={}", auth_a.access_token))
            .header("X-CSRF-Token", &auth_a.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "Intruder"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(cross_write.status(), StatusCode::FORBIDDEN);

    // A restaurant id that matches nothing 404s before any handler runs
    let unknown = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/no-such-restaurant/categories")
            .header(header::COOKIE, format!("access_token={}", auth_a.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_refresh_rotation_and_logout() {
    let app = TestApp::new().await;
    let (restaurant_id, admin_secret) = app.register_restaurant("Rotor", "rotor").await;

    let login_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/login")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "restaurant_id": restaurant_id,
                "username": "admin",
                "password": admin_secret
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(login_res.status(), StatusCode::OK);
    let refresh1 = cookie_value(&login_res, "refresh_token");

    // 1. Refresh issues a fresh pair
    let refresh_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/refresh")
            .header(header::COOKIE, format!("refresh_token={}", refresh1))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(refresh_res.status(), StatusCode::OK);
    let refresh2 = cookie_value(&refresh_res, "refresh_token");
    let access2 = cookie_value(&refresh_res, "access_token");
    let body2 = parse_body(refresh_res).await;
    let csrf2 = body2["csrf_token"].as_str().unwrap().to_string();
    assert_ne!(refresh1, refresh2);

    // 2. The consumed token is dead; replaying it fails
    let replay_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/refresh")
            .header(header::COOKIE, format!("refresh_token={}", refresh1))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(replay_res.status(), StatusCode::UNAUTHORIZED);

    // 3. The fresh pair actually works for writes
    let write_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/categories", restaurant_id))
            .header(header::COOKIE, format!("access_token={}", access2))
            .header("X-CSRF-Token", &csrf2)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "After Refresh"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(write_res.status(), StatusCode::OK);

    // 4. Logout revokes the current refresh token
    let logout_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/logout")
            .header(header::COOKIE, format!("refresh_token={}", refresh2))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(logout_res.status(), StatusCode::OK);

    let after_logout = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/refresh")
            .header(header::COOKIE, format!("refresh_token={}", refresh2))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(after_logout.status(), StatusCode::UNAUTHORIZED);
}
