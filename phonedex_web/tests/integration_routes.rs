//! Integration tests for the HTTP routes.
//!
//! These tests drive the router in-process and verify that:
//! - The wishlist API keeps its JSON request/response shapes
//! - Missing phones are rejected with 400
//! - The search page renders results and echoes the filters

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use phonedex_catalog::{Catalog, NormalizeOptions};
use phonedex_web::{AppState, MutationResponse, WishlistResponse, router};

const CATALOG: &str = "\
Phone_Name,RAM,ROM,Processor,Current_Price,image
\"Galaxy X (Black, 128GB)\",6 GB,128 GB,Exynos 850,\"₹12,999\",https://img.example/x.jpg
\"Galaxy Lite (Blue, 32GB)\",2 GB,32 GB,Helio,\"₹7,499\",
\"Pixel 8 (Obsidian, 128GB)\",8 GB,128 GB,Tensor G3,\"₹52,999\",
";

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn app() -> Router {
    let catalog = Catalog::from_reader(CATALOG.as_bytes(), &NormalizeOptions::default())
        .expect("catalog should parse");
    router(AppState::new(catalog, 20))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_default()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap_or_default()
}

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, body.to_vec())
}

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn wishlist(app: &Router) -> WishlistResponse {
    let (status, body) = send(app, get("/get_wishlist")).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).expect("wishlist should be JSON")
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn test_add_then_get_wishlist() {
    let app = app();

    let (status, body) = send(
        &app,
        post_json("/add_to_wishlist", r#"{"phone": "Galaxy X", "imageURL": "u"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let response: MutationResponse =
        serde_json::from_slice(&body).expect("response should be JSON");
    assert!(response.success);

    let (_, body) = send(&app, get("/get_wishlist")).await;
    let json: serde_json::Value = serde_json::from_slice(&body).expect("wishlist should be JSON");
    assert_eq!(
        json,
        serde_json::json!({"wishlist": [{"phone": "Galaxy X", "imageURL": "u"}]})
    );
}

#[tokio::test]
async fn test_duplicate_add_keeps_single_entry() {
    let app = app();
    for _ in 0..2 {
        let (status, _) = send(
            &app,
            post_json("/add_to_wishlist", r#"{"phone": "Galaxy X", "imageURL": "u"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(wishlist(&app).await.wishlist.len(), 1);
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let app = app();
    send(&app, post_json("/add_to_wishlist", r#"{"phone": "Pixel 8"}"#)).await;

    let (status, _) = send(
        &app,
        post_json("/remove_from_wishlist", r#"{"phone": "Nokia"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entries = wishlist(&app).await.wishlist;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].image_url, "");

    let (status, _) = send(
        &app,
        post_json("/remove_from_wishlist", r#"{"phone": "Pixel 8"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(wishlist(&app).await.wishlist.is_empty());
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn test_missing_phone_is_bad_request() {
    let app = app();

    for (uri, body) in [
        ("/add_to_wishlist", r#"{"imageURL": "u"}"#),
        ("/add_to_wishlist", r#"{"phone": ""}"#),
        ("/remove_from_wishlist", "{}"),
        ("/remove_from_wishlist", "not json"),
    ] {
        let (status, body) = send(&app, post_json(uri, body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        let response: MutationResponse =
            serde_json::from_slice(&body).expect("response should be JSON");
        assert!(!response.success);
    }
    assert!(wishlist(&app).await.wishlist.is_empty());
}

#[tokio::test]
async fn test_search_page_applies_filters() {
    let app = app();
    let (status, body) = send(
        &app,
        get("/search?brand=Galaxy&max_budget=10000&min_ram=&min_rom="),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let page = String::from_utf8_lossy(&body);
    assert!(page.contains("Galaxy Lite (Blue, 32GB)"));
    assert!(!page.contains("Galaxy X (Black, 128GB)"));
    assert!(!page.contains("Pixel 8"));
    // Brand is echoed lower-cased.
    assert!(page.contains(r#"name="brand" value="galaxy""#));
    assert!(page.contains(r#"name="max_budget" value="10000""#));
}

#[tokio::test]
async fn test_search_repeated_key_uses_first_value() {
    let app = app();
    let (status, body) = send(&app, get("/search?brand=galaxy&brand=pixel")).await;
    assert_eq!(status, StatusCode::OK);

    let page = String::from_utf8_lossy(&body);
    assert!(page.contains("Galaxy X (Black, 128GB)"));
    assert!(page.contains("Galaxy Lite (Blue, 32GB)"));
    assert!(!page.contains("Pixel 8 (Obsidian, 128GB)"));
    assert!(page.contains(r#"name="brand" value="galaxy""#));
}

#[tokio::test]
async fn test_search_over_budget_is_empty() {
    let app = app();
    let (_, body) = send(&app, get("/search?brand=galaxy&max_budget=5000")).await;
    let page = String::from_utf8_lossy(&body);
    assert!(page.contains("No phones to show."));
}

#[tokio::test]
async fn test_search_without_filters_shows_nothing() {
    let app = app();
    let (status, body) = send(&app, get("/search")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("No phones to show."));

    let (_, body) = send(&app, get("/search?min_ram=oops")).await;
    let page = String::from_utf8_lossy(&body);
    assert!(page.contains("Pixel 8 (Obsidian, 128GB)"));
}

#[tokio::test]
async fn test_index_shows_wishlist() {
    let app = app();
    send(
        &app,
        post_json("/add_to_wishlist", r#"{"phone": "Pixel 8", "imageURL": "p.png"}"#),
    )
    .await;

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    let page = String::from_utf8_lossy(&body);
    assert!(page.contains(r#"data-phone="Pixel 8""#));
    assert!(page.contains("No phones to show."));
}
