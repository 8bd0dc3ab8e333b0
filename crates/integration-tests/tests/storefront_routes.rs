//! End-to-end tests for the storefront HTTP routes.
//!
//! Each test builds the full router over a profile file in a temp directory
//! and drives it with `tower::ServiceExt::oneshot`, so no server is started.

#![allow(clippy::unwrap_used)]

use std::fs;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use teahouse_core::{Cart, Price};
use teahouse_integration_tests::test_app;
use teahouse_storefront::storage::{CART_KEY, FileStorage, KeyValueStore};
use tempfile::TempDir;
use tokio::task::JoinSet;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

struct TestShop {
    app: Router,
    dir: TempDir,
}

impl TestShop {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("static/css")).unwrap();
        fs::write(dir.path().join("static/css/site.css"), "body {}").unwrap();

        let storage = FileStorage::new(dir.path().join("profile.json"));
        let app = test_app(storage, &dir.path().join("static"));
        Self { app, dir }
    }

    fn persisted(&self) -> Cart {
        let raw = FileStorage::new(self.dir.path().join("profile.json"))
            .get(CART_KEY)
            .unwrap()
            .unwrap();
        Cart::from_json(&raw).unwrap()
    }

    async fn get(&self, path: &str) -> (StatusCode, Option<String>, String) {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn post_form(&self, path: &str, form: &str) -> (StatusCode, Option<String>, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_owned()))
            .unwrap();
        self.send(request).await
    }

    /// Returns (status, `HX-Trigger` header, body).
    async fn send(&self, request: Request<Body>) -> (StatusCode, Option<String>, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let trigger = response
            .headers()
            .get("HX-Trigger")
            .map(|value| value.to_str().unwrap().to_owned());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, trigger, String::from_utf8(bytes.to_vec()).unwrap())
    }
}

// ---------------------------------------------------------------------------
// Pages and assets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_health() {
    let shop = TestShop::new();
    let (status, _, body) = shop.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_home_lists_menu() {
    let shop = TestShop::new();
    let (status, _, body) = shop.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Tea"));
    assert!(body.contains("Cake"));
    assert!(body.contains("Rs. 120"));
    assert!(body.contains("hx-post=\"/cart/add\""));
    assert!(body.contains("id=\"cart-count\""));
    assert!(body.contains("id=\"mobile-cart-count\""));
}

#[tokio::test]
async fn test_static_assets_served() {
    let shop = TestShop::new();
    let (status, _, body) = shop.get("/static/css/site.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body {}");
}

// ---------------------------------------------------------------------------
// Cart fragments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_empty_cart_fragment() {
    let shop = TestShop::new();
    let (status, _, body) = shop.get("/cart").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Your cart is empty."));
    assert!(body.contains("Total: Rs. 0"));
}

#[tokio::test]
async fn test_add_returns_count_and_trigger() {
    let shop = TestShop::new();

    let (status, trigger, body) = shop.post_form("/cart/add", "id=a&name=Tea&price=50").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(trigger.as_deref(), Some("cart-updated"));
    assert!(body.contains("cart-count"));
    assert!(body.contains('1'));

    shop.post_form("/cart/add", "id=a&name=Tea&price=50").await;
    let (_, _, body) = shop.get("/cart/count").await;
    assert!(body.contains('2'));

    let cart = shop.persisted();
    assert_eq!(cart.total_quantity(), 2);
}

#[tokio::test]
async fn test_add_rejects_invalid_input() {
    let shop = TestShop::new();

    let (status, trigger, _) = shop.post_form("/cart/add", "id=a&name=Tea&price=-5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(trigger.is_none());

    let (status, _, _) = shop.post_form("/cart/add", "id=a&name=Tea&price=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = shop.post_form("/cart/add", "id=+&name=Tea&price=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Sub-paisa and oversized amounts would not survive the profile file.
    let (status, _, _) = shop.post_form("/cart/add", "id=a&name=Tea&price=0.125").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = shop
        .post_form("/cart/add", "id=a&name=Tea&price=1000000000000")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, _, body) = shop.get("/cart/count").await;
    assert!(body.contains('0'));
}

#[tokio::test]
async fn test_remove_returns_item_list() {
    let shop = TestShop::new();
    shop.post_form("/cart/add", "id=a&name=Tea&price=50").await;
    shop.post_form("/cart/add", "id=b&name=Cake&price=120").await;

    let (status, trigger, body) = shop.post_form("/cart/remove", "id=a").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(trigger.as_deref(), Some("cart-updated"));
    assert!(body.contains("Cake (x1) - Rs. 120"));
    assert!(!body.contains("Tea (x1)"));
    assert!(body.contains("Total: Rs. 120"));

    // Absent ids are not an error.
    let (status, _, _) = shop.post_form("/cart/remove", "id=ghost").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shop.persisted().len(), 1);
}

#[tokio::test]
async fn test_remove_blank_id_is_noop() {
    let shop = TestShop::new();
    shop.post_form("/cart/add", "id=a&name=Tea&price=50").await;

    for form in ["id=", "id=+", "id=%20%20"] {
        let (status, trigger, body) = shop.post_form("/cart/remove", form).await;
        assert_eq!(status, StatusCode::OK, "form {form:?}");
        assert_eq!(trigger.as_deref(), Some("cart-updated"));
        assert!(body.contains("Tea (x1) - Rs. 50"));
    }

    assert_eq!(shop.persisted().total_quantity(), 1);
}

#[tokio::test]
async fn test_fractional_prices_are_persisted_exactly() {
    let shop = TestShop::new();
    shop.post_form("/cart/add", "id=a&name=Tea&price=12.34").await;
    shop.post_form("/cart/add", "id=a&name=Tea&price=12.34").await;
    shop.post_form("/cart/add", "id=b&name=Cake&price=0.1").await;

    let cart = shop.persisted();
    assert_eq!(cart.total_price(), Price::parse("24.78").unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_are_all_counted() {
    let shop = TestShop::new();

    let mut requests = JoinSet::new();
    for _ in 0..8 {
        let app = shop.app.clone();
        requests.spawn(async move {
            let request = Request::builder()
                .method("POST")
                .uri("/cart/add")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("id=a&name=Tea&price=50"))
                .unwrap();
            app.oneshot(request).await.unwrap().status()
        });
    }
    while let Some(status) = requests.join_next().await {
        assert_eq!(status.unwrap(), StatusCode::OK);
    }

    assert_eq!(shop.persisted().total_quantity(), 8);
}

#[tokio::test]
async fn test_checkout_flow() {
    let shop = TestShop::new();

    let (status, trigger, body) = shop.post_form("/cart/checkout", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(trigger.is_none());
    assert!(body.contains("Cart is empty!"));

    shop.post_form("/cart/add", "id=a&name=Tea&price=50").await;
    let (status, trigger, body) = shop.post_form("/cart/checkout", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(trigger.as_deref(), Some("cart-updated, cart-checked-out"));
    assert!(body.contains("Checkout successful! (Demo)"));

    assert!(shop.persisted().is_empty());
    let (_, _, body) = shop.get("/cart").await;
    assert!(body.contains("Your cart is empty."));
}

#[tokio::test]
async fn test_cart_survives_restart() {
    let shop = TestShop::new();
    shop.post_form("/cart/add", "id=b&name=Cake&price=120").await;

    let storage = FileStorage::new(shop.dir.path().join("profile.json"));
    let restarted = test_app(storage, &shop.dir.path().join("static"));
    let request = Request::builder().uri("/cart").body(Body::empty()).unwrap();
    let response = restarted.oneshot(request).await.unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    assert!(String::from_utf8(bytes.to_vec()).unwrap().contains("Cake (x1) - Rs. 120"));
}
