//! Product and category endpoints
//! Run: cargo test -p menu-server --test products_api

mod common;

use common::{TestApp, json_request, product, tick};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_then_get_returns_stored_product() {
    let mut app = TestApp::new().await;

    let res = app
        .post(
            "/api/products",
            &json!({
                "name": "  Burger ",
                "description": "Beef burger",
                "price": 12.5,
                "category": "Main",
                "subcategory": "Meat",
                "calories": 650,
                "ingredients": ["beef", " ", "bun"],
                "isPopular": true,
                "customizationOptions": [
                    {"name": "Size", "options": ["S", "L"], "priceAdjustment": 2}
                ]
            }),
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
    let id = res.body["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(res.body["name"], "Burger");
    assert_eq!(res.body["ingredients"], json!(["beef", "bun"]));
    assert_eq!(res.body["customizationOptions"][0]["priceAdjustment"], 2.0);
    assert_eq!(res.body["createdAt"], res.body["updatedAt"]);

    let fetched = app.get(&format!("/api/products/{}", id)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, res.body);

    // Table-qualified ids are accepted too
    let qualified = app.get(&format!("/api/products/product:{}", id)).await;
    assert_eq!(qualified.status, StatusCode::OK);
    assert_eq!(qualified.body["id"], id.as_str());
}

#[tokio::test]
async fn missing_required_fields_are_rejected_and_nothing_persisted() {
    let mut app = TestApp::new().await;

    let res = app
        .post("/api/products", &json!({"description": "no name"}))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], 2);
    let message = res.body["error"].as_str().unwrap();
    for field in ["name", "price", "category"] {
        assert!(message.contains(field), "{} missing from {}", field, message);
        assert!(res.body["details"][field].is_string());
    }

    let all = app.get("/api/products").await;
    assert_eq!(all.body, json!([]));
}

#[tokio::test]
async fn negative_price_is_rejected() {
    let mut app = TestApp::new().await;

    let res = app
        .post("/api/products", &product("Burger", -5.0, "Main", None))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body["details"]["price"].is_string());
    assert_eq!(app.get("/api/products").await.body, json!([]));

    let res = app
        .post("/api/products", &product("Water", 0.0, "Drinks", None))
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let mut app = TestApp::new().await;

    let res = app
        .send(json_request("POST", "/api/products", "{\"name\": "))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], 5);
    assert!(res.body["error"].is_string());

    // Wrong type for a field
    let res = app
        .post(
            "/api/products",
            &json!({"name": "Burger", "price": "cheap", "category": "Main"}),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_is_newest_first() {
    let mut app = TestApp::new().await;

    for name in ["First", "Second", "Third"] {
        app.create_product(product(name, 1.0, "Main", None)).await;
        tick().await;
    }

    let res = app.get("/api/products").await;
    let names: Vec<&str> = res
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_created_at() {
    let mut app = TestApp::new().await;
    let id = app
        .create_product(json!({
            "name": "Juice",
            "price": 3,
            "category": "Drinks",
            "subcategory": "Cold",
            "isPopular": true
        }))
        .await;
    let before = app.get(&format!("/api/products/{}", id)).await.body;
    tick().await;

    let res = app
        .put(
            &format!("/api/products/{}", id),
            &product("Orange Juice", 4.0, "Drinks", None),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["id"], id.as_str());
    assert_eq!(res.body["name"], "Orange Juice");
    assert_eq!(res.body["price"], 4.0);
    // Full replace: omitted fields fall back to defaults
    assert!(res.body.get("subcategory").is_none());
    assert_eq!(res.body["isPopular"], false);
    assert_eq!(res.body["createdAt"], before["createdAt"]);
    assert!(res.body["updatedAt"].as_i64() >= before["updatedAt"].as_i64());
}

#[tokio::test]
async fn invalid_update_leaves_product_unchanged() {
    let mut app = TestApp::new().await;
    let id = app.create_product(product("Burger", 10.0, "Main", None)).await;
    let before = app.get(&format!("/api/products/{}", id)).await.body;

    let res = app
        .put(
            &format!("/api/products/{}", id),
            &product("Burger", -1.0, "Main", None),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let after = app.get(&format!("/api/products/{}", id)).await.body;
    assert_eq!(after, before);
}

#[tokio::test]
async fn absent_ids_are_not_found_and_nothing_changes() {
    let mut app = TestApp::new().await;
    let id = app.create_product(product("Burger", 10.0, "Main", None)).await;
    let before = app.get("/api/products").await.body;

    let res = app.get("/api/products/missing").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["code"], 6001);

    let res = app
        .put("/api/products/missing", &product("Ghost", 1.0, "Main", None))
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = app.delete("/api/products/missing").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    assert_eq!(app.get("/api/products").await.body, before);
    assert_eq!(
        app.get(&format!("/api/products/{}", id)).await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn delete_twice_is_not_found() {
    let mut app = TestApp::new().await;
    let id = app.create_product(product("Burger", 10.0, "Main", None)).await;

    let res = app.delete(&format!("/api/products/{}", id)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["message"], "Product deleted successfully");

    let res = app.delete(&format!("/api/products/{}", id)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(
        app.get(&format!("/api/products/{}", id)).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn categories_are_empty_without_products() {
    let mut app = TestApp::new().await;
    let res = app.get("/api/categories").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({}));
}

#[tokio::test]
async fn categories_are_derived_from_products() {
    let mut app = TestApp::new().await;
    app.create_product(product("Burger", 10.0, "Main", Some("Meat")))
        .await;
    app.create_product(product("Kebab", 12.0, "Main", Some("Meat")))
        .await;
    app.create_product(product("Falafel", 6.0, "Main", Some("Vegetarian")))
        .await;
    app.create_product(product("Water", 1.0, "Drinks", Some("   ")))
        .await;
    app.create_product(product("عصير", 3.0, "مشروبات", Some("بارد")))
        .await;

    let res = app.get("/api/categories").await;
    assert_eq!(
        res.body,
        json!({
            "Drinks": [],
            "Main": ["Meat", "Vegetarian"],
            "مشروبات": ["بارد"]
        })
    );

    // Removing the last product of a category removes the category
    let list = app.get("/api/products").await.body;
    let water_id = list
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "Water")
        .and_then(|p| p["id"].as_str())
        .unwrap()
        .to_string();
    app.delete(&format!("/api/products/{}", water_id)).await;
    let res = app.get("/api/categories").await;
    assert!(res.body.get("Drinks").is_none());
}

#[tokio::test]
async fn health_and_request_id() {
    let mut app = TestApp::new().await;

    let res = app.get("/health").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "healthy");
    assert_eq!(res.body["database"]["status"], "ok");
    assert!(res.headers.contains_key("x-request-id"));

    // A caller-supplied id is echoed back
    let request = http::Request::get("/api/products")
        .header("x-request-id", "abc-123")
        .body(axum::body::Body::empty())
        .unwrap();
    let res = app.send(request).await;
    assert_eq!(res.headers["x-request-id"], "abc-123");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let mut app = TestApp::new().await;
    let res = app.get("/api/unknown").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}
