//! Shared harness: a fresh database per test, driven through the full
//! middleware stack with oneshot calls.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use menu_server::{Config, OneshotRouter, ServerState, build_app};
use serde_json::Value;
use tempfile::TempDir;

pub struct TestApp {
    // Dropped last; removes the database directory
    _dir: TempDir,
    pub state: ServerState,
    router: Router<ServerState>,
}

/// JSON response: status plus parsed body (`Value::Null` when empty)
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(dir.path().to_string_lossy(), 0);
        let state = ServerState::initialize(&config).await.unwrap();
        let router = build_app(&state);
        Self {
            _dir: dir,
            state,
            router,
        }
    }

    pub async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self.router.oneshot(&self.state, request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn delete(&mut self, uri: &str) -> TestResponse {
        let request = Request::delete(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post(&mut self, uri: &str, body: &Value) -> TestResponse {
        self.send(json_request("POST", uri, body.to_string())).await
    }

    pub async fn put(&mut self, uri: &str, body: &Value) -> TestResponse {
        self.send(json_request("PUT", uri, body.to_string())).await
    }

    pub async fn patch(&mut self, uri: &str, body: &Value) -> TestResponse {
        self.send(json_request("PATCH", uri, body.to_string())).await
    }

    /// Create a product and return its id
    pub async fn create_product(&mut self, body: Value) -> String {
        let res = self.post("/api/products", &body).await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
        res.body["id"].as_str().unwrap().to_string()
    }

    /// Submit a review and return the id of the newest stored review
    pub async fn submit_review(&mut self, body: Value) -> String {
        let res = self.post("/api/reviews", &body).await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
        let all = self.get("/api/reviews").await;
        all.body[0]["id"].as_str().unwrap().to_string()
    }
}

pub fn json_request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub fn product(name: &str, price: f64, category: &str, subcategory: Option<&str>) -> Value {
    let mut body = serde_json::json!({
        "name": name,
        "price": price,
        "category": category,
    });
    if let Some(sub) = subcategory {
        body["subcategory"] = Value::from(sub);
    }
    body
}

pub fn review(name: &str, rating: i64) -> Value {
    serde_json::json!({
        "name": name,
        "phone": "0500000000",
        "comment": "Great food",
        "rating": rating,
    })
}

/// Ensure consecutive creates get distinct millisecond timestamps
pub async fn tick() {
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
}
