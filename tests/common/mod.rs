#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::MockServer;

use quill::api::BlogClient;
use quill::domain::post::NewPost;
use quill::AppState;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn post_json(id: &str, title: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "content": "c",
        "author": "x",
        "comments": [],
        "likes": 0,
        "dislikes": 0
    })
}

pub fn new_post() -> NewPost {
    NewPost {
        title: "Hello".to_string(),
        content: "First post".to_string(),
        author: "ann".to_string(),
    }
}

// ---------------------------------------------------------------------------
// TestApp: one mock blog API and one router per test
// ---------------------------------------------------------------------------

pub struct TestApp {
    router: Router,
    pub api: MockServer,
    pub state: AppState,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    body_bytes: bytes::Bytes,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body_bytes).into_owned()
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body_bytes).unwrap_or(Value::Null)
    }
}

/// Client pointed at the mock API.
pub fn client(api: &MockServer) -> BlogClient {
    BlogClient::new(api.uri().parse().expect("mock server uri")).expect("client")
}

impl TestApp {
    pub async fn start() -> Self {
        let api = MockServer::start().await;
        let state = AppState::new(client(&api));
        let router = quill::http::router(state.clone());

        TestApp { router, api, state }
    }

    // ------------------------------------------------------------------
    // Low-level request helper
    // ------------------------------------------------------------------
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot failed");

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .map(|value| value.to_str().expect("location header").to_string());
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to collect body")
            .to_bytes();

        TestResponse {
            status,
            location,
            body_bytes,
        }
    }

    // ------------------------------------------------------------------
    // Convenience HTTP helpers
    // ------------------------------------------------------------------
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.request(request).await
    }

    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }
}
