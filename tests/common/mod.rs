#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use movies_api::app::create_app;
use movies_api::config::settings::AppConfig;
use movies_api::modules::movie::memory::InMemoryMovieStore;
use movies_api::state::AppState;

/// Router plus an in-memory store, built fresh per test so tests stay
/// independent.
pub struct TestApp {
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    body_bytes: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body_bytes).unwrap_or(Value::Null)
    }

    pub fn body_is_empty(&self) -> bool {
        self.body_bytes.is_empty()
    }

    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION)?.to_str().ok()
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let config = AppConfig {
            server_port: 0,
            database_url: String::new(),
            max_page_size: 100,
        };
        let state = AppState::new(config, Arc::new(InMemoryMovieStore::new()));
        Self {
            router: create_app(state).await,
        }
    }

    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).expect("request build failed"))
            .await
            .expect("request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("body read failed")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body_bytes,
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path, None).await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put_json(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn patch_json(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request(Method::DELETE, path, None).await
    }

    /// Inserts a valid movie and returns its generated id.
    pub async fn seed_movie(&self, title: &str, genre: &str, duration: i32) -> i64 {
        let resp = self
            .post_json(
                "/api/movie",
                serde_json::json!({"title": title, "genre": genre, "duration": duration}),
            )
            .await;
        assert_eq!(resp.status, StatusCode::CREATED);
        resp.json()["id"].as_i64().expect("created body has an id")
    }
}
