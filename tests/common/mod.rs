#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use quicknotes::{app::router::build_router, AppState};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

pub struct TestApp {
    app: Router,
}

impl TestApp {
    pub fn new(db: PgPool) -> Self {
        Self {
            app: build_router(AppState { db }),
        }
    }

    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request_json(Method::POST, path, Some(body)).await
    }

    pub async fn patch_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request_json(Method::PATCH, path, Some(body)).await
    }

    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        self.request_json(Method::GET, path, None).await
    }

    pub async fn delete_json(&self, path: &str) -> (StatusCode, Value) {
        self.request_json(Method::DELETE, path, None).await
    }

    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let (status, bytes) = self.request(Method::GET, path, None).await;
        let text = String::from_utf8(bytes).expect("response is not valid utf-8 text");
        (status, text)
    }

    /// Status only, for responses whose body is not JSON (e.g. path
    /// extractor rejections).
    pub async fn patch_status(&self, path: &str, body: Value) -> StatusCode {
        let (status, _) = self.request(Method::PATCH, path, Some(body)).await;
        status
    }

    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, bytes) = self.request(method, path, body).await;

        if bytes.is_empty() {
            return (status, Value::Null);
        }

        let value = serde_json::from_slice(&bytes).expect("response is not valid json");
        (status, value)
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let mut req_builder = Request::builder().method(method).uri(path);

        let body = match body {
            Some(body) => {
                req_builder = req_builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&body).expect("failed to serialize request body"))
            }
            None => Body::empty(),
        };

        let req = req_builder.body(body).expect("failed to build request");
        let response = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("request execution failed");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("failed to read response body");

        (status, bytes.to_vec())
    }
}
