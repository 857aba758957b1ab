//! HTTP 测试工具
//!
//! 每个测试使用独立的临时工作目录，通过 `oneshot` 直接驱动路由，无需监听端口。

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use vendor_server::{Config, ServerState, routes};

pub const BOUNDARY: &str = "dabbzo-test-boundary";

pub struct TestApp {
    pub app: Router,
    pub state: ServerState,
    pub dir: TempDir,
}

pub fn test_config(dir: &TempDir) -> Config {
    Config::with_overrides(dir.path().to_string_lossy().to_string(), 0)
}

pub async fn app_in(dir: &TempDir) -> (Router, ServerState) {
    app_with(&test_config(dir)).await
}

pub async fn app_with(config: &Config) -> (Router, ServerState) {
    let state = ServerState::initialize(config)
        .await
        .expect("state should initialize");
    let app = routes::build_app(&state).with_state(state.clone());
    (app, state)
}

pub async fn spawn_app() -> TestApp {
    let dir = TempDir::new().expect("tempdir");
    let (app, state) = app_in(&dir).await;
    TestApp { app, state, dir }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        send(&self.app, Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        send(&self.app, Method::POST, uri, body).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        send(&self.app, Method::PUT, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        send(&self.app, Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        send(&self.app, Method::DELETE, uri, None).await
    }
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let (status, bytes) = send_request(app, request).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, value)
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes()
        .to_vec();
    (status, bytes)
}

/// Build a `multipart/form-data` request from `(field, file_name, bytes)` parts
pub fn multipart_request(uri: &str, parts: &[(&str, &str, Vec<u8>)]) -> Request<Body> {
    let mut body = Vec::new();
    for (field, file_name, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("request")
}

/// A 2x2 PNG
pub fn png_bytes() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(2, 2, image::Rgb([255, 90, 31]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

pub fn pdf_bytes() -> Vec<u8> {
    b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\ntrailer\n<<>>\n%%EOF\n".to_vec()
}
