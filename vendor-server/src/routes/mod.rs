use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue, StatusCode};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::ServerState;
use crate::middleware;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(api::health::router())
        .merge(api::dashboard::router())
        .merge(api::orders::router())
        .merge(api::menu::router())
        .merge(api::earnings::router())
        .merge(api::profile::router())
        .merge(api::onboarding::router())
        .merge(api::kyc::router())
        .merge(api::support::router())
        .merge(api::theme::router())
        .merge(api::uploads::router())
}

/// Build a fully configured application with all middleware
///
/// Used by both the HTTP server and the in-process tests
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    let config = &state.config;
    // Multipart bodies carry several documents (KYC), each capped by FileStore
    let body_limit = config.max_upload_bytes.saturating_mul(8);

    build_router()
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_millis(config.request_timeout_ms),
        ))
        // ========== Tower HTTP Middleware ==========
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging - outermost, executed first
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // ========== Request ID ==========
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
}
