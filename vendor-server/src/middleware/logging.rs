//! 请求日志中间件
//!
//! 每个请求记录两条日志：开始 (debug) 与结束 (info / warn)

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Classify a finished request for the log line
fn outcome(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "server_error"
    } else if status.is_client_error() {
        "client_error"
    } else {
        "ok"
    }
}

/// 请求日志中间件
///
/// 字段: request_id (x-request-id)、method、route (路由模板，未匹配时为原始路径)、
/// user_agent、status、latency_ms。4xx / 5xx 以 warn 级别输出。
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();

    let (request_id, user_agent) = {
        let headers = req.headers();
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
        };
        (
            header("x-request-id").unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            header("user-agent").unwrap_or_else(|| "unknown".to_string()),
        )
    };

    let method = req.method().clone();
    let route = match req.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_owned(),
        None => req.uri().path().to_owned(),
    };

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        route = %route,
        user_agent = %user_agent,
        "Request started"
    );

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;
    let outcome = outcome(status);

    if outcome == "ok" {
        tracing::info!(
            request_id = %request_id,
            method = %method,
            route = %route,
            status = status.as_u16(),
            latency_ms,
            "Request completed"
        );
    } else {
        tracing::warn!(
            request_id = %request_id,
            method = %method,
            route = %route,
            status = status.as_u16(),
            latency_ms,
            outcome,
            "Request failed"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, routing::get};
    use tower::ServiceExt;

    #[test]
    fn test_outcome() {
        assert_eq!(outcome(StatusCode::OK), "ok");
        assert_eq!(outcome(StatusCode::CONFLICT), "client_error");
        assert_eq!(outcome(StatusCode::INTERNAL_SERVER_ERROR), "server_error");
    }

    #[tokio::test]
    async fn test_wraps_router_and_passes_response_through() {
        let app = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
            .layer(axum::middleware::from_fn(logging_middleware));

        let ok = app
            .clone()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/ping")
                    .header("x-request-id", "req-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);

        // 无 x-request-id 时也能处理
        let missing = app
            .oneshot(axum::http::Request::builder().uri("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
