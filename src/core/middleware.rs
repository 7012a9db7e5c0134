//! 核心中间件模块

use std::{any::Any, time::Duration};

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};
use uuid::Uuid;

use super::{config::HttpConfig, error::internal_error_response};

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    info!(
        %request_id,
        %method,
        %uri,
        status = status.as_u16(),
        duration_ms = duration.as_millis() as u64,
        user_agent = ?user_agent,
        "request completed"
    );

    response
}

/// 按配置的来源白名单构建 CORS 层
pub fn cors_layer(config: &HttpConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "忽略无效的 CORS 来源");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
}

pub fn request_timeout(config: &HttpConfig) -> Duration {
    Duration::from_secs(config.timeout_seconds)
}

/// CatchPanicLayer 的回调：记录 panic 内容，返回不含细节的 500
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(%detail, "处理器 panic");
    internal_error_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn panic_response_hides_payload() {
        for payload in [
            Box::new("boom") as Box<dyn Any + Send>,
            Box::new("secret detail".to_string()),
            Box::new(42_u8),
        ] {
            let response = handle_panic(payload);
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(&bytes[..], br#"{"error":"Internal server error"}"#);
        }
    }

    #[test]
    fn cors_layer_tolerates_invalid_origins() {
        let config = HttpConfig {
            allowed_origins: vec!["http://ok.test".to_string(), "bad\norigin".to_string()],
            ..HttpConfig::default()
        };
        let _ = cors_layer(&config);
        assert_eq!(request_timeout(&config), Duration::from_secs(30));
    }
}
