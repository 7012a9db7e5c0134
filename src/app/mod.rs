//! 应用层：路由组装

pub mod catalog;

use axum::{middleware, response::Json, routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::core::{
    config::HttpConfig,
    error::CoreError,
    middleware::{cors_layer, handle_panic, request_logging_middleware, request_timeout},
};
use catalog::handler::{self, AppState};

/// 只含路由与状态，不带网络层中间件
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route(
            "/api/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/api/products/:id",
            get(handler::get_product)
                .patch(handler::update_product)
                .delete(handler::delete_product),
        )
        .route("/api/categories", get(handler::list_categories))
        .fallback(not_found)
        .with_state(state)
}

/// 完整的服务：路由加日志、追踪、CORS、超时与 panic 捕获
pub fn build_app(state: AppState, config: &HttpConfig) -> Router {
    routes(state)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(request_timeout(config)))
        .layer(CatchPanicLayer::custom(handle_panic))
}

async fn index() -> &'static str {
    "Catalog API is running. Try /api/products"
}

async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<Json<serde_json::Value>, CoreError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "products": state.catalog.count()?,
    })))
}

async fn not_found() -> CoreError {
    CoreError::NotFound("Not found".to_string())
}
