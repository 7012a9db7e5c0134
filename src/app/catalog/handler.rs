//! 商品目录处理器

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{Map, Value};

use super::{
    model::{Product, ProductQuery},
    service::CatalogService,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

impl AppState {
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }
}

/// 解析请求体；空体视为空对象，非对象 JSON 为错误请求
pub fn parse_body(bytes: &Bytes) -> Result<Map<String, Value>, CoreError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(CoreError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
        Err(_) => Err(CoreError::BadRequest("Invalid JSON body".to_string())),
    }
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.catalog.list_products(&query)?;
    Ok(Json(products))
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, CoreError> {
    Ok(Json(state.catalog.categories()?))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, CoreError> {
    let product = state.catalog.get_product(&id)?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let body = parse_body(&body)?;
    let product = state.catalog.create_product(&body)?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Product>, CoreError> {
    let body = parse_body(&body)?;
    let product = state.catalog.update_product(&id, &body)?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, CoreError> {
    state.catalog.delete_product(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
