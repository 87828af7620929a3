//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::MessageResponse;
use shared::models::{Product, ProductInput};

use crate::api::{AppJson, AppResult};
use crate::audit_log;
use crate::core::ServerState;

const RESOURCE: &str = "product";

/// GET /api/products - 获取所有商品 (按创建时间倒序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.catalog.list_all().await?;
    Ok(Json(products))
}

/// GET /api/products/{id} - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.get(&id).await?;
    Ok(Json(product))
}

/// POST /api/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ProductInput>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.catalog.create(payload).await?;

    audit_log!("create", RESOURCE, &product.id, product.name.as_str());

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id} - 更新商品 (整体替换)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<ProductInput>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.update(&id, payload).await?;

    audit_log!("update", RESOURCE, &product.id, product.name.as_str());

    Ok(Json(product))
}

/// DELETE /api/products/{id} - 删除商品 (硬删除)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let product = state.catalog.delete(&id).await?;

    audit_log!("delete", RESOURCE, &product.id, product.name.as_str());

    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
