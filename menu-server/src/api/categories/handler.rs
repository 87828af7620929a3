//! Category API Handlers

use axum::{Json, extract::State};
use shared::models::CategoryIndex;

use crate::api::AppResult;
use crate::core::ServerState;

/// GET /api/categories - 分类 -> 子分类 (空库返回 `{}`)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<CategoryIndex>> {
    let index = state.catalog.categories().await?;
    Ok(Json(index))
}
