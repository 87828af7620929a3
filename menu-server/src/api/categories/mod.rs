//! Category API 模块
//!
//! 分类不单独存储，每次请求都从当前商品推导。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/categories", get(handler::list))
}
