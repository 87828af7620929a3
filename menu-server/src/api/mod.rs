//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`products`] - 商品管理接口
//! - [`categories`] - 分类索引接口 (只读, 由商品推导)
//! - [`reviews`] - 评价提交与审核接口

pub mod categories;
pub mod health;
pub mod products;
pub mod reviews;

// Re-export common types for handlers
pub use crate::utils::{AppJson, AppResult};
