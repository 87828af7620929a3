//! 服务层 - 业务规则 (校验、时间戳、NotFound 映射)
//!
//! # 服务列表
//!
//! - [`CatalogService`] - 商品 CRUD 与分类索引
//! - [`ReviewService`] - 评价提交与审核
//! - [`category`] - 分类索引推导 (纯函数)

pub mod catalog_service;
pub mod category;
pub mod review_service;

pub use catalog_service::CatalogService;
pub use category::derive_categories;
pub use review_service::ReviewService;
