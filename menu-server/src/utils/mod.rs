//! 工具模块 - 通用工具函数和类型
//!
//! - [`AppJson`] - JSON 请求体提取器 (解析失败返回统一错误体)
//! - [`logger`] - 日志初始化

pub mod json;
pub mod logger;

pub use json::AppJson;

// Re-export error types from shared
pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};
