//! Menu Server - 双语餐厅菜单服务
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (product / review 表)
//! - **服务** (`services`): 校验、时间戳、分类推导
//! - **HTTP API** (`api`): RESTful JSON 接口
//! - **中间件** (`middleware`): 请求日志
//!
//! # 模块结构
//!
//! ```text
//! menu-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── db/            # 数据库层 (models + repository)
//! ├── services/      # 业务规则
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由组装 + oneshot 调用
//! ├── middleware/    # 请求日志
//! └── utils/         # 日志、JSON 提取器
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use routes::{OneshotRouter, build_app, build_router};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Audit logging macro - 管理操作审计 (写入 `audit` target)
///
/// ```ignore
/// audit_log!("delete", "product", &product.id, product.name.as_str());
/// ```
#[macro_export]
macro_rules! audit_log {
    ($action:expr, $resource:expr, $id:expr) => {
        tracing::info!(
            target: "audit",
            action = $action,
            resource = $resource,
            id = %$id,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
    ($action:expr, $resource:expr, $id:expr, $name:expr) => {
        tracing::info!(
            target: "audit",
            action = $action,
            resource = $resource,
            id = %$id,
            name = $name,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
}

/// 设置运行环境
///
/// 1. 加载 `.env` (不存在时忽略)
/// 2. 读取配置
/// 3. 初始化日志
/// 4. 确保工作目录存在
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    std::fs::create_dir_all(&config.work_dir)?;
    tracing::debug!(work_dir = %config.work_dir, environment = %config.environment, "Environment ready");

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    __  ___                
   /  |/  /__  ____  __  __
  / /|_/ / _ \/ __ \/ / / /
 / /  / /  __/ / / / /_/ / 
/_/  /_/\___/_/ /_/\__,_/  
    "#
    );
}
