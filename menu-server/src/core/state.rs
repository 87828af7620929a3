use std::time::Instant;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::services::{CatalogService, ReviewService};

/// 服务器状态 - 持有所有服务的共享引用
///
/// `Surreal<Db>` 内部是 Arc，克隆成本极低，可以直接作为 axum State。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | catalog | CatalogService | 商品 + 分类 |
/// | reviews | ReviewService | 评价 + 审核 |
/// | started_at | Instant | 启动时间 (health 用) |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    pub catalog: CatalogService,
    pub reviews: ReviewService,
    pub started_at: Instant,
}

impl ServerState {
    /// 用已打开的数据库构造状态
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self {
            catalog: CatalogService::new(db.clone()),
            reviews: ReviewService::new(db.clone()),
            config,
            db,
            started_at: Instant::now(),
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (work_dir/database)
    /// 2. 数据库 (work_dir/database/menu.db) 与表结构
    /// 3. 各服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_path = config.database_path();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db_service =
            DbService::new(&db_path, &config.db_namespace, &config.db_database).await?;

        tracing::info!(path = %db_path.display(), "Server state initialized");
        Ok(Self::new(config.clone(), db_service.db))
    }

    /// 运行时间 (秒)
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
