use std::net::SocketAddr;
use std::path::PathBuf;

/// 服务器配置 - 菜单服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (`.env` 文件由 dotenv 加载)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库位于 database/menu.db) |
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | 开发环境 false / 生产环境 true | 控制台 JSON 日志 |
/// | LOG_DIR | 未设置 | 文件日志目录 |
/// | DB_NAMESPACE | menu | SurrealDB namespace |
/// | DB_DATABASE | menu | SurrealDB database |
/// | MAX_BODY_BYTES | 10485760 | 请求体上限 (data URI 图片) |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 优雅关闭等待时间(毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/menu HTTP_PORT=8080 cargo run -p menu-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库等文件
    pub work_dir: String,
    /// 监听地址
    pub http_host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | production
    pub environment: String,
    /// 默认日志级别
    pub log_level: String,
    /// 控制台是否输出 JSON 日志
    pub log_json: bool,
    /// 文件日志目录 (None 表示只输出到控制台)
    pub log_dir: Option<String>,
    pub db_namespace: String,
    pub db_database: String,
    /// 请求体大小上限 (字节)
    pub max_body_bytes: usize,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let environment = env_or("ENVIRONMENT", "development");
        let is_production = environment == "production";
        Self {
            work_dir: env_or("WORK_DIR", "./data"),
            http_host: env_or("HTTP_HOST", "0.0.0.0"),
            http_port: env_parse("HTTP_PORT", 3000),
            log_level: env_or("LOG_LEVEL", "info"),
            log_json: env_parse("LOG_JSON", is_production),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            db_namespace: env_or("DB_NAMESPACE", "menu"),
            db_database: env_or("DB_DATABASE", "menu"),
            max_body_bytes: env_parse("MAX_BODY_BYTES", 10 * 1024 * 1024),
            shutdown_timeout_ms: env_parse("SHUTDOWN_TIMEOUT_MS", 10000),
            environment,
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库目录: {work_dir}/database/menu.db
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database").join("menu.db")
    }

    /// 监听地址，HTTP_HOST 无法解析时退回 0.0.0.0
    pub fn bind_addr(&self) -> SocketAddr {
        let ip = self
            .http_host
            .parse()
            .unwrap_or(std::net::IpAddr::from([0, 0, 0, 0]));
        SocketAddr::new(ip, self.http_port)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
