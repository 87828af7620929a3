use thiserror::Error;

/// 服务器启动/运行错误
///
/// 请求级错误使用 [`shared::AppError`]；这里只覆盖进程级失败。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("数据库初始化失败: {0}")]
    Database(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<crate::db::repository::RepoError> for ServerError {
    fn from(err: crate::db::repository::RepoError) -> Self {
        ServerError::Database(err.to_string())
    }
}

/// 服务器级 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
