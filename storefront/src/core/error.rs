use shared::error::AppError;
use thiserror::Error;

/// 服务器启动/运行错误
///
/// 请求级别的错误使用 [`AppError`]，这里只覆盖进程级别的失败。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("目录数据无效: {0}")]
    Catalog(#[from] AppError),

    #[error("端口绑定失败: {0}")]
    Bind(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
