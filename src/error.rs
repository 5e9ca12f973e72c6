use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 文件操作错误
    File(FileError),
    /// 配置错误
    Config(ConfigError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::File(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 目录不存在
    DirectoryNotFound {
        path: String,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
            FileError::DirectoryNotFound { path } => write!(f, "目录不存在: {}", path),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. } | FileError::WriteFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 及格分数超出 0-100 范围
    InvalidPassingScore {
        value: u32,
    },
    /// 批次参数为零
    ZeroBatchParameter {
        name: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPassingScore { value } => {
                write!(f, "及格分数 {} 超出范围 [0, 100]", value)
            }
            ConfigError::ZeroBatchParameter { name } => {
                write!(f, "批次参数 {} 不能为 0", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Other(format!("JSON序列化失败: {}", err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建目录不存在错误
    pub fn directory_not_found(path: impl Into<String>) -> Self {
        AppError::File(FileError::DirectoryNotFound { path: path.into() })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
