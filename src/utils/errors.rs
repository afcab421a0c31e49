// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 存储层错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// 其他存储错误
    #[error("Storage error: {0}")]
    Other(String),
}

/// 配置保存错误类型
///
/// 保存路径上的校验错误会同步返回给调用方，并中止本次保存
#[derive(Error, Debug)]
pub enum ConfigError {
    /// URL 语法无效（未进行任何网络请求）
    #[error("Please enter a valid URL: {0}")]
    InvalidUrl(String),

    /// URL 格式正确但当前无法获取
    #[error("Could not retrieve your URL, check your connection: {0}")]
    UnreachableUrl(String),

    /// 宿主环境提供的目标ID无效
    #[error("Invalid target id: {0}")]
    InvalidTarget(u32),

    /// 存储错误
    #[error("Could not save configuration: {0}")]
    Storage(#[from] StorageError),
}

impl ConfigError {
    /// 面向用户的错误类别代码
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigError::InvalidUrl(_) => "INVALID_URL",
            ConfigError::UnreachableUrl(_) => "UNREACHABLE_URL",
            ConfigError::InvalidTarget(_) => "INVALID_TARGET",
            ConfigError::Storage(_) => "STORAGE",
        }
    }
}

/// Worker错误类型
#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("配置错误: {0}")]
    ConfigurationError(String),
}
