// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::StorageError;
use async_trait::async_trait;

/// 偏好存储仓库特质
///
/// 按命名空间划分的字符串键值存储，与具体存储方式（内存、文件、数据库）解耦
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// 读取指定键的值，不存在时返回 `None`
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>, StorageError>;

    /// 写入指定键的值，覆盖已有值
    async fn put(&self, namespace: &str, key: &str, value: &str) -> Result<(), StorageError>;

    /// 删除指定键，键不存在时不报错
    async fn remove(&self, namespace: &str, key: &str) -> Result<(), StorageError>;

    /// 列出命名空间下的所有键
    async fn keys(&self, namespace: &str) -> Result<Vec<String>, StorageError>;
}
