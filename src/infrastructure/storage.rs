// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::repositories::preference_repository::PreferenceRepository;
use crate::utils::errors::StorageError;

/// 内存偏好存储实现
///
/// 进程退出后数据丢失，适用于测试和嵌入式宿主
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: DashMap<(String, String), String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有命名空间中的条目总数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl PreferenceRepository for MemoryPreferenceStore {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .entries
            .get(&(namespace.to_string(), key.to_string()))
            .map(|v| v.value().clone()))
    }

    async fn put(&self, namespace: &str, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .insert((namespace.to_string(), key.to_string()), value.to_string());
        Ok(())
    }

    async fn remove(&self, namespace: &str, key: &str) -> Result<(), StorageError> {
        self.entries
            .remove(&(namespace.to_string(), key.to_string()));
        Ok(())
    }

    async fn keys(&self, namespace: &str) -> Result<Vec<String>, StorageError> {
        let mut keys: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.key().0 == namespace)
            .map(|entry| entry.key().1.clone())
            .collect();
        keys.sort();
        Ok(keys)
    }
}

/// 本地文件系统偏好存储实现
///
/// 每个命名空间对应 `base_path` 下的一个 JSON 文件，
/// 每次修改都整体重写该文件。
pub struct LocalPreferenceStore {
    base_path: PathBuf,
    // Serializes read-modify-write cycles on the namespace files
    write_lock: Mutex<()>,
}

impl LocalPreferenceStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn namespace_path(&self, namespace: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", namespace))
    }

    async fn read_namespace(&self, namespace: &str) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read(self.namespace_path(namespace)).await {
            Ok(data) => Ok(serde_json::from_slice(&data)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn write_namespace(
        &self,
        namespace: &str,
        entries: &BTreeMap<String, String>,
    ) -> Result<(), StorageError> {
        let full_path = self.namespace_path(namespace);

        // 确保目录存在
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let tmp_path = full_path.with_extension("json.tmp");
        let data = serde_json::to_vec_pretty(entries)?;
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(&data).await?;
        file.flush().await?;
        drop(file);
        fs::rename(&tmp_path, &full_path).await?;

        Ok(())
    }
}

#[async_trait]
impl PreferenceRepository for LocalPreferenceStore {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.write_lock.lock().await;
        Ok(self.read_namespace(namespace).await?.remove(key))
    }

    async fn put(&self, namespace: &str, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_namespace(namespace).await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_namespace(namespace, &entries).await
    }

    async fn remove(&self, namespace: &str, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_namespace(namespace).await?;
        if entries.remove(key).is_some() {
            self.write_namespace(namespace, &entries).await?;
        }
        Ok(())
    }

    async fn keys(&self, namespace: &str) -> Result<Vec<String>, StorageError> {
        let _guard = self.write_lock.lock().await;
        Ok(self.read_namespace(namespace).await?.into_keys().collect())
    }
}
