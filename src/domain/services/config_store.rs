// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::target::{Target, TargetField, TargetId};
use crate::domain::repositories::preference_repository::PreferenceRepository;
use crate::utils::errors::StorageError;
use std::sync::Arc;
use tracing::{debug, warn};

/// 偏好命名空间
pub const PREFS_NAMESPACE: &str = "serverload.prefs";

/// 偏好键前缀，完整键为 `前缀 + 字段 + 目标ID`
pub const PREF_PREFIX_KEY: &str = "SERVERLOAD_";

/// 目标配置存储
///
/// 在命名空间键值存储之上，按 `(目标ID, 字段)` 读写目标配置
#[derive(Clone)]
pub struct ConfigStore {
    repository: Arc<dyn PreferenceRepository>,
}

impl ConfigStore {
    /// 创建新的配置存储
    ///
    /// # 参数
    ///
    /// * `repository` - 底层偏好存储
    pub fn new(repository: Arc<dyn PreferenceRepository>) -> Self {
        Self { repository }
    }

    /// 生成持久化键
    pub fn pref_key(id: TargetId, field: TargetField) -> String {
        format!("{}{}{}", PREF_PREFIX_KEY, field, id)
    }

    /// 保存字段值，无条件覆盖旧值
    pub async fn save(
        &self,
        id: TargetId,
        field: TargetField,
        value: &str,
    ) -> Result<(), StorageError> {
        self.repository
            .put(PREFS_NAMESPACE, &Self::pref_key(id, field), value)
            .await
    }

    /// 读取字段值
    ///
    /// 从未保存过时返回空字符串；底层读取失败同样返回空字符串并记录警告
    pub async fn load(&self, id: TargetId, field: TargetField) -> String {
        match self
            .repository
            .get(PREFS_NAMESPACE, &Self::pref_key(id, field))
            .await
        {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                warn!("Failed to load {} for target {}: {}", field, id, e);
                String::new()
            }
        }
    }

    /// 读取目标的全部字段
    pub async fn load_target(&self, id: TargetId) -> Target {
        Target {
            id,
            url: self.load(id, TargetField::Url).await,
            label: self.load(id, TargetField::Label).await,
        }
    }

    /// 删除目标的全部字段
    pub async fn delete(&self, id: TargetId) -> Result<(), StorageError> {
        for field in TargetField::ALL {
            self.repository
                .remove(PREFS_NAMESPACE, &Self::pref_key(id, field))
                .await?;
        }
        debug!("Deleted configuration for target {}", id);
        Ok(())
    }

    /// 列出所有已保存URL的目标ID（升序）
    pub async fn target_ids(&self) -> Vec<TargetId> {
        let keys = match self.repository.keys(PREFS_NAMESPACE).await {
            Ok(keys) => keys,
            Err(e) => {
                warn!("Failed to list configured targets: {}", e);
                return Vec::new();
            }
        };

        let url_prefix = format!("{}{}", PREF_PREFIX_KEY, TargetField::Url);
        let mut ids: Vec<TargetId> = keys
            .iter()
            .filter_map(|key| key.strip_prefix(&url_prefix))
            .filter_map(|suffix| suffix.parse().ok())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}
