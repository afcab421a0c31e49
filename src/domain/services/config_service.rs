// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::display::DisplayUpdate;
use crate::domain::models::target::{Target, TargetField, TargetId, INVALID_TARGET_ID};
use crate::domain::services::config_store::ConfigStore;
use crate::domain::services::refresh_service::RefreshService;
use crate::engines::fetcher::Fetcher;
use crate::engines::validators;
use crate::utils::errors::ConfigError;
use std::sync::Arc;
use tracing::{info, warn};

/// 配置服务
///
/// 保存路径：在写入任何配置之前同步完成输入校验。
/// 校验通过后才持久化，并立即刷新渲染该目标。
pub struct ConfigService {
    store: ConfigStore,
    fetcher: Fetcher,
    refresher: Arc<RefreshService>,
    require_reachable: bool,
}

impl ConfigService {
    /// 创建新的配置服务实例
    ///
    /// # 参数
    ///
    /// * `store` - 目标配置存储
    /// * `fetcher` - 抓取器，与后台刷新共用同一把抓取锁
    /// * `refresher` - 保存成功后用于立即刷新
    /// * `require_reachable` - 为 true 时不可达的URL会拒绝保存
    pub fn new(
        store: ConfigStore,
        fetcher: Fetcher,
        refresher: Arc<RefreshService>,
        require_reachable: bool,
    ) -> Self {
        Self {
            store,
            fetcher,
            refresher,
            require_reachable,
        }
    }

    /// 读取目标的当前配置，用于预填编辑表单
    pub async fn edit_target(&self, id: TargetId) -> Result<Target, ConfigError> {
        Self::check_target_id(id)?;
        Ok(self.store.load_target(id).await)
    }

    /// 校验并保存目标配置
    ///
    /// # 参数
    ///
    /// * `id` - 目标ID
    /// * `url` - 抓取地址
    /// * `label` - 显示标签
    ///
    /// # 返回值
    ///
    /// * `Ok(DisplayUpdate)` - 保存成功后立即刷新得到的显示内容
    /// * `Err(ConfigError::InvalidUrl)` - URL语法无效，未进行网络请求
    /// * `Err(ConfigError::UnreachableUrl)` - URL当前无法获取
    pub async fn save_target(
        &self,
        id: TargetId,
        url: &str,
        label: &str,
    ) -> Result<DisplayUpdate, ConfigError> {
        Self::check_target_id(id)?;

        validators::validate_url(url).map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;

        let reachability = self.fetcher.fetch(url).await;
        if !reachability.succeeded {
            if self.require_reachable {
                return Err(ConfigError::UnreachableUrl(url.to_string()));
            }
            warn!(
                "URL {} for target {} is currently unreachable, saving anyway",
                url, id
            );
        }

        self.store.save(id, TargetField::Url, url).await?;
        self.store.save(id, TargetField::Label, label).await?;
        info!("Saved configuration for target {}: url={} label={}", id, url, label);

        Ok(self.refresher.refresh_and_render(id).await)
    }

    fn check_target_id(id: TargetId) -> Result<(), ConfigError> {
        if id == INVALID_TARGET_ID {
            return Err(ConfigError::InvalidTarget(id));
        }
        Ok(())
    }
}
