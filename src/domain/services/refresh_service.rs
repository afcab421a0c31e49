// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::display::DisplayUpdate;
use crate::domain::models::target::{TargetField, TargetId};
use crate::domain::services::config_store::ConfigStore;
use crate::domain::services::renderer::Renderer;
use crate::engines::fetcher::Fetcher;
use std::sync::Arc;
use tracing::debug;

/// 刷新服务
///
/// 编排单个目标的一次刷新周期：读取配置 → 抓取 → 组合显示内容。
/// 每次刷新都是无状态的，后台刷新的失败会被吞掉，只体现为空值。
pub struct RefreshService {
    store: ConfigStore,
    fetcher: Fetcher,
    renderer: Arc<dyn Renderer>,
}

impl RefreshService {
    /// 创建新的刷新服务实例
    pub fn new(store: ConfigStore, fetcher: Fetcher, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            store,
            fetcher,
            renderer,
        }
    }

    /// 执行一次刷新周期，返回显示内容但不渲染
    ///
    /// # 参数
    ///
    /// * `id` - 目标ID
    ///
    /// # 返回值
    ///
    /// 显示值为 `响应文本 + "%"`，抓取失败时为 `"%"`；标签原样返回
    pub async fn refresh(&self, id: TargetId) -> DisplayUpdate {
        let url = self.store.load(id, TargetField::Url).await;
        let label = self.store.load(id, TargetField::Label).await;
        debug!("refreshing target {} url={} label={}", id, url, label);

        let result = self.fetcher.fetch(&url).await;
        DisplayUpdate::compose(id, &result, label)
    }

    /// 刷新并交给渲染方
    pub async fn refresh_and_render(&self, id: TargetId) -> DisplayUpdate {
        let update = self.refresh(id).await;
        self.renderer.render(&update).await;
        update
    }

    /// 依次刷新并渲染所有已配置的目标
    ///
    /// # 返回值
    ///
    /// 刷新的目标数量
    pub async fn refresh_all(&self) -> usize {
        let ids = self.store.target_ids().await;
        for id in &ids {
            self.refresh_and_render(*id).await;
        }
        ids.len()
    }

    /// 配置存储
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }
}
