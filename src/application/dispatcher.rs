// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::host_event::HostEvent;
use crate::domain::services::config_store::ConfigStore;
use crate::domain::services::refresh_service::RefreshService;
use crate::workers::manager::WorkerManager;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, error, info};

/// 触发事件分发器
///
/// 把宿主环境的事件路由到刷新服务、配置存储和后台工作器
pub struct TriggerDispatcher {
    refresher: Arc<RefreshService>,
    store: ConfigStore,
    workers: Mutex<WorkerManager>,
}

impl TriggerDispatcher {
    /// 创建新的分发器实例
    ///
    /// # 参数
    ///
    /// * `refresher` - 刷新服务
    /// * `workers` - 后台工作管理器，在 `Enabled`/`Disabled` 时启动或停止
    pub fn new(refresher: Arc<RefreshService>, workers: WorkerManager) -> Self {
        Self {
            store: refresher.store().clone(),
            refresher,
            workers: Mutex::new(workers),
        }
    }

    /// 处理单个宿主事件
    ///
    /// 刷新失败和删除失败都只记录日志，不向宿主返回错误
    pub async fn handle(&self, event: HostEvent) {
        match event {
            HostEvent::Refresh(ids) => {
                debug!("Refresh requested for {:?}", ids);
                for id in ids {
                    self.refresher.refresh_and_render(id).await;
                }
            }
            HostEvent::Removed(ids) => {
                for id in ids {
                    if let Err(e) = self.store.delete(id).await {
                        error!("Failed to delete configuration for target {}: {}", id, e);
                    }
                }
            }
            HostEvent::Enabled => {
                if self.workers.lock().await.start() {
                    info!("Background refresh enabled");
                }
            }
            HostEvent::Disabled => {
                if self.workers.lock().await.stop() {
                    info!("Background refresh disabled");
                }
            }
        }
    }

    /// 持续消费事件直到发送端全部关闭，然后停止后台刷新
    pub async fn run(&self, mut receiver: mpsc::Receiver<HostEvent>) {
        while let Some(event) = receiver.recv().await {
            self.handle(event).await;
        }
        self.workers.lock().await.stop();
        debug!("Trigger channel closed");
    }

    /// 后台刷新是否在运行
    pub async fn is_background_running(&self) -> bool {
        self.workers.lock().await.is_running()
    }
}
