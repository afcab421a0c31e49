// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::refresh_service::RefreshService;
use crate::workers::refresh_worker::RefreshWorker;
use crate::workers::worker::Worker;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// 工作管理器
///
/// 管理后台周期刷新任务的启动和停止
pub struct WorkerManager {
    refresher: Arc<RefreshService>,
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl WorkerManager {
    pub fn new(refresher: Arc<RefreshService>, period: Duration) -> Self {
        Self {
            refresher,
            period,
            handle: None,
        }
    }

    /// 启动周期刷新工作器
    ///
    /// # 返回值
    ///
    /// 已经在运行时返回 false
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }

        let worker = RefreshWorker::new(self.refresher.clone(), self.period);
        let handle = tokio::spawn(async move {
            info!("Starting {}", worker.name());
            if let Err(e) = worker.run().await {
                error!("{} stopped: {}", worker.name(), e);
            }
        });
        self.handle = Some(handle);
        true
    }

    /// 停止周期刷新工作器
    ///
    /// 正在进行的抓取不会被等待，任务直接中止
    ///
    /// # 返回值
    ///
    /// 原本未运行时返回 false
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                let was_running = !handle.is_finished();
                handle.abort();
                info!("Refresh worker stopped");
                was_running
            }
            None => false,
        }
    }

    /// 工作器是否在运行
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for WorkerManager {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
